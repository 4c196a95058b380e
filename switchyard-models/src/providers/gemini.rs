//! Google Gemini provider.

use tracing::debug;

use super::{CompletionRequest, Provider, to_owned_list};
use crate::auth::ApiKey;
use crate::env::{Environment, GEMINI_API_KEY};
use crate::types::DefaultModels;

const NAME: &str = "gemini";
const DEFAULT_BIG: &str = "gemini-2.5-pro-preview-03-25";
const DEFAULT_SMALL: &str = "gemini-2.0-flash";

const SUPPORTED_MODELS: &[&str] = &["gemini-2.5-pro-preview-03-25", "gemini-2.0-flash"];

/// Google Gemini API provider. Requires `GEMINI_API_KEY`.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    api_key: Option<ApiKey>,
    defaults: DefaultModels,
}

impl GeminiProvider {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            defaults: DefaultModels::new(DEFAULT_BIG, DEFAULT_SMALL),
        }
    }

    pub fn from_env(env: &dyn Environment) -> Self {
        Self {
            api_key: ApiKey::from_env(env, GEMINI_API_KEY),
            defaults: DefaultModels::from_env(env, DEFAULT_BIG, DEFAULT_SMALL),
        }
    }

    pub fn with_default_models(mut self, defaults: DefaultModels) -> Self {
        self.defaults = defaults;
        self
    }
}

impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        NAME
    }

    fn prefix(&self) -> &str {
        NAME
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    fn default_models(&self) -> &DefaultModels {
        &self.defaults
    }

    fn supported_models(&self) -> Vec<String> {
        to_owned_list(SUPPORTED_MODELS)
    }

    fn configure_request(&self, mut request: CompletionRequest) -> CompletionRequest {
        request.api_key = self.api_key.clone();
        debug!(provider = NAME, model = %request.model, "configured Gemini request");
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelKind;
    use crate::env::MapEnv;

    #[test]
    fn availability_follows_key() {
        assert!(!GeminiProvider::from_env(&MapEnv::new()).is_available());

        let env = MapEnv::new().with(GEMINI_API_KEY, "g-key");
        assert!(GeminiProvider::from_env(&env).is_available());
    }

    #[test]
    fn empty_key_passed_to_new_is_unavailable() {
        assert!(!GeminiProvider::new(Some(ApiKey::new(""))).is_available());
        assert!(GeminiProvider::new(Some(ApiKey::new("g-key"))).is_available());
    }

    #[test]
    fn aliases_map_to_builtin_defaults() {
        let provider = GeminiProvider::new(None);
        assert_eq!(
            provider.map_model("sonnet", ModelKind::Big),
            "gemini/gemini-2.5-pro-preview-03-25"
        );
        assert_eq!(
            provider.map_model("haiku", ModelKind::Small),
            "gemini/gemini-2.0-flash"
        );
    }

    #[test]
    fn explicit_defaults_replace_builtins() {
        let provider =
            GeminiProvider::new(None).with_default_models(DefaultModels::new("pro", "flash"));
        assert_eq!(provider.map_model("x", ModelKind::Big), "gemini/pro");
    }

    #[test]
    fn configure_request_injects_key() {
        let provider = GeminiProvider::new(Some(ApiKey::new("g-key")));
        let request = provider.configure_request(CompletionRequest::new("gemini/gemini-2.0-flash"));
        assert_eq!(request.api_key, Some(ApiKey::new("g-key")));
    }
}
