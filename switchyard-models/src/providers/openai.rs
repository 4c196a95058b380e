//! OpenAI provider.

use tracing::debug;

use super::{CompletionRequest, Provider, to_owned_list};
use crate::auth::ApiKey;
use crate::env::{Environment, OPENAI_API_KEY};
use crate::types::DefaultModels;

const NAME: &str = "openai";
const DEFAULT_BIG: &str = "gpt-4.1";
const DEFAULT_SMALL: &str = "gpt-4.1-mini";

const SUPPORTED_MODELS: &[&str] = &[
    "o3-mini",
    "o1",
    "o1-mini",
    "o1-pro",
    "gpt-4.5-preview",
    "gpt-4o",
    "gpt-4o-audio-preview",
    "chatgpt-4o-latest",
    "gpt-4o-mini",
    "gpt-4o-mini-audio-preview",
    "gpt-4.1",
    "gpt-4.1-mini",
];

/// OpenAI API provider. Requires `OPENAI_API_KEY`.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    api_key: Option<ApiKey>,
    defaults: DefaultModels,
}

impl OpenAiProvider {
    /// Create a provider with the built-in default models.
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            defaults: DefaultModels::new(DEFAULT_BIG, DEFAULT_SMALL),
        }
    }

    /// Read the key and any `BIG_MODEL` / `SMALL_MODEL` overrides from `env`.
    pub fn from_env(env: &dyn Environment) -> Self {
        Self {
            api_key: ApiKey::from_env(env, OPENAI_API_KEY),
            defaults: DefaultModels::from_env(env, DEFAULT_BIG, DEFAULT_SMALL),
        }
    }

    /// Replace the default models.
    pub fn with_default_models(mut self, defaults: DefaultModels) -> Self {
        self.defaults = defaults;
        self
    }
}

impl Provider for OpenAiProvider {
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
        debug!(provider = NAME, model = %request.model, "configured OpenAI request");
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelKind;
    use crate::env::{BIG_MODEL, MapEnv};

    #[test]
    fn unavailable_without_key() {
        let provider = OpenAiProvider::from_env(&MapEnv::new());
        assert!(!provider.is_available());
    }

    #[test]
    fn available_with_key() {
        let env = MapEnv::new().with(OPENAI_API_KEY, "sk-test");
        assert!(OpenAiProvider::from_env(&env).is_available());
    }

    #[test]
    fn empty_key_passed_to_new_is_unavailable() {
        let provider = OpenAiProvider::new(Some(ApiKey::new("")));
        assert!(!provider.is_available());
        let request = provider.configure_request(CompletionRequest::new("openai/gpt-4.1"));
        assert!(request.api_key.is_none());
    }

    #[test]
    fn default_models_match_builtin_table() {
        let provider = OpenAiProvider::new(None);
        assert_eq!(provider.default_models().big, "gpt-4.1");
        assert_eq!(provider.default_models().small, "gpt-4.1-mini");
    }

    #[test]
    fn big_model_override_is_read_at_construction() {
        let env = MapEnv::new().with(BIG_MODEL, "o1-pro");
        let provider = OpenAiProvider::from_env(&env);
        assert_eq!(provider.map_model("sonnet", ModelKind::Big), "openai/o1-pro");
        assert_eq!(
            provider.map_model("haiku", ModelKind::Small),
            "openai/gpt-4.1-mini"
        );
    }

    #[test]
    fn configure_request_injects_key() {
        let provider = OpenAiProvider::new(Some(ApiKey::new("sk-test")));
        let request = provider.configure_request(CompletionRequest::new("openai/gpt-4.1"));
        assert_eq!(request.api_key.unwrap().expose_secret(), "sk-test");
        assert!(request.api_base.is_none());
        assert!(request.api_version.is_none());
    }

    #[test]
    fn configure_request_without_key_leaves_it_unset() {
        let provider = OpenAiProvider::new(None);
        let request = provider.configure_request(
            CompletionRequest::new("openai/gpt-4.1").with_field("max_tokens", 10),
        );
        assert!(request.api_key.is_none());
        assert_eq!(request.body["max_tokens"], 10);
    }

    #[test]
    fn supported_models_lists_gpt_family() {
        let models = OpenAiProvider::new(None).supported_models();
        assert_eq!(models.len(), 12);
        assert!(models.contains(&"gpt-4.1".to_string()));
        assert!(models.contains(&"o3-mini".to_string()));
    }
}
