//! Anthropic provider.

use tracing::debug;

use super::{CompletionRequest, Provider, to_owned_list};
use crate::auth::ApiKey;
use crate::env::{ANTHROPIC_API_KEY, Environment};
use crate::types::DefaultModels;

const NAME: &str = "anthropic";
const DEFAULT_BIG: &str = "claude-3-5-sonnet-20241022";
const DEFAULT_SMALL: &str = "claude-3-5-haiku-20241022";

const SUPPORTED_MODELS: &[&str] = &[
    "claude-3-5-sonnet-20241022",
    "claude-3-5-haiku-20241022",
    "claude-3-opus-20240229",
];

/// Anthropic API provider. Requires `ANTHROPIC_API_KEY`.
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    api_key: Option<ApiKey>,
    defaults: DefaultModels,
}

impl AnthropicProvider {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            defaults: DefaultModels::new(DEFAULT_BIG, DEFAULT_SMALL),
        }
    }

    pub fn from_env(env: &dyn Environment) -> Self {
        Self {
            api_key: ApiKey::from_env(env, ANTHROPIC_API_KEY),
            defaults: DefaultModels::from_env(env, DEFAULT_BIG, DEFAULT_SMALL),
        }
    }

    pub fn with_default_models(mut self, defaults: DefaultModels) -> Self {
        self.defaults = defaults;
        self
    }
}

impl Provider for AnthropicProvider {
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
        debug!(provider = NAME, model = %request.model, "configured Anthropic request");
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelKind;
    use crate::env::MapEnv;

    #[test]
    fn empty_key_is_unavailable() {
        let env = MapEnv::new().with(ANTHROPIC_API_KEY, "");
        assert!(!AnthropicProvider::from_env(&env).is_available());
    }

    #[test]
    fn empty_key_passed_to_new_is_unavailable() {
        assert!(!AnthropicProvider::new(Some(ApiKey::new(""))).is_available());
        assert!(AnthropicProvider::new(Some(ApiKey::new("ant-key"))).is_available());
    }

    #[test]
    fn sonnet_maps_to_claude_sonnet() {
        let provider = AnthropicProvider::new(None);
        assert_eq!(
            provider.map_model("sonnet", ModelKind::Big),
            "anthropic/claude-3-5-sonnet-20241022"
        );
    }

    #[test]
    fn auto_mode_keeps_requested_name() {
        let provider = AnthropicProvider::new(None);
        assert_eq!(
            provider.map_model("claude-3-opus-20240229", ModelKind::Auto),
            "anthropic/claude-3-opus-20240229"
        );
    }

    #[test]
    fn supported_models_include_opus() {
        let models = AnthropicProvider::new(None).supported_models();
        assert_eq!(models.last().map(String::as_str), Some("claude-3-opus-20240229"));
    }

    #[test]
    fn configure_request_preserves_payload() {
        let provider = AnthropicProvider::new(Some(ApiKey::new("ant-key")));
        let request = provider.configure_request(
            CompletionRequest::new("anthropic/claude-3-5-haiku-20241022")
                .with_field("temperature", 0.2),
        );
        assert_eq!(request.api_key, Some(ApiKey::new("ant-key")));
        assert_eq!(request.body["temperature"], 0.2);
    }
}
