//! Model provider trait and implementations.
//!
//! The [`Provider`] trait describes one upstream LLM API: how to tell whether
//! it is usable, what its default models are, how to qualify model names for
//! it, and how to attach its credentials to an outgoing request.
//!
//! # Example
//!
//! ```
//! use switchyard_models::env::MapEnv;
//! use switchyard_models::providers::{AzureOpenAiProvider, CompletionRequest, Provider};
//! use switchyard_models::ModelKind;
//!
//! let env = MapEnv::new()
//!     .with("AZURE_OPENAI_API_KEY", "az-key")
//!     .with("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com");
//! let azure = AzureOpenAiProvider::from_env(&env);
//!
//! assert!(azure.is_available());
//! assert_eq!(azure.map_model("sonnet", ModelKind::Big), "azure/gpt-4o");
//!
//! let request = azure.configure_request(CompletionRequest::new("azure/gpt-4o"));
//! assert_eq!(request.api_version.as_deref(), Some("2024-10-21"));
//! ```

mod anthropic;
mod azure;
mod gemini;
mod openai;
mod types;

use std::fmt;

pub use anthropic::AnthropicProvider;
pub use azure::{AzureOpenAiProvider, DEFAULT_AZURE_API_VERSION};
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use types::*;

use crate::types::{DefaultModels, ModelKind, qualify, strip_prefix};

/// Trait for model providers.
///
/// Implementations are immutable once built; anything read from the
/// environment is captured at construction.
///
/// # Required Methods
///
/// - [`name`](Provider::name) - Unique lowercase identifier (e.g., "openai")
/// - [`prefix`](Provider::prefix) - Segment placed before `/` in qualified model names
/// - [`is_available`](Provider::is_available) - Whether all required credentials are present
/// - [`default_models`](Provider::default_models) - Default big and small models
/// - [`supported_models`](Provider::supported_models) - Informational model list
/// - [`configure_request`](Provider::configure_request) - Attach credentials to a request
pub trait Provider: Send + Sync {
    /// Returns the provider name (e.g., "openai", "azure").
    fn name(&self) -> &str;

    /// Returns the prefix used when qualifying model names.
    ///
    /// Must be unique across a registry.
    fn prefix(&self) -> &str;

    /// Whether every credential this provider needs is set.
    fn is_available(&self) -> bool;

    /// The default big and small models.
    fn default_models(&self) -> &DefaultModels;

    /// Models this provider is known to serve.
    ///
    /// Purely informational: resolution never rejects a model that is missing
    /// from this list.
    fn supported_models(&self) -> Vec<String>;

    /// Inject provider credentials and settings into `request`.
    ///
    /// Never fails. Missing credentials are left unset and the upstream API
    /// reports the authentication failure.
    fn configure_request(&self, request: CompletionRequest) -> CompletionRequest;

    /// Qualify `model_name` for this provider.
    ///
    /// Any existing prefix is dropped. For [`ModelKind::Big`] and
    /// [`ModelKind::Small`] the provider's default model replaces the name.
    fn map_model(&self, model_name: &str, kind: ModelKind) -> String {
        let name = self
            .default_models()
            .get(kind)
            .unwrap_or_else(|| strip_prefix(model_name));
        qualify(self.prefix(), name)
    }

    /// Human-readable label, e.g. `openaiProvider`.
    fn display_name(&self) -> String {
        format!("{}Provider", self.name())
    }
}

impl fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(available={})",
            self.display_name(),
            self.is_available()
        )
    }
}

impl fmt::Display for dyn Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn to_owned_list(models: &[&str]) -> Vec<String> {
    models.iter().map(|m| (*m).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiKey;

    /// A minimal provider whose prefix differs from its name.
    struct MockProvider {
        api_key: Option<ApiKey>,
        defaults: DefaultModels,
    }

    impl MockProvider {
        fn new(api_key: Option<&str>) -> Self {
            Self {
                api_key: api_key.map(ApiKey::new),
                defaults: DefaultModels::new("mock-large", "mock-small"),
            }
        }
    }

    impl Provider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn prefix(&self) -> &str {
            "mk"
        }

        fn is_available(&self) -> bool {
            self.api_key.is_some()
        }

        fn default_models(&self) -> &DefaultModels {
            &self.defaults
        }

        fn supported_models(&self) -> Vec<String> {
            to_owned_list(&["mock-large", "mock-small"])
        }

        fn configure_request(&self, mut request: CompletionRequest) -> CompletionRequest {
            request.api_key = self.api_key.clone();
            request
        }
    }

    #[test]
    fn map_model_auto_keeps_stripped_name() {
        let provider = MockProvider::new(None);
        assert_eq!(provider.map_model("custom", ModelKind::Auto), "mk/custom");
        assert_eq!(provider.map_model("other/custom", ModelKind::Auto), "mk/custom");
        assert_eq!(provider.map_model("a/b/custom", ModelKind::Auto), "mk/custom");
    }

    #[test]
    fn map_model_substitutes_defaults() {
        let provider = MockProvider::new(None);
        assert_eq!(provider.map_model("sonnet", ModelKind::Big), "mk/mock-large");
        assert_eq!(provider.map_model("x/haiku", ModelKind::Small), "mk/mock-small");
    }

    #[test]
    fn debug_shows_availability() {
        let provider: Box<dyn Provider> = Box::new(MockProvider::new(Some("k")));
        assert_eq!(format!("{provider:?}"), "mockProvider(available=true)");

        let provider: Box<dyn Provider> = Box::new(MockProvider::new(None));
        assert_eq!(format!("{provider:?}"), "mockProvider(available=false)");
        assert_eq!(provider.to_string(), "mockProvider");
    }

    #[test]
    fn configure_request_is_used_through_trait_object() {
        let provider: Box<dyn Provider> = Box::new(MockProvider::new(Some("secret")));
        let request = provider.configure_request(CompletionRequest::new("mk/mock-large"));
        assert_eq!(request.api_key, Some(ApiKey::new("secret")));
        assert_eq!(request.model, "mk/mock-large");
    }
}
