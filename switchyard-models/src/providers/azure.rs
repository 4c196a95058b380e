//! Azure OpenAI provider.
//!
//! Model names for Azure are deployment names, so `BIG_MODEL` / `SMALL_MODEL`
//! usually point at deployments rather than public model ids.

use tracing::debug;

use super::{CompletionRequest, Provider, to_owned_list};
use crate::auth::ApiKey;
use crate::env::{
    AZURE_OPENAI_API_KEY, AZURE_OPENAI_API_VERSION, AZURE_OPENAI_ENDPOINT, Environment,
    non_empty,
};
use crate::types::DefaultModels;

const NAME: &str = "azure";
const DEFAULT_BIG: &str = "gpt-4o";
const DEFAULT_SMALL: &str = "gpt-4o-mini";

/// API version sent when `AZURE_OPENAI_API_VERSION` is unset.
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-10-21";

const SUPPORTED_MODELS: &[&str] = &["gpt-4o", "gpt-4o-mini", "gpt-4", "gpt-35-turbo"];

/// Azure OpenAI provider.
///
/// Available only when both `AZURE_OPENAI_API_KEY` and
/// `AZURE_OPENAI_ENDPOINT` are set.
#[derive(Debug, Clone)]
pub struct AzureOpenAiProvider {
    api_key: Option<ApiKey>,
    endpoint: Option<String>,
    api_version: String,
    defaults: DefaultModels,
}

impl AzureOpenAiProvider {
    /// Create a provider with the built-in default models and API version.
    pub fn new(api_key: Option<ApiKey>, endpoint: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            endpoint: endpoint.filter(|e| !e.is_empty()),
            api_version: DEFAULT_AZURE_API_VERSION.to_string(),
            defaults: DefaultModels::new(DEFAULT_BIG, DEFAULT_SMALL),
        }
    }

    /// Read credentials, endpoint, API version, and model overrides from `env`.
    pub fn from_env(env: &dyn Environment) -> Self {
        Self {
            api_key: ApiKey::from_env(env, AZURE_OPENAI_API_KEY),
            endpoint: non_empty(env, AZURE_OPENAI_ENDPOINT),
            api_version: non_empty(env, AZURE_OPENAI_API_VERSION)
                .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string()),
            defaults: DefaultModels::from_env(env, DEFAULT_BIG, DEFAULT_SMALL),
        }
    }

    /// Replace the API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Replace the default models.
    pub fn with_default_models(mut self, defaults: DefaultModels) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

impl Provider for AzureOpenAiProvider {
    fn name(&self) -> &str {
        NAME
    }

    fn prefix(&self) -> &str {
        NAME
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some() && self.endpoint.is_some()
    }

    fn default_models(&self) -> &DefaultModels {
        &self.defaults
    }

    fn supported_models(&self) -> Vec<String> {
        to_owned_list(SUPPORTED_MODELS)
    }

    fn configure_request(&self, mut request: CompletionRequest) -> CompletionRequest {
        request.api_key = self.api_key.clone();
        request.api_base = self.endpoint.clone();
        request.api_version = Some(self.api_version.clone());
        debug!(
            provider = NAME,
            model = %request.model,
            api_version = %self.api_version,
            "configured Azure OpenAI request"
        );
        request
    }
}
