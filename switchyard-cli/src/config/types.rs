use serde::{Deserialize, Serialize};
use switchyard_models::env::{
    ANTHROPIC_API_KEY, AZURE_OPENAI_API_KEY, AZURE_OPENAI_API_VERSION, AZURE_OPENAI_ENDPOINT,
    BIG_MODEL, GEMINI_API_KEY, MapEnv, OPENAI_API_KEY, PREFERRED_PROVIDER, SMALL_MODEL,
};
use switchyard_models::providers::REDACTED;

/// Configuration as stored in TOML files.
///
/// Every field is optional so user and project files can be layered.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SwitchyardConfig {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RoutingConfig {
    /// Provider used for the `sonnet` / `haiku` aliases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_provider: Option<String>,

    /// Override for every provider's big default model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_model: Option<String>,

    /// Override for every provider's small default model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: ApiKeySection,

    #[serde(default)]
    pub azure: AzureSection,

    #[serde(default)]
    pub gemini: ApiKeySection,

    #[serde(default)]
    pub anthropic: ApiKeySection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiKeySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AzureSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Resource endpoint, e.g. `https://<resource>.openai.azure.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl SwitchyardConfig {
    /// Merge two configs (overlay values override base only if explicitly set)
    pub fn merge(base: Self, overlay: Self) -> Self {
        Self {
            routing: RoutingConfig {
                preferred_provider: overlay
                    .routing
                    .preferred_provider
                    .or(base.routing.preferred_provider),
                big_model: overlay.routing.big_model.or(base.routing.big_model),
                small_model: overlay.routing.small_model.or(base.routing.small_model),
            },
            providers: ProvidersConfig {
                openai: ApiKeySection {
                    api_key: overlay
                        .providers
                        .openai
                        .api_key
                        .or(base.providers.openai.api_key),
                },
                azure: AzureSection {
                    api_key: overlay.providers.azure.api_key.or(base.providers.azure.api_key),
                    endpoint: overlay
                        .providers
                        .azure
                        .endpoint
                        .or(base.providers.azure.endpoint),
                    api_version: overlay
                        .providers
                        .azure
                        .api_version
                        .or(base.providers.azure.api_version),
                },
                gemini: ApiKeySection {
                    api_key: overlay
                        .providers
                        .gemini
                        .api_key
                        .or(base.providers.gemini.api_key),
                },
                anthropic: ApiKeySection {
                    api_key: overlay
                        .providers
                        .anthropic
                        .api_key
                        .or(base.providers.anthropic.api_key),
                },
            },
        }
    }

    /// Express the config as environment variables understood by the registry.
    pub fn to_env(&self) -> MapEnv {
        let entries = [
            (PREFERRED_PROVIDER, &self.routing.preferred_provider),
            (BIG_MODEL, &self.routing.big_model),
            (SMALL_MODEL, &self.routing.small_model),
            (OPENAI_API_KEY, &self.providers.openai.api_key),
            (AZURE_OPENAI_API_KEY, &self.providers.azure.api_key),
            (AZURE_OPENAI_ENDPOINT, &self.providers.azure.endpoint),
            (AZURE_OPENAI_API_VERSION, &self.providers.azure.api_version),
            (GEMINI_API_KEY, &self.providers.gemini.api_key),
            (ANTHROPIC_API_KEY, &self.providers.anthropic.api_key),
        ];

        entries
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
            .collect()
    }

    /// Copy with every API key replaced by a placeholder, for display.
    pub fn redacted(&self) -> Self {
        let redact = |key: &Option<String>| key.as_ref().map(|_| REDACTED.to_string());
        let mut config = self.clone();
        config.providers.openai.api_key = redact(&self.providers.openai.api_key);
        config.providers.azure.api_key = redact(&self.providers.azure.api_key);
        config.providers.gemini.api_key = redact(&self.providers.gemini.api_key);
        config.providers.anthropic.api_key = redact(&self.providers.anthropic.api_key);
        config
    }
}
