//! Provider registry and model-name resolution.
//!
//! The registry owns every known [`Provider`] and turns a caller-supplied
//! model name into a qualified `prefix/model` string plus the provider that
//! should serve it. Resolution is evaluated in a fixed order:
//!
//! 1. A recognized `prefix/` selects that provider and the name passes
//!    through unchanged.
//! 2. The aliases `sonnet` and `haiku` map to the preferred provider's big and
//!    small defaults, if that provider is available.
//! 3. Anything else goes to the first available provider, name unchanged
//!    apart from qualification.
//!
//! The preferred provider is read from `PREFERRED_PROVIDER` on every call so
//! it can be changed without rebuilding the registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::env::{Environment, PREFERRED_PROVIDER, ProcessEnv, non_empty};
use crate::providers::{
    AnthropicProvider, AzureOpenAiProvider, CompletionRequest, GeminiProvider, OpenAiProvider,
    Provider,
};
use crate::types::{Alias, ModelKind, split_prefix};
use crate::{Error, Result};

/// Provider used for aliases when `PREFERRED_PROVIDER` is unset.
pub const DEFAULT_PREFERRED_PROVIDER: &str = "openai";

/// Which resolution step produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The model carried a registered prefix.
    Explicit,
    /// An alias was mapped through the preferred provider.
    Alias,
    /// The first available provider was used.
    Fallback,
    /// No provider is available.
    Unresolved,
}

/// Outcome of [`ModelRegistry::resolve`].
#[derive(Clone)]
pub struct Resolution {
    /// Qualified model, or the input unchanged when unresolved.
    pub model: String,
    /// Provider that should serve the request.
    pub provider: Option<Arc<dyn Provider>>,
    /// Step that produced this outcome.
    pub route: Route,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Split into the `(model, provider)` pair.
    pub fn into_parts(self) -> (String, Option<Arc<dyn Provider>>) {
        (self.model, self.provider)
    }

    /// Point `request` at the resolved model and attach provider credentials.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoProviderAvailable` if resolution found no provider.
    pub fn configure(&self, mut request: CompletionRequest) -> Result<CompletionRequest> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| Error::NoProviderAvailable(self.model.clone()))?;
        request.model = self.model.clone();
        Ok(provider.configure_request(request))
    }
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolution")
            .field("model", &self.model)
            .field("provider", &self.provider_name())
            .field("route", &self.route)
            .finish()
    }
}

/// Registry of model providers.
///
/// Build one at startup and share it; it is read-only after registration.
pub struct ModelRegistry {
    providers: Vec<Arc<dyn Provider>>,
    env: Arc<dyn Environment>,
}

impl ModelRegistry {
    /// Create an empty registry reading runtime settings from `env`.
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self {
            providers: Vec::new(),
            env,
        }
    }

    /// Create a registry with the built-in providers, all configured from `env`.
    ///
    /// Registration order is OpenAI, Gemini, Azure, Anthropic.
    pub fn with_builtin_providers(env: Arc<dyn Environment>) -> Self {
        let mut registry = Self::new(Arc::clone(&env));
        registry.register_provider(Arc::new(OpenAiProvider::from_env(env.as_ref())));
        registry.register_provider(Arc::new(GeminiProvider::from_env(env.as_ref())));
        registry.register_provider(Arc::new(AzureOpenAiProvider::from_env(env.as_ref())));
        registry.register_provider(Arc::new(AnthropicProvider::from_env(env.as_ref())));
        registry
    }

    /// Built-in providers configured from the process environment.
    pub fn from_process_env() -> Self {
        Self::with_builtin_providers(Arc::new(ProcessEnv))
    }

    /// Register a provider, replacing any provider with the same name in place.
    pub fn register_provider(&mut self, provider: Arc<dyn Provider>) {
        let name = provider.name().to_string();
        match self.providers.iter_mut().find(|p| p.name() == name) {
            Some(slot) => *slot = provider,
            None => self.providers.push(provider),
        }
        debug!(provider = %name, "registered provider");
    }

    /// Look up a provider by name.
    pub fn provider(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.iter().find(|p| p.name() == name).cloned()
    }

    /// Find the provider whose prefix starts `model`, if any.
    ///
    /// Only the text before the first `/` is considered; a model without a
    /// `/` never matches.
    pub fn provider_by_prefix(&self, model: &str) -> Option<Arc<dyn Provider>> {
        let (prefix, _) = split_prefix(model)?;
        self.providers.iter().find(|p| p.prefix() == prefix).cloned()
    }

    /// Providers with all credentials present, in registration order.
    pub fn available_providers(&self) -> Vec<Arc<dyn Provider>> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .cloned()
            .collect()
    }

    /// Current `PREFERRED_PROVIDER`, lower-cased, or the default when unset
    /// or empty.
    pub fn preferred_provider_name(&self) -> String {
        non_empty(self.env.as_ref(), PREFERRED_PROVIDER)
            .map(|name| name.to_lowercase())
            .unwrap_or_else(|| DEFAULT_PREFERRED_PROVIDER.to_string())
    }

    /// The provider named by `PREFERRED_PROVIDER`, read fresh on each call.
    pub fn preferred_provider(&self) -> Option<Arc<dyn Provider>> {
        self.provider(&self.preferred_provider_name())
    }

    /// Resolve `model` to a qualified name and provider.
    ///
    /// Never fails. When no provider is available the input comes back
    /// unchanged with no provider and [`Route::Unresolved`].
    pub fn resolve(&self, model: &str) -> Resolution {
        if let Some(provider) = self.provider_by_prefix(model) {
            return Resolution {
                model: model.to_string(),
                provider: Some(provider),
                route: Route::Explicit,
            };
        }

        if let Some(alias) = Alias::parse(model) {
            match self.preferred_provider() {
                Some(preferred) if preferred.is_available() => {
                    return Resolution {
                        model: preferred.map_model(model, alias.kind()),
                        provider: Some(preferred),
                        route: Route::Alias,
                    };
                }
                // The alias is passed on verbatim below, without big/small
                // substitution for the fallback provider.
                Some(_) => warn!(
                    model,
                    preferred = %self.preferred_provider_name(),
                    "preferred provider is unavailable; alias falls back to first available provider"
                ),
                None => warn!(
                    model,
                    preferred = %self.preferred_provider_name(),
                    "preferred provider is not registered; alias falls back to first available provider"
                ),
            }
        }

        match self.providers.iter().find(|p| p.is_available()) {
            Some(provider) => Resolution {
                model: provider.map_model(model, ModelKind::Auto),
                provider: Some(Arc::clone(provider)),
                route: Route::Fallback,
            },
            None => {
                error!(model, "no available providers found");
                Resolution {
                    model: model.to_string(),
                    provider: None,
                    route: Route::Unresolved,
                }
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but unresolved input is an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoProviderAvailable` if no provider is available.
    pub fn try_resolve(&self, model: &str) -> Result<(String, Arc<dyn Provider>)> {
        match self.resolve(model).into_parts() {
            (qualified, Some(provider)) => Ok((qualified, provider)),
            (_, None) => Err(Error::NoProviderAvailable(model.to_string())),
        }
    }

    /// Supported models keyed by provider name.
    pub fn supported_models(&self) -> BTreeMap<String, Vec<String>> {
        self.providers
            .iter()
            .map(|p| (p.name().to_string(), p.supported_models()))
            .collect()
    }

    /// Names of all registered providers, in registration order.
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Names of available providers, in registration order.
    pub fn available_provider_names(&self) -> Vec<String> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Supported models for one provider.
    ///
    /// # Errors
    ///
    /// Returns `Error::ProviderNotFound` for an unregistered name.
    pub fn supported_models_for(&self, name: &str) -> Result<Vec<String>> {
        self.provider(name)
            .map(|p| p.supported_models())
            .ok_or_else(|| Error::ProviderNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("providers", &self.providers)
            .finish_non_exhaustive()
    }
}
