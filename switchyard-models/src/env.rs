//! Environment sources for provider configuration.
//!
//! Every configuration read in this crate goes through [`Environment`], so a
//! registry can be built against the live process environment, an in-memory
//! map, or a layered combination of both.
//!
//! # Example
//!
//! ```
//! use switchyard_models::env::{Environment, LayeredEnv, MapEnv};
//!
//! let file = MapEnv::new().with("PREFERRED_PROVIDER", "azure");
//! let overrides = MapEnv::new().with("PREFERRED_PROVIDER", "gemini");
//! let env = LayeredEnv::new().layer(overrides).layer(file);
//!
//! assert_eq!(env.var("PREFERRED_PROVIDER").as_deref(), Some("gemini"));
//! ```

use std::collections::HashMap;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const AZURE_OPENAI_API_KEY: &str = "AZURE_OPENAI_API_KEY";
pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const PREFERRED_PROVIDER: &str = "PREFERRED_PROVIDER";
pub const BIG_MODEL: &str = "BIG_MODEL";
pub const SMALL_MODEL: &str = "SMALL_MODEL";

/// A source of configuration variables.
pub trait Environment: Send + Sync {
    /// Look up a variable. Returns `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Read a variable, treating an empty value the same as an unset one.
pub fn non_empty(env: &dyn Environment, key: &str) -> Option<String> {
    env.var(key).filter(|v| !v.is_empty())
}

/// The live process environment.
///
/// Reads happen on every call, so changes made after startup are observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered stack of sources; the first layer with a non-empty value wins.
///
/// An empty value in an upper layer does not hide a value further down, so an
/// exported but blank variable behaves the same as an unset one.
#[derive(Default)]
pub struct LayeredEnv {
    layers: Vec<Box<dyn Environment>>,
}

impl LayeredEnv {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower precedence than every existing layer.
    pub fn layer(mut self, env: impl Environment + 'static) -> Self {
        self.layers.push(Box::new(env));
        self
    }
}

impl Environment for LayeredEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.layers
            .iter()
            .find_map(|env| env.var(key).filter(|v| !v.is_empty()))
    }
}

impl std::fmt::Debug for LayeredEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredEnv")
            .field("layers", &self.layers.len())
            .finish()
    }
}
