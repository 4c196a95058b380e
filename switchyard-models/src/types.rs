//! Core types and model-string helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env::{BIG_MODEL, Environment, SMALL_MODEL, non_empty};
use crate::{Error, Result};

/// Separator between a provider prefix and a model name.
pub const PREFIX_SEPARATOR: char = '/';

/// Which of a provider's default models a name should map to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// The provider's large default model.
    Big,
    /// The provider's small default model.
    Small,
    /// Keep the requested name as-is.
    #[default]
    Auto,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Big => "big",
            ModelKind::Small => "small",
            ModelKind::Auto => "auto",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "big" => Ok(ModelKind::Big),
            "small" => Ok(ModelKind::Small),
            "auto" => Ok(ModelKind::Auto),
            _ => Err(Error::UnknownModelKind(s.to_string())),
        }
    }
}

/// Provider-independent model aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alias {
    Sonnet,
    Haiku,
}

impl Alias {
    /// Parse an alias, ignoring case. Anything else is not an alias.
    pub fn parse(model: &str) -> Option<Self> {
        if model.eq_ignore_ascii_case("sonnet") {
            Some(Alias::Sonnet)
        } else if model.eq_ignore_ascii_case("haiku") {
            Some(Alias::Haiku)
        } else {
            None
        }
    }

    /// The default-model slot this alias maps to.
    pub fn kind(&self) -> ModelKind {
        match self {
            Alias::Sonnet => ModelKind::Big,
            Alias::Haiku => ModelKind::Small,
        }
    }
}

/// A provider's default big and small model names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultModels {
    pub big: String,
    pub small: String,
}

impl DefaultModels {
    pub fn new(big: impl Into<String>, small: impl Into<String>) -> Self {
        Self {
            big: big.into(),
            small: small.into(),
        }
    }

    /// Build defaults from `BIG_MODEL` / `SMALL_MODEL`, falling back to the
    /// given names for whichever is unset or empty.
    pub fn from_env(env: &dyn Environment, big: &str, small: &str) -> Self {
        Self {
            big: non_empty(env, BIG_MODEL).unwrap_or_else(|| big.to_string()),
            small: non_empty(env, SMALL_MODEL).unwrap_or_else(|| small.to_string()),
        }
    }

    /// Default model for `kind`, or `None` for [`ModelKind::Auto`].
    pub fn get(&self, kind: ModelKind) -> Option<&str> {
        match kind {
            ModelKind::Big => Some(self.big.as_str()),
            ModelKind::Small => Some(self.small.as_str()),
            ModelKind::Auto => None,
        }
    }
}

/// Split `model` at the first separator into `(prefix, rest)`.
///
/// # Examples
///
/// ```
/// use switchyard_models::split_prefix;
///
/// assert_eq!(split_prefix("azure/gpt-4o"), Some(("azure", "gpt-4o")));
/// assert_eq!(split_prefix("gpt-4o"), None);
/// ```
pub fn split_prefix(model: &str) -> Option<(&str, &str)> {
    model.split_once(PREFIX_SEPARATOR)
}

/// Drop every prefix segment, keeping only the text after the last separator.
///
/// ```
/// use switchyard_models::strip_prefix;
///
/// assert_eq!(strip_prefix("openai/gpt-4.1"), "gpt-4.1");
/// assert_eq!(strip_prefix("a/b/c"), "c");
/// assert_eq!(strip_prefix("gpt-4.1"), "gpt-4.1");
/// ```
pub fn strip_prefix(model: &str) -> &str {
    model
        .rsplit_once(PREFIX_SEPARATOR)
        .map_or(model, |(_, name)| name)
}

/// Join a provider prefix and model name.
pub fn qualify(prefix: &str, name: &str) -> String {
    format!("{prefix}{PREFIX_SEPARATOR}{name}")
}
