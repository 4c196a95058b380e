//! API key handling.
//!
//! Keys are read from the [`Environment`] once, when a provider is built, and
//! wrapped so they never end up in logs by accident.

use secrecy::{ExposeSecret, SecretString};

use crate::env::{Environment, non_empty};

/// A secure API key that prevents accidental logging.
///
/// The key is wrapped in `SecretString` which:
/// - Implements `Debug` as `"[REDACTED]"`
/// - Zeroizes memory on drop
/// - Requires explicit `.expose_secret()` to access the value
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Create a new API key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Read a key from `env`. Unset and empty values both yield `None`.
    pub fn from_env(env: &dyn Environment, var: &str) -> Option<Self> {
        non_empty(env, var).map(Self::new)
    }

    /// True for a key with no characters; such a key counts as missing.
    pub fn is_empty(&self) -> bool {
        self.expose_secret().is_empty()
    }

    /// Expose the secret key value.
    ///
    /// Use sparingly - only when actually sending to an API.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl PartialEq for ApiKey {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}

impl Eq for ApiKey {}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapEnv, OPENAI_API_KEY};

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret-key-12345");
        let debug = format!("{:?}", key);
        assert_eq!(debug, "ApiKey([REDACTED])");
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn api_key_expose_secret_returns_value() {
        let key = ApiKey::new("sk-secret-key-12345");
        assert_eq!(key.expose_secret(), "sk-secret-key-12345");
    }

    #[test]
    fn api_key_from_string() {
        let key: ApiKey = "my-key".into();
        assert_eq!(key.expose_secret(), "my-key");

        let key: ApiKey = String::from("my-key").into();
        assert_eq!(key.expose_secret(), "my-key");
    }

    #[test]
    fn api_key_from_env_requires_non_empty_value() {
        let env = MapEnv::new().with(OPENAI_API_KEY, "sk-test");
        let key = ApiKey::from_env(&env, OPENAI_API_KEY).unwrap();
        assert_eq!(key.expose_secret(), "sk-test");

        let env = MapEnv::new().with(OPENAI_API_KEY, "");
        assert!(ApiKey::from_env(&env, OPENAI_API_KEY).is_none());

        assert!(ApiKey::from_env(&MapEnv::new(), OPENAI_API_KEY).is_none());
    }

    #[test]
    fn api_key_is_empty() {
        assert!(ApiKey::new("").is_empty());
        assert!(!ApiKey::new("sk").is_empty());
    }
}
