//! The outgoing request object that providers configure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::ApiKey;
use crate::{Error, Result};

/// Placeholder written in place of a key by [`CompletionRequest::to_redacted_value`].
pub const REDACTED: &str = "[REDACTED]";

/// A request about to be handed to the LLM transport.
///
/// Only `model` is interpreted here. Provider fields are filled in by
/// [`Provider::configure_request`](super::Provider::configure_request); the
/// rest of the caller's payload rides along in `body` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model to call.
    pub model: String,
    /// Credential for the upstream API.
    #[serde(default, with = "api_key_serde", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<ApiKey>,
    /// Upstream base URL (Azure only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Upstream API version (Azure only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Everything else in the payload.
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl CompletionRequest {
    /// Create a request with no payload beyond the model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: None,
            api_base: None,
            api_version: None,
            body: Map::new(),
        }
    }

    /// Build a request from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRequest` if the payload is not an object or has
    /// no string `model` field.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(ref object) = value else {
            return Err(Error::InvalidRequest(
                "request payload must be a JSON object".to_string(),
            ));
        };
        if !object.get("model").is_some_and(Value::is_string) {
            return Err(Error::InvalidRequest(
                "request payload needs a string `model` field".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Set an arbitrary payload field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    /// Serialize to JSON, exposing the API key.
    pub fn into_value(self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to JSON with the API key replaced by [`REDACTED`].
    pub fn to_redacted_value(&self) -> Result<Value> {
        let mut value = serde_json::to_value(self)?;
        if let Some(key) = value.get_mut("api_key") {
            *key = Value::String(REDACTED.to_string());
        }
        Ok(value)
    }
}

mod api_key_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::auth::ApiKey;

    pub fn serialize<S: Serializer>(
        key: &Option<ApiKey>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match key {
            Some(key) => serializer.serialize_some(key.expose_secret()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<ApiKey>, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .filter(|key| !key.is_empty())
            .map(ApiKey::new))
    }
}
