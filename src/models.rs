//! Request/response bodies and runtime configuration.

use crate::error::ApiError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Body of `POST /api/generate_email`. Every field is optional.
///
/// Fields also accept JSON numbers and booleans: truthy scalars are kept as
/// their text form, `0` and `false` read as absent. Arrays and objects are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub brief: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub base64_file: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub mime_type: Option<String>,
}

impl EmailRequest {
    /// Parse a raw request body. An empty body or `null` is an empty request.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let parsed: Option<Self> = serde_json::from_slice(body).map_err(|e| {
            tracing::warn!("Rejecting malformed request body: {}", e);
            ApiError::InvalidBody
        })?;
        Ok(parsed.unwrap_or_default())
    }

    pub fn brief(&self) -> Option<&str> {
        non_empty(&self.brief)
    }

    pub fn base64_file(&self) -> Option<&str> {
        non_empty(&self.base64_file)
    }

    pub fn mime_type(&self) -> Option<&str> {
        non_empty(&self.mime_type)
    }

    /// A request needs a brief or a file; empty strings count as absent.
    pub fn has_content(&self) -> bool {
        self.brief().is_some() || self.base64_file().is_some()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or scalar, got {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailResponse {
    pub message: String,
}

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Largest accepted request body. Gemini caps a whole inline request at
/// 20 MB of file data; base64 grows that by a third, plus the JSON wrapper.
pub const DEFAULT_MAX_BODY_BYTES: usize = 28 * 1024 * 1024;

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub listen_addr: String,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?;

        let request_timeout = match std::env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                crate::Error::Config(format!(
                    "GEMINI_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let max_body_bytes = match std::env::var("MAX_BODY_BYTES") {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|_| {
                crate::Error::Config(format!(
                    "MAX_BODY_BYTES must be a whole number of bytes, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            request_timeout: Duration::from_secs(request_timeout),
            max_body_bytes,
        })
    }
}
