//! Configuration for the completion client

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Default API host
pub const DEFAULT_API_BASE: &str
  = "https://api.anthropic.com";

/// Path of the messages endpoint under the API host
pub const MESSAGES_PATH: &str = "/v1/messages";

/// Model every request is sent to unless overridden
pub const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

/// Value of the `anthropic-version` header
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Output token budget per request
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Milliseconds before an in-flight request is abandoned
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Completion client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig
{   /// API host, without the endpoint path
    pub api_base: String
  , /// Model identifier
    pub model: String
  , /// Max tokens to generate
    pub max_tokens: u32
  , /// API version header value
    pub api_version: String
  , /// Request timeout in milliseconds, 0 for no limit
    pub timeout_ms: u64
}

impl ClientConfig
{   /// Full URL of the messages endpoint
    pub fn messages_url(&self) -> String
    {   format!(
          "{}{}",
          self.api_base.trim_end_matches('/'),
          MESSAGES_PATH
        )
    }

    /// Request timeout, `None` when unlimited
    pub fn timeout(&self) -> Option<Duration>
    {   match self.timeout_ms
        {   0 => None
          , ms => Some(Duration::from_millis(ms))
        }
    }

    /// Same configuration pointed at another host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self
    {   self.api_base = api_base.into();
        self
    }

    /// Same configuration with another timeout, rounded up to
    /// whole milliseconds
    pub fn with_timeout(mut self, timeout: Duration) -> Self
    {   let ms = timeout.as_millis()
          + u128::from(timeout.subsec_nanos() % 1_000_000 != 0);
        self.timeout_ms = u64::try_from(ms).unwrap_or(u64::MAX).max(1);
        self
    }

    /// Same configuration without a timeout
    pub fn without_timeout(mut self) -> Self
    {   self.timeout_ms = 0;
        self
    }
}

impl Default for ClientConfig
{   fn default() -> Self
    {   ClientConfig
        {   api_base: DEFAULT_API_BASE.to_string()
          , model: DEFAULT_MODEL.to_string()
          , max_tokens: DEFAULT_MAX_TOKENS
          , api_version: DEFAULT_API_VERSION.to_string()
          , timeout_ms: DEFAULT_TIMEOUT_MS
        }
    }
}
