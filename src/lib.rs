pub mod error;
pub mod config;
pub mod settings;
pub mod request;
pub mod providers;
pub mod flow;
pub mod logging;

use std::fmt;
use secrecy::{ExposeSecret, SecretString};

pub use error::Error;
pub use config::ClientConfig;
pub use settings::{CredentialStore, Settings, SettingsStore};
pub use request::{ContentBlock, MessagesRequest, MessagesResponse};
pub use providers::{AnthropicClient, Completer};
pub use flow::{AskFlow, AskOutcome};

/*

noteask asks a hosted LLM a question typed inside a note and writes
the answer back at the caret.

noteask/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Shared types and host-facing traits
│   ├── error.rs        # Error kinds surfaced to the host
│   ├── config.rs       # Client configuration
│   ├── settings.rs     # Persisted API key
│   ├── request.rs      # Messages endpoint bodies
│   ├── providers/      # Completion client
│   │   ├── mod.rs
│   │   └── anthropic.rs
│   ├── flow.rs         # Capture -> echo -> complete -> insert
│   └── logging.rs
└── tests/

*/

/// NOTEASK HOST INTERFACE:

// ===== Credential =====

/// API key handed to the completion client.
/// An empty key means "not configured". Surrounding whitespace is
/// dropped on construction.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential
{   pub fn new(key: impl Into<String>) -> Self
    {   let key: String = key.into();
        Credential(SecretString::from(key.trim().to_string()))
    }

    /// Unset credential
    pub fn empty() -> Self
    {   Credential::new(String::new())
    }

    pub fn is_empty(&self) -> bool
    {   self.0.expose_secret().is_empty()
    }

    /// Set, and made only of bytes an HTTP header can carry
    pub fn is_usable(&self) -> bool
    {   !self.is_empty()
          && reqwest::header::HeaderValue::from_str(self.expose()).is_ok()
    }

    /// Raw key, for the auth header only
    pub fn expose(&self) -> &str
    {   self.0.expose_secret()
    }
}

impl fmt::Debug for Credential
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   if self.is_empty()
        {   write!(f, "Credential(<unset>)")
        } else
        {   write!(f, "Credential([REDACTED])")
        }
    }
}

impl From<String> for Credential
{   fn from(key: String) -> Self
    {   Credential::new(key)
    }
}

impl From<&str> for Credential
{   fn from(key: &str) -> Self
    {   Credential::new(key)
    }
}

// ===== PromptModal =====

/// How the input modal was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput
{   Submitted(String)
  , Cancelled
}

/// Modal input surface owned by the host
#[async_trait::async_trait]
pub trait PromptModal: Send
{   /// Show the modal and wait until it is submitted or dismissed
    async fn prompt_user(&mut self) -> PromptInput;
}

// ===== Document =====

/// Insertion point of the active document
pub trait Document: Send
{   /// Write `text` at the caret and move the caret past it
    fn insert_text_at_cursor(&mut self, text: &str)
      -> Result<(), crate::error::Error>;
}

// ===== Notifier =====

/// Transient user-visible messages
pub trait Notifier: Send + Sync
{   fn notify(&self, message: &str);
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn credential_debug_never_shows_key()
    {   let credential = Credential::new("sk-ant-secret");
        let shown = format!("{:?}", credential);
        assert!(!shown.contains("sk-ant-secret"));
        assert_eq!(credential.expose(), "sk-ant-secret");
    }

    #[test]
    fn blank_credential_is_unset()
    {   assert!(Credential::empty().is_empty());
        assert!(Credential::new("   ").is_empty());
        assert!(!Credential::new("k").is_empty());
    }

    #[test]
    fn pasted_key_is_trimmed()
    {   let credential = Credential::new("  sk-ant-abc\n");
        assert_eq!(credential.expose(), "sk-ant-abc");
        assert!(credential.is_usable());
    }

    #[test]
    fn key_with_control_chars_is_unusable()
    {   let credential = Credential::new("sk\nbad");
        assert!(!credential.is_empty());
        assert!(!credential.is_usable());
    }
}
