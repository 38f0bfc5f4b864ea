//! Completion endpoint clients

pub mod anthropic;

use std::sync::Arc;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

// Re-export for convenience
pub use anthropic::AnthropicClient;

/// Something that turns a prompt into a parsed completion.
///
/// Implementations hold no per-call state, so one instance can serve
/// any number of concurrent requests.
#[async_trait]
pub trait Completer: Send + Sync
{   /// Send `prompt` with `credential` and wait for the full reply,
    /// giving up early if `cancel` fires
    async fn complete(
      &self
    , credential: &crate::Credential
    , prompt: &str
    , cancel: &CancellationToken
    ) -> Result<crate::request::MessagesResponse, crate::error::Error>;
}

#[async_trait]
impl<T: Completer + ?Sized> Completer for Arc<T>
{   async fn complete(
      &self
    , credential: &crate::Credential
    , prompt: &str
    , cancel: &CancellationToken
    ) -> Result<crate::request::MessagesResponse, crate::error::Error>
    {   (**self).complete(credential, prompt, cancel).await
    }
}
