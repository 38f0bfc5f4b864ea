use async_trait::async_trait;
use log::{debug, trace, error, warn};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::request::{MessagesRequest, MessagesResponse};

const API_KEY_HEADER: &str = "x-api-key";
const API_VERSION_HEADER: &str = "anthropic-version";

/// Client for the messages endpoint.
///
/// One POST per call, no retries. The credential is passed in on every
/// call and only ever leaves the process in the `x-api-key` header.
#[derive(Debug, Clone)]
pub struct AnthropicClient
{   config: ClientConfig
  , http_client: reqwest::Client
}

impl AnthropicClient
{   pub fn new(config: ClientConfig) -> Self
    {   debug!(
          "Creating AnthropicClient for {} (model {})",
          config.messages_url(), config.model
        );
        AnthropicClient
        {   config
          , http_client: reqwest::Client::new()
        }
    }

    pub fn config(&self) -> &ClientConfig
    {   &self.config
    }

    /// POST the serialized body and classify the reply
    async fn exchange(
      &self
    , credential: &crate::Credential
    , body: Vec<u8>
    ) -> Result<MessagesResponse, crate::error::Error>
    {   let response = self.http_client
          .post(self.config.messages_url())
          .header(CONTENT_TYPE, "application/json")
          .header(API_VERSION_HEADER, self.config.api_version.as_str())
          .header(CONTENT_LENGTH, body.len())
          .header(API_KEY_HEADER, credential.expose())
          .body(body)
          .send()
          .await
          .map_err(|e| {
            if e.is_builder()
            {   error!("Could not build request: {}", e);
                crate::error::Error::InvalidConfiguration(
                  e.to_string()
                )
            } else
            {   error!("HTTP error: {}", e);
                crate::error::Error::TransportError(e.to_string())
            }
          })?;

        let status = response.status();
        trace!("Messages response status: {}", status);

        // Buffer the whole body before looking at it
        let body = response.bytes().await.map_err(|e| {
          error!("Failed reading response body: {}", e);
          crate::error::Error::TransportError(e.to_string())
        })?;

        if !status.is_success()
        {   let body = String::from_utf8_lossy(&body).into_owned();
            error!("Messages endpoint returned {}", status);
            debug!("Error body: {}", body);
            return Err(crate::error::Error::RequestFailed
            {   status: status.as_u16()
              , status_text: status
                  .canonical_reason()
                  .unwrap_or_default()
                  .to_string()
              , body
            });
        }

        serde_json::from_slice::<MessagesResponse>(&body).map_err(|e| {
          error!("Parse error: {}", e);
          crate::error::Error::MalformedResponse(e.to_string())
        })
    }
}

#[async_trait]
impl super::Completer for AnthropicClient
{   async fn complete(
      &self
    , credential: &crate::Credential
    , prompt: &str
    , cancel: &CancellationToken
    ) -> Result<MessagesResponse, crate::error::Error>
    {   if !credential.is_usable()
        {   warn!("Refusing to send request without a valid API key");
            return Err(crate::error::Error::MissingCredential);
        }

        let request = MessagesRequest::user(
          self.config.model.as_str(),
          self.config.max_tokens,
          prompt
        );
        trace!(
          "Messages request: model={} max_tokens={} prompt_len={}",
          request.model, request.max_tokens, prompt.len()
        );

        let body = serde_json::to_vec(&request).map_err(|e| {
          crate::error::Error::Other(e.to_string())
        })?;

        let exchange = async {
          match self.config.timeout()
          {   Some(limit) => {
                tokio::time::timeout(limit, self.exchange(credential, body))
                  .await
                  .unwrap_or_else(|_| {
                    error!("Request timed out after {:?}", limit);
                    Err(crate::error::Error::Timeout)
                  })
              }
            , None => self.exchange(credential, body).await
          }
        };

        tokio::select!
        { biased;
          _ = cancel.cancelled() => {
            debug!("Request cancelled by caller");
            Err(crate::error::Error::Cancelled)
          }
        , reply = exchange => reply
        }
    }
}
