//! Request and response bodies of the messages endpoint

use serde::{Deserialize, Serialize};

/// One turn of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

/// Outbound request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesRequest
{   pub model: String
  , pub max_tokens: u32
  , pub messages: Vec<ChatMessage>
}

impl MessagesRequest
{   /// Single user message carrying the prompt verbatim
    pub fn user(
      model: impl Into<String>
    , max_tokens: u32
    , prompt: impl Into<String>
    ) -> Self
    {   MessagesRequest
        {   model: model.into()
          , max_tokens
          , messages: vec![
              ChatMessage
              {   role: "user".to_string()
                , content: prompt.into()
              }
            ]
        }
    }
}

/// Parsed 2xx reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesResponse
{   #[serde(default)]
    pub id: Option<String>
  , #[serde(default)]
    pub model: Option<String>
  , pub content: Vec<ContentBlock>
  , #[serde(default)]
    pub stop_reason: Option<String>
  , #[serde(default)]
    pub usage: Option<Usage>
}

/// One typed payload of the reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock
{   #[serde(rename = "type")]
    pub kind: String
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage
{   #[serde(default)]
    pub input_tokens: u32
  , #[serde(default)]
    pub output_tokens: u32
}

impl MessagesResponse
{   /// Text payload of the first content block.
    ///
    /// An empty block list or a first block without text is a contract
    /// violation, never an empty answer.
    pub fn first_text(&self) -> Result<&str, crate::error::Error>
    {   let block = self.content.first().ok_or_else(|| {
          crate::error::Error::MalformedResponse(
            "response contained no content blocks".to_string()
          )
        })?;

        block.text.as_deref().ok_or_else(|| {
          crate::error::Error::MalformedResponse(format!(
            "first content block of type '{}' has no text",
            block.kind
          ))
        })
    }
}
