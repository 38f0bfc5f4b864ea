use std::fmt;

/// Error type for noteask operations
/// Implements Clone so outcomes can carry it around freely
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No API key configured
    MissingCredential
  , /// Network failure before any status was received
    TransportError(String)
  , /// Endpoint answered with a non-2xx status
    RequestFailed
    {   status: u16
      , status_text: String
      , /// Raw body, kept for diagnostics only
        body: String
    }
  , /// 2xx answer whose body is not what we expect
    MalformedResponse(String)
  , /// Request exceeded the configured timeout
    Timeout
  , /// Caller cancelled the request
    Cancelled
  , /// Host failed to write into the document
    Document(String)
  , /// Settings could not be loaded or saved
    Settings(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Generic error
    Other(String)
}

impl Error
{   /// Whether this came back from the remote endpoint rather than
    /// from local state
    pub fn is_remote(&self) -> bool
    {   matches!(
          self,
          Error::TransportError(_)
            | Error::RequestFailed { .. }
            | Error::MalformedResponse(_)
            | Error::Timeout
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingCredential => {
              write!(f,
                "API key is missing or invalid, \
                 paste a valid key in the settings"
              )
            }
          , Error::TransportError(msg) => {
              write!(f, "Network error: {}", msg)
            }
          , Error::RequestFailed { status, status_text, .. } => {
              if status_text.is_empty()
              {   write!(f, "Request failed with status {}", status)
              } else
              {   write!(f,
                    "Request failed with status {} {}",
                    status, status_text
                  )
              }
            }
          , Error::MalformedResponse(msg) => {
              write!(f, "Unexpected response format: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::Cancelled => {
              write!(f, "Request cancelled")
            }
          , Error::Document(msg) => {
              write!(f, "Could not write to document: {}", msg)
            }
          , Error::Settings(msg) => {
              write!(f, "Settings error: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn request_failed_shows_status_but_not_body()
    {   let err = Error::RequestFailed
        {   status: 401
          , status_text: "Unauthorized".to_string()
          , body: "{\"error\":\"invalid x-api-key\"}".to_string()
        };
        let shown = err.to_string();
        assert_eq!(shown, "Request failed with status 401 Unauthorized");
        assert!(!shown.contains("x-api-key"));
    }

    #[test]
    fn request_failed_without_reason()
    {   let err = Error::RequestFailed
        {   status: 599
          , status_text: String::new()
          , body: String::new()
        };
        assert_eq!(err.to_string(), "Request failed with status 599");
    }

    #[test]
    fn remote_classification()
    {   assert!(Error::Timeout.is_remote());
        assert!(Error::TransportError("reset".into()).is_remote());
        assert!(!Error::MissingCredential.is_remote());
        assert!(!Error::Cancelled.is_remote());
    }
}
