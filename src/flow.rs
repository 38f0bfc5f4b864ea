//! Capture a question, echo it, ask the model, insert the answer

use log::{debug, error, info, warn};
use tokio_util::sync::CancellationToken;

use crate::providers::Completer;
use crate::settings::CredentialStore;
use crate::{Document, Notifier, PromptInput, PromptModal};

/// Shown when the modal is submitted with nothing in it
pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a question";

/// Leads notifications for failures reported by the endpoint
pub const REMOTE_FAILURE_PREFIX: &str = "Could not get an answer: ";

/// How one invocation of the flow ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome
{   /// Modal dismissed; nothing written, nothing sent
    Cancelled
  , /// Modal submitted blank; nothing written, nothing sent
    EmptyPrompt
  , /// Prompt and answer both written
    Answered { text: String }
  , /// Stopped on an error; the user has been notified.
    /// The prompt may already be in the document.
    Failed(crate::error::Error)
}

/// Prompt capture and insertion.
///
/// Holds only long-lived collaborators. Every `run` gets its own
/// document handle and modal, so independent invocations never share
/// mutable state; two runs on the same document go through two
/// handles and land wherever the host's carets are.
pub struct AskFlow<C, S, N>
{   completer: C
  , store: S
  , notifier: N
}

impl<C, S, N> AskFlow<C, S, N>
where
  C: Completer
, S: CredentialStore
, N: Notifier
{   pub fn new(completer: C, store: S, notifier: N) -> Self
    {   AskFlow { completer, store, notifier }
    }

    pub fn completer(&self) -> &C
    {   &self.completer
    }

    pub fn store(&self) -> &S
    {   &self.store
    }

    pub fn notifier(&self) -> &N
    {   &self.notifier
    }

    /// Replace the stored API key (settings tab)
    pub fn set_credential(
      &mut self
    , credential: crate::Credential
    ) -> Result<(), crate::error::Error>
    {   self.store.set_credential(credential)
    }

    /// Run one invocation with no external cancellation
    pub async fn run<D, M>(
      &self
    , document: &mut D
    , modal: &mut M
    ) -> AskOutcome
    where
      D: Document + ?Sized
    , M: PromptModal + ?Sized
    {   self.run_with_cancel(
          document, modal, &CancellationToken::new()
        ).await
    }

    /// Run one invocation; `cancel` aborts the pending request
    pub async fn run_with_cancel<D, M>(
      &self
    , document: &mut D
    , modal: &mut M
    , cancel: &CancellationToken
    ) -> AskOutcome
    where
      D: Document + ?Sized
    , M: PromptModal + ?Sized
    {   let credential = self.store.credential();
        if !credential.is_usable()
        {   return self.fail(crate::error::Error::MissingCredential);
        }

        debug!("Awaiting prompt input");
        let prompt = match modal.prompt_user().await
        {   PromptInput::Submitted(text) => text
          , PromptInput::Cancelled => {
              debug!("Prompt modal cancelled");
              return AskOutcome::Cancelled;
            }
        };

        if prompt.trim().is_empty()
        {   debug!("Rejecting blank prompt");
            self.notifier.notify(EMPTY_PROMPT_MESSAGE);
            return AskOutcome::EmptyPrompt;
        }

        // Echo first so the question shows up before the network returns
        if let Err(e) = document
          .insert_text_at_cursor(&format!("\n{}\n", prompt))
        {   return self.fail(e);
        }

        debug!("Awaiting completion");
        let reply = self.completer
          .complete(&credential, &prompt, cancel)
          .await;

        let text = match reply.and_then(|response| {
          response.first_text().map(str::to_string)
        })
        {   Ok(text) => text
          , Err(e) => return self.fail(e)
        };

        if let Err(e) = document
          .insert_text_at_cursor(&format!("{}\n", text))
        {   return self.fail(e);
        }

        info!("Inserted answer ({} chars)", text.chars().count());
        AskOutcome::Answered { text }
    }

    fn fail(&self, err: crate::error::Error) -> AskOutcome
    {   let message = if err.is_remote()
        {   error!("Completion request failed: {}", err);
            if let crate::error::Error::RequestFailed { body, .. } = &err
            {   debug!("Endpoint error body: {}", body);
            }
            format!("{}{}", REMOTE_FAILURE_PREFIX, err)
        } else
        {   warn!("Ask stopped: {}", err);
            err.to_string()
        };
        self.notifier.notify(&message);
        AskOutcome::Failed(err)
    }
}
