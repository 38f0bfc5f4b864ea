//! Persisted plugin settings and the credential store built on them

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};

/// Read/write access to the API key.
/// An empty credential means the key is not configured.
pub trait CredentialStore: Send + Sync
{   fn credential(&self) -> crate::Credential;

    fn set_credential(&mut self, credential: crate::Credential)
      -> Result<(), crate::error::Error>;
}

/// Settings as they are written to the plugin data file
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings
{   pub api_key: String
}

impl fmt::Debug for Settings
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("Settings")
          .field("api_key", &crate::Credential::new(self.api_key.clone()))
          .finish()
    }
}

/// Settings backed by a JSON file
#[derive(Debug)]
pub struct SettingsStore
{   path: PathBuf
  , settings: Settings
}

impl SettingsStore
{   /// Load settings from `path`, falling back to defaults when the
    /// file does not exist yet
    pub fn open(path: impl AsRef<Path>)
      -> Result<Self, crate::error::Error>
    {   let path = path.as_ref().to_path_buf();
        debug!("Opening settings at {}", path.display());

        let settings = if path.exists()
        {   let raw = fs::read_to_string(&path).map_err(|e| {
              error!("Failed to read settings: {}", e);
              crate::error::Error::Settings(e.to_string())
            })?;
            if raw.trim().is_empty()
            {   Settings::default()
            } else
            {   serde_json::from_str(&raw).map_err(|e| {
                  error!("Failed to parse settings: {}", e);
                  crate::error::Error::Settings(e.to_string())
                })?
            }
        } else
        {   debug!("No settings file yet, using defaults");
            Settings::default()
        };

        Ok(SettingsStore { path, settings })
    }

    pub fn path(&self) -> &Path
    {   &self.path
    }

    pub fn settings(&self) -> &Settings
    {   &self.settings
    }

    /// Write current settings back to disk
    pub fn save(&self) -> Result<(), crate::error::Error>
    {   if let Some(parent) = self.path.parent()
        {   if !parent.as_os_str().is_empty()
            {   fs::create_dir_all(parent).map_err(|e| {
                  error!("Failed to create settings dir: {}", e);
                  crate::error::Error::Settings(e.to_string())
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.settings)
          .map_err(|e| crate::error::Error::Settings(e.to_string()))?;

        fs::write(&self.path, raw).map_err(|e| {
          error!("Failed to write settings: {}", e);
          crate::error::Error::Settings(e.to_string())
        })?;

        debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

impl CredentialStore for SettingsStore
{   fn credential(&self) -> crate::Credential
    {   crate::Credential::new(self.settings.api_key.clone())
    }

    fn set_credential(&mut self, credential: crate::Credential)
      -> Result<(), crate::error::Error>
    {   if !credential.is_empty() && !credential.is_usable()
        {   error!("Rejecting API key with characters not allowed in a header");
            return Err(crate::error::Error::Settings(
              "API key contains line breaks or control characters, \
               copy it again from the provider console".to_string()
            ));
        }
        self.settings.api_key = credential.expose().to_string();
        self.save()?;
        info!(
          "API key {}",
          if credential.is_empty() { "cleared" } else { "updated" }
        );
        Ok(())
    }
}
