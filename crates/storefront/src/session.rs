//! Durable record of who is signed in.
//!
//! A small JSON file, `{"email": "..."}`, read once at startup to restore
//! the session, written on sign-in and removed on sign-out.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use hollixton_core::Email;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reading or writing the marker file.
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("session marker I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session marker is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct MarkerFile {
    email: Email,
}

/// The session marker file.
#[derive(Debug, Clone)]
pub struct SessionMarker {
    path: PathBuf,
}

impl SessionMarker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The remembered email, or `None` when no marker exists.
    ///
    /// # Errors
    ///
    /// Returns `MarkerError` if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<Option<Email>, MarkerError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let marker: MarkerFile = serde_json::from_slice(&bytes)?;
                Ok(Some(marker.email))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remember `email`.
    ///
    /// # Errors
    ///
    /// Returns `MarkerError` if the file cannot be written.
    pub async fn save(&self, email: &Email) -> Result<(), MarkerError> {
        let body = serde_json::to_vec(&MarkerFile {
            email: email.clone(),
        })?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }

    /// Forget the signed-in user. Missing files are fine.
    ///
    /// # Errors
    ///
    /// Returns `MarkerError` if an existing file cannot be removed.
    pub async fn clear(&self) -> Result<(), MarkerError> {
        match tokio::fs::remove_file(&self.path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
