//! Domain errors for profile loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a server profile.
///
/// A missing secret is fatal at startup; there is no retry or fallback.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Unreadable secret file {}: {source}", path.display())]
    UnreadableSecret {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ProfileResult<T> = Result<T, ProfileError>;

impl ProfileError {
    /// Path of the secret file that could not be read.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::UnreadableSecret { path, .. } => path,
        }
    }
}
