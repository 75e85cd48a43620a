//! Credentials infrastructure
//!
//! Secret files injected by the deployment environment (for example
//! `/run/secrets/db_root_password`):
//! - One synchronous read per secret
//! - Surrounding whitespace stripped
//! - Invalid UTF-8 replaced with U+FFFD rather than rejected
//! - Values wrapped in [`Secret`] so they never reach logs

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::errors::{ProfileError, ProfileResult};
use crate::domain::models::Secret;

/// Bytes stripped from both ends of a secret file's content.
const TRIMMED: &[u8] = b" \t\n\r\0\x0B";

/// Read a secret file and strip surrounding whitespace.
///
/// The file is read as bytes, so a password in a legacy encoding still
/// loads; undecodable bytes become U+FFFD.
pub fn read_secret(path: impl AsRef<Path>) -> ProfileResult<Secret> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| ProfileError::UnreadableSecret {
        path: path.to_path_buf(),
        source,
    })?;

    let lossy = std::str::from_utf8(&raw).is_err();
    let secret = Secret::new(String::from_utf8_lossy(trim(&raw)));
    if lossy {
        warn!(path = %path.display(), "secret file is not valid UTF-8");
    }
    debug!(path = %path.display(), empty = secret.is_empty(), "secret file read");
    Ok(secret)
}

fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !TRIMMED.contains(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !TRIMMED.contains(b))
        .map_or(start, |last| last + 1);
    &bytes[start..end]
}
