use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::domain::models::REDACTED;

static CREDENTIAL_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(["']?\b(?:password|passwd|controlpass|secret|token)["']?\s*[:=]\s*)["']?[^"'\s,}]+["']?"#,
    )
    .expect("credential field pattern is valid")
});

static BEARER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+").expect("bearer pattern is valid")
});

/// Scrubs credentials from messages before they reach a user or a log.
///
/// Redacts bearer tokens and the values of `key=value` /
/// `"key": "value"` shapes for credential-looking keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    pub fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = BEARER.replace_all(message, format!("Bearer {REDACTED}"));
        CREDENTIAL_FIELD
            .replace_all(&scrubbed, |caps: &Captures| format!("{}{REDACTED}", &caps[1]))
            .into_owned()
    }
}
