//! User key sanitization

use serde::Serialize;
use std::fmt;

/// Maximum length of a sanitized key.
const MAX_KEY_LEN: usize = 64;

/// Filesystem-safe identifier derived from a raw user-supplied string.
///
/// Only ASCII letters, digits, underscore, and hyphen survive sanitization,
/// so a key is always usable directly as a filename stem: no path separators,
/// no traversal sequences, no unbounded length. Distinct raw identifiers may
/// collapse to the same key; that collision risk is accepted and documented
/// rather than prevented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserKey(String);

impl UserKey {
    /// Sanitize a raw identifier into a key.
    ///
    /// Total function: strips every character outside `[A-Za-z0-9_-]` and
    /// truncates the result to 64 characters. An all-invalid input yields an
    /// empty key; the HTTP boundary rejects those before they reach the
    /// store, but the store itself accepts any key this function produces.
    pub fn sanitize(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .take(MAX_KEY_LEN)
            .collect();
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
