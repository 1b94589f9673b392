//! Error types for `jsforge`.

use thiserror::Error;

/// Result type alias for jsforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or emitting JavaScript.
///
/// Builder misuse (bad identifiers, forbidden output patterns) is surfaced
/// at the call that caused it, never deferred to render time.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid identifier name (reserved word, invalid characters, etc.)
    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Rendered output contains a construct the generator must never emit
    #[error("forbidden pattern '{pattern}' in generated output")]
    ForbiddenPattern {
        /// The matched pattern
        pattern: &'static str,
    },

    /// Manifest for a generated script could not be read
    #[error("manifest missing for '{path}': {reason}")]
    ManifestMissing {
        /// Path to the generated script
        path: String,
        /// Why the manifest could not be read
        reason: String,
    },

    /// Generated script no longer matches its manifest hash
    #[error("generated script '{path}' was modified: expected hash {expected}, got {actual}")]
    ScriptModified {
        /// Path to the generated script
        path: String,
        /// Hash recorded in the manifest
        expected: String,
        /// Hash of the current file contents
        actual: String,
    },

    /// IO error during manifest operations
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while reading or writing a manifest
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_identifier() {
        let err = Error::InvalidIdentifier {
            name: "class".to_string(),
            reason: "reserved word".to_string(),
        };
        assert_eq!(err.to_string(), "invalid identifier 'class': reserved word");
    }

    #[test]
    fn display_script_modified() {
        let err = Error::ScriptModified {
            path: "init.js".to_string(),
            expected: "abc123".to_string(),
            actual: "def456".to_string(),
        };
        assert!(err.to_string().contains("init.js"));
        assert!(err.to_string().contains("abc123"));
    }

    #[test]
    fn display_forbidden_pattern() {
        let err = Error::ForbiddenPattern { pattern: "eval(" };
        assert!(err.to_string().contains("eval("));
    }
}
