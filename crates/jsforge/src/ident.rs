//! Validated JavaScript identifiers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated JavaScript identifier.
///
/// Checked at construction: non-empty, no leading digit, only ASCII
/// alphanumerics, `_` and `$`, and not a reserved word. Every builder
/// operation that accepts a name goes through this type, so a bad name
/// fails at the call site instead of producing broken output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier(String);

impl Identifier {
    /// JavaScript reserved words that cannot be used as identifiers.
    pub const RESERVED_WORDS: &'static [&'static str] = &[
        "break",
        "case",
        "catch",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "finally",
        "for",
        "function",
        "if",
        "in",
        "instanceof",
        "new",
        "return",
        "switch",
        "this",
        "throw",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "class",
        "const",
        "enum",
        "export",
        "extends",
        "import",
        "super",
        "implements",
        "interface",
        "let",
        "package",
        "private",
        "protected",
        "public",
        "static",
        "yield",
        "await",
        "null",
        "true",
        "false",
    ];

    /// Create a new identifier, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if the name is empty, starts
    /// with a digit, contains a character outside `[a-zA-Z0-9_$]`, or is a
    /// reserved word.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::InvalidIdentifier {
                name,
                reason: "identifier cannot be empty".to_string(),
            });
        }

        if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidIdentifier {
                name,
                reason: "identifier cannot start with a digit".to_string(),
            });
        }

        if let Some(c) = name
            .chars()
            .find(|&c| !c.is_ascii_alphanumeric() && c != '_' && c != '$')
        {
            return Err(Error::InvalidIdentifier {
                name,
                reason: format!("invalid character '{c}'"),
            });
        }

        if Self::RESERVED_WORDS.contains(&name.as_str()) {
            return Err(Error::InvalidIdentifier {
                name,
                reason: "reserved word".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get the identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
