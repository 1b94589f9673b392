//! Accumulated statement fragments and body serialization.

use serde::{Deserialize, Serialize};

use crate::val::Val;

/// One accumulated unit of a sequencer's body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fragment {
    /// Raw statement code, spliced verbatim
    Raw(String),
    /// An expression used in statement position
    Expr(Val),
    /// A pre-serialized nested block (if/while/for)
    Block(String),
}

impl Fragment {
    /// The fragment's source text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Raw(s) | Self::Block(s) => s,
            Self::Expr(v) => v.as_str(),
        }
    }
}

/// Serialize fragments in insertion order into one body string.
///
/// The single statement-termination policy: a fragment is followed by `;`
/// unless its text already ends in `}`. Block-terminated constructs need no
/// semicolon, and doubling one after them is how generators produce
/// syntactically suspect output. Applied uniformly by every sequencer.
#[must_use]
pub fn render_body(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        let text = fragment.text();
        out.push_str(text);
        if !text.ends_with('}') {
            out.push(';');
        }
    }
    out
}
