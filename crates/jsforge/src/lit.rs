//! Literal-to-JavaScript-text dispatch.
//!
//! [`Lit`] is the closed union of every literal kind the builders accept.
//! The dispatch in [`Lit::to_js`] is total and pure: an unsupported kind is
//! unrepresentable, so there is no runtime fallback policy.

use serde::{Deserialize, Serialize};

use crate::escape::quote;
use crate::func::Func;
use crate::val::Val;

/// A literal value convertible to JavaScript expression text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Lit {
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// Boolean literal
    Bool(bool),
    /// Number literal
    Num(f64),
    /// String literal (escaped and single-quoted on render)
    Str(String),
    /// An already-built expression, spliced verbatim
    Val(Val),
    /// Array literal with recursive dispatch
    List(Vec<Lit>),
    /// Object literal with quoted keys and recursive values
    Map(Vec<(String, Lit)>),
}

impl Lit {
    /// Render this literal as JavaScript expression text.
    ///
    /// Strings become single-quoted escaped literals; numbers use their
    /// default textual form with the JavaScript spellings for non-finite
    /// values; containers recurse. Calling this twice yields identical
    /// text.
    #[must_use]
    pub fn to_js(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Undefined => "undefined".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Num(n) => num_to_js(*n),
            Self::Str(s) => quote(s),
            Self::Val(v) => v.as_str().to_string(),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(Self::to_js).collect();
                format!("[{}]", parts.join(", "))
            }
            Self::Map(pairs) => {
                let parts: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", quote(k), v.to_js()))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
        }
    }
}

/// Render an f64 the way JavaScript spells it.
///
/// Rust's `inf` is not valid JavaScript, so non-finite values map to
/// `Infinity`, `-Infinity` and `NaN`.
pub(crate) fn num_to_js(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        n.to_string()
    }
}

/// Join literals into argument-list text.
pub(crate) fn join_args(args: &[Lit]) -> String {
    let parts: Vec<String> = args.iter().map(Lit::to_js).collect();
    parts.join(", ")
}

impl From<bool> for Lit {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Lit {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<i32> for Lit {
    fn from(v: i32) -> Self {
        Self::Num(f64::from(v))
    }
}

impl From<u32> for Lit {
    fn from(v: u32) -> Self {
        Self::Num(f64::from(v))
    }
}

impl From<&str> for Lit {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Lit {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Val> for Lit {
    fn from(v: Val) -> Self {
        Self::Val(v)
    }
}

impl From<&Val> for Lit {
    fn from(v: &Val) -> Self {
        Self::Val(v.clone())
    }
}

impl From<&Func> for Lit {
    fn from(f: &Func) -> Self {
        Self::Val(f.to_val())
    }
}

impl From<Vec<Lit>> for Lit {
    fn from(items: Vec<Lit>) -> Self {
        Self::List(items)
    }
}
