//! Output hygiene scan.
//!
//! A substring scan over rendered output, not a parser. The builders never
//! emit these constructs themselves; the scan exists to catch them
//! arriving through the raw escape hatches.

use crate::error::{Error, Result};

/// Constructs the generator must never emit.
pub const FORBIDDEN_PATTERNS: &[&str] = &[
    "eval(",
    "new Function(",
    "document.write(",
    "innerHTML =",
    "with(",
];

/// Scan rendered output for forbidden constructs.
pub fn check(js: &str) -> Result<()> {
    for &pattern in FORBIDDEN_PATTERNS {
        if js.contains(pattern) {
            return Err(Error::ForbiddenPattern { pattern });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_output_passes() {
        assert!(check("function f(){return 1;}").is_ok());
        assert!(check("").is_ok());
    }

    #[test]
    fn eval_rejected() {
        let err = check("eval('2 + 2')").unwrap_err();
        assert!(err.to_string().contains("eval("));
    }

    #[test]
    fn dynamic_function_rejected() {
        assert!(check("let f = new Function('return 1');").is_err());
    }

    #[test]
    fn document_write_rejected() {
        assert!(check("document.write('<b>hi</b>');").is_err());
    }
}
