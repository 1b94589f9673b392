//! Property-based tests for jsforge.
//!
//! proptest drives the escaping, identifier and rendering invariants;
//! a quickcheck section cross-checks the escaping round-trip with an
//! independent generator.

use jsforge::prelude::*;
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

/// Reverse the escaper's transform. Test-side only: the crate itself never
/// re-reads text it produced.
fn unescape(escaped: &str) -> String {
    let mut out = String::new();
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = u32::from_str_radix(&hex, 16).expect("hex escape");
                out.push(char::from_u32(code).expect("scalar value"));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

// === Escaping ===

proptest! {
    /// Escaping then unescaping reconstructs the input exactly.
    #[test]
    fn prop_escape_round_trip(s in ".*") {
        prop_assert_eq!(unescape(&escape(&s)), s);
    }

    /// No raw line break or unescaped quote survives in a literal body.
    #[test]
    fn prop_escaped_text_is_literal_safe(s in ".*") {
        let escaped = escape(&s);
        prop_assert!(!escaped.contains('\n'));
        prop_assert!(!escaped.contains('\r'));
        let ls = '\u{2028}';
        let ps = '\u{2029}';
        prop_assert!(!escaped.contains(ls));
        prop_assert!(!escaped.contains(ps));

        // Every quote is preceded by a backslash that itself is not
        // consumed by a preceding escape.
        let mut prev_backslashes = 0usize;
        for c in escaped.chars() {
            if c == '\'' {
                prop_assert!(prev_backslashes % 2 == 1, "unescaped quote in {:?}", escaped);
            }
            prev_backslashes = if c == '\\' { prev_backslashes + 1 } else { 0 };
        }
    }

    /// Quoting always yields a parseable single-quoted literal shape.
    #[test]
    fn prop_quote_shape(s in ".*") {
        let quoted = quote(&s);
        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));
        prop_assert_eq!(unescape(&quoted[1..quoted.len() - 1]), s);
    }
}

// === Identifiers ===

proptest! {
    /// Well-formed non-reserved names are accepted.
    #[test]
    fn prop_valid_identifier_accepted(name in "[a-zA-Z_$][a-zA-Z0-9_$]{0,20}") {
        if !Identifier::RESERVED_WORDS.contains(&name.as_str()) {
            prop_assert!(Identifier::new(&name).is_ok(), "rejected: {}", name);
        }
    }

    /// Names starting with a digit are rejected.
    #[test]
    fn prop_digit_start_rejected(digit in "[0-9]", rest in "[a-zA-Z0-9_$]{0,10}") {
        let name = format!("{digit}{rest}");
        prop_assert!(Identifier::new(name).is_err());
    }

    /// Every reserved word is rejected.
    #[test]
    fn prop_reserved_word_rejected(idx in 0..Identifier::RESERVED_WORDS.len()) {
        prop_assert!(Identifier::new(Identifier::RESERVED_WORDS[idx]).is_err());
    }

    /// One bad character anywhere poisons the name.
    #[test]
    fn prop_invalid_char_rejected(
        prefix in "[a-zA-Z_$]{1,5}",
        bad in "[-!@#%^&*()+=\\[\\]{};':\"<>,./? ]",
        suffix in "[a-zA-Z0-9_$]{0,5}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(Identifier::new(name).is_err());
    }
}

// === Rendering ===

proptest! {
    /// Literal strings are quoted and recoverable from the rendered text.
    #[test]
    fn prop_string_literal_round_trip(s in ".*") {
        let js = Lit::from(s.as_str()).to_js();
        prop_assert!(js.starts_with('\''));
        prop_assert!(js.ends_with('\''));
        prop_assert_eq!(unescape(&js[1..js.len() - 1]), s);
    }

    /// Integer literals render as their decimal form.
    #[test]
    fn prop_number_rendering(n in any::<i32>()) {
        prop_assert_eq!(Lit::from(n).to_js(), n.to_string());
    }

    /// Building the same function twice renders identical text, and each
    /// built value renders idempotently.
    #[test]
    fn prop_deterministic_generation(
        name in "[a-zA-Z_][a-zA-Z0-9_]{0,10}",
        value in any::<i32>(),
    ) {
        if Identifier::RESERVED_WORDS.contains(&name.as_str()) {
            return Ok(());
        }
        let build = || -> Result<Func> {
            Ok(Func::named(name.as_str())?
                .let_("x", value)?
                .ret_val(Val::ident("x")?))
        };
        let a = build().expect("valid build");
        let b = build().expect("valid build");
        prop_assert_eq!(a.to_decl(), b.to_decl());
        prop_assert_eq!(a.to_expr(), a.to_expr());
    }

    /// The termination rule never doubles a semicolon and never drops one
    /// between simple statements.
    #[test]
    fn prop_termination_invariant(
        names in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 1..6),
        guard_one in any::<bool>(),
    ) {
        let mut func = Func::anonymous();
        let mut expected = 0usize;
        for (i, name) in names.iter().enumerate() {
            if Identifier::RESERVED_WORDS.contains(&name.as_str()) {
                continue;
            }
            // Alternate plain statements with a nested block to exercise
            // both sides of the rule.
            if guard_one && i == 0 {
                func = func.if_(Val::raw("ready")).log(name.as_str()).end_if();
            } else {
                func = func.let_(format!("{name}{i}"), i as u32).expect("valid name");
                expected += 1;
            }
        }
        let js = func.to_expr();
        prop_assert!(!js.contains(";;"), "doubled terminator in {}", js);
        prop_assert!(!js.contains("};"), "terminator after block in {}", js);
        prop_assert_eq!(js.matches(" = ").count(), expected);
    }

    /// Generator nesting keeps every accumulated fragment in order.
    #[test]
    fn prop_generator_nesting_keeps_fragments(count in 1usize..5) {
        let mut body = Func::anonymous_generator().while_(Val::raw("live"));
        for i in 0..count {
            body = body.yield_(i as u32);
        }
        let js = body.end_while().to_expr();
        for i in 0..count {
            prop_assert!(js.contains(&format!("yield {i};")), "missing yield {} in {}", i, js);
        }
        let prefix = "function*(){while(live){";
        prop_assert!(js.starts_with(prefix));
    }
}

// === quickcheck cross-check ===

#[quickcheck]
fn qc_escape_round_trip(s: String) -> bool {
    unescape(&escape(&s)) == s
}

#[quickcheck]
fn qc_escape_injective_on_distinct_inputs(a: String, b: String) -> bool {
    // A lossless reversible transform maps distinct inputs to distinct
    // outputs.
    a == b || escape(&a) != escape(&b)
}

#[quickcheck]
fn qc_quote_never_emits_bare_newline(s: String) -> bool {
    !quote(&s).contains('\n')
}
