//! Property-based tests for the rendering guarantees that hold across all inputs.

use proptest::prelude::*;
use sparql_literal::ser::escape_triple_quotes;
use sparql_literal::{to_literal, Iri, IriRef, Literal, ToLiteral, Value};

const TRIPLE_QUOTE: &str = "\"\"\"";

/// Strips the `"""` envelope and undoes the escaping.
fn unquote_long(rendered: &str) -> Option<String> {
    let inner = rendered
        .strip_prefix(TRIPLE_QUOTE)?
        .strip_suffix(TRIPLE_QUOTE)?;
    Some(inner.replace("\\\"\\\"\\\"", TRIPLE_QUOTE))
}

fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

fn finite_f32() -> impl Strategy<Value = f32> {
    prop::num::f32::NORMAL | prop::num::f32::SUBNORMAL | prop::num::f32::ZERO
}

proptest! {
    #[test]
    fn prop_i64_minimal_decimal(n in any::<i64>()) {
        prop_assert_eq!(to_literal(&Value::from(n)), n.to_string());
    }

    #[test]
    fn prop_i128_minimal_decimal(n in any::<i128>()) {
        let out = to_literal(&Value::from(n));
        prop_assert_eq!(out.parse::<i128>().ok(), Some(n));
        prop_assert!(!out.starts_with('+'));
        prop_assert!(n == 0 || !out.trim_start_matches('-').starts_with('0'));
    }

    #[test]
    fn prop_u64_minimal_decimal(n in any::<u64>()) {
        prop_assert_eq!(to_literal(&Value::from(n)), n.to_string());
    }

    #[test]
    fn prop_f64_roundtrip(f in finite_f64()) {
        let out = to_literal(&Value::from(f));
        prop_assert!(out.contains('e'));
        let back: f64 = out.parse().unwrap();
        prop_assert_eq!(back.to_bits(), f.to_bits());
    }

    #[test]
    fn prop_f32_roundtrip(f in finite_f32()) {
        let out = to_literal(&Value::from(f));
        let back: f32 = out.parse().unwrap();
        prop_assert_eq!(back.to_bits(), f.to_bits());
    }

    #[test]
    fn prop_text_wrapped_and_escaped(parts in prop::collection::vec("[a-z \"]{0,6}", 0..6)) {
        let s = parts.join(TRIPLE_QUOTE);
        let out = to_literal(&Value::from(s.as_str()));
        prop_assert!(out.starts_with(TRIPLE_QUOTE));
        prop_assert!(out.ends_with(TRIPLE_QUOTE));
        let inner = &out[3..out.len() - 3];
        let escaped = escape_triple_quotes(&s);
        prop_assert_eq!(inner, &*escaped);
    }

    #[test]
    fn prop_escape_then_unescape(s in "[ab\"]{0,24}") {
        let out = to_literal(&Value::from(s.as_str()));
        prop_assert_eq!(unquote_long(&out), Some(s));
    }

    #[test]
    fn prop_bytes_match_text(s in "\\PC{0,16}") {
        prop_assert_eq!(
            to_literal(&Value::from(s.as_bytes())),
            to_literal(&Value::from(s.as_str()))
        );
    }

    #[test]
    fn prop_iri_never_contains_reserved(s in "\\PC{0,32}") {
        let token = Iri::new(s).iri_ref();
        let inner = &token[1..token.len() - 1];
        let reserved = "<>\" {}|\\^`";
        prop_assert!(!inner.chars().any(|c| reserved.contains(c)));
    }

    #[test]
    fn prop_lang_literal_suffix(s in "\\PC{0,16}", tag in "[a-z]{2}") {
        let out = Literal::lang(s.as_str(), tag.as_str()).to_literal();
        let suffix = format!("\"\"\"@{}", tag);
        prop_assert!(out.ends_with(&suffix));
    }

    #[test]
    fn prop_idempotent(n in any::<i32>(), s in "\\PC{0,16}", b in any::<bool>()) {
        for value in [Value::from(n), Value::from(s.as_str()), Value::from(b)] {
            prop_assert_eq!(to_literal(&value), to_literal(&value));
        }
    }
}
