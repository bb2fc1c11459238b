//! # sparql_literal
//!
//! Render typed Rust values as SPARQL literal and IRI tokens, ready to be
//! embedded into query text.
//!
//! ## What it does
//!
//! Query templates carry placeholders such as `@name` or `$1`. Before a query is
//! sent, each placeholder is replaced with a token in the query language's own
//! syntax. This crate produces those tokens:
//!
//! | Rust value | Token |
//! |---|---|
//! | `42i32`, `7u64` | `42`, `7` |
//! | `1.5f64` | `1.5e+00` |
//! | `true` | `true` |
//! | `"it's"`, `b"raw".to_vec()` | `"""it's"""`, `"""raw"""` |
//! | `DateTime<Utc>` | `"2023-01-02T03:04:05Z"^^xsd:dateTime` |
//! | `Iri::new("http://a b")` | `<http://a%20b>` |
//! | `PrefixedName::new("foaf:name")` | `foaf:name` |
//! | `Literal::lang("hi", "en")` | `"""hi"""@en` |
//!
//! Rendering is total: every [`Value`] produces a string, and structured values
//! without a dedicated form fall back to their JSON text as a long string.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparql_literal::{to_literal, Iri, Literal, Param, Value};
//!
//! assert_eq!(to_literal(&Value::from(42)), "42");
//! assert_eq!(to_literal(&Value::from("a\"\"\"b")), r#""""a\"\"\"b""""#);
//! assert_eq!(to_literal(&Value::from(Iri::new("http://a b<c>"))), "<http://a%20b%3Cc%3E>");
//! assert_eq!(to_literal(&Value::from(Literal::lang("hello", "en"))), r#""""hello"""@en"#);
//!
//! let param = Param::named("x", 2, 3.0f32);
//! assert_eq!(param.placeholders(), vec!["@x", "$2"]);
//! assert_eq!(param.serialize(), "3e+00");
//! ```
//!
//! ### Any `Serialize` type
//!
//! ```rust
//! use serde::Serialize;
//! use sparql_literal::{serialize, to_value, Iri, Kind};
//!
//! #[derive(Serialize)]
//! struct Homepage(Iri);
//!
//! assert_eq!(serialize(&-5i8).unwrap(), "-5");
//! assert_eq!(serialize(&Homepage(Iri::new("http://x.org/"))).unwrap(), "<http://x.org/>");
//! assert_eq!(to_value(&vec![1, 2]).unwrap().kind(), Kind::Other);
//! ```
//!
//! ## Trust boundaries
//!
//! - [`PrefixedName`] is emitted without escaping or validation.
//! - [`ToLiteral`] implementations are emitted verbatim.
//!
//! Both are the caller's responsibility. Everything else is escaped by
//! construction.
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `trace` and `debug` level and never
//! installs a subscriber.

pub mod error;
pub mod iri;
pub mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod param;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use iri::{Identifier, Iri, IriRef, PrefixedName};
pub use literal::{Literal, ToLiteral};
pub use map::ValueMap;
pub use options::{LiteralOptions, XSD_DATE_TIME};
pub use param::Param;
pub use ser::{LiteralSerializer, ValueSerializer};
pub use value::{Float, Kind, Value};

use serde::Serialize;

/// Render a [`Value`] with default options.
///
/// # Examples
///
/// ```rust
/// use sparql_literal::{to_literal, Value};
///
/// assert_eq!(to_literal(&Value::from(false)), "false");
/// ```
#[must_use]
pub fn to_literal(value: &Value) -> String {
    LiteralSerializer::default().serialize(value)
}

/// Render a [`Value`] with custom options.
#[must_use]
pub fn to_literal_with_options(value: &Value, options: LiteralOptions) -> String {
    LiteralSerializer::new(options).serialize(value)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use sparql_literal::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.as_object().and_then(|o| o.get("x")), Some(&Value::Signed(1)));
/// ```
///
/// # Errors
///
/// Returns an error only if a `Serialize` impl reports one.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Convert any `T: Serialize` to a literal token with default options.
///
/// # Errors
///
/// Returns an error only if a `Serialize` impl reports one.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(to_literal(&to_value(value)?))
}
