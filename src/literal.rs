//! RDF literals with an explicit language tag or datatype.
//!
//! A [`Literal`] wraps a raw [`Value`] and renders it as a long string literal,
//! optionally followed by `@lang` or `^^datatype`:
//!
//! ```rust
//! use sparql_literal::{Identifier, Literal, ToLiteral};
//!
//! let greeting = Literal::new("hello").with_language("en");
//! assert_eq!(greeting.to_literal(), r#""""hello"""@en"#);
//!
//! let five = Literal::new(5).with_datatype(Identifier::prefixed("xsd:integer"));
//! assert_eq!(five.to_literal(), r#""""5"""^^xsd:integer"#);
//! ```
//!
//! The raw value is always rendered through its textual form (see the
//! [`Display`](std::fmt::Display) impl of [`Value`]), never through the
//! dispatch table of [`LiteralSerializer`](crate::LiteralSerializer).

use crate::ser::annotate;
use crate::{Identifier, Value};
use std::fmt;

/// A value that knows how to render itself as literal syntax.
///
/// [`LiteralSerializer`](crate::LiteralSerializer) emits the returned string
/// verbatim, so implementations are trusted to produce valid syntax. The
/// capability is consulted only for [`Value::Custom`], after every built-in kind.
///
/// # Examples
///
/// ```rust
/// use sparql_literal::{to_literal, ToLiteral, Value};
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Point(i32, i32);
///
/// impl ToLiteral for Point {
///     fn to_literal(&self) -> String {
///         format!("\"POINT({} {})\"^^geo:wktLiteral", self.0, self.1)
///     }
/// }
///
/// let value = Value::Custom(Arc::new(Point(1, 2)));
/// assert_eq!(to_literal(&value), "\"POINT(1 2)\"^^geo:wktLiteral");
/// ```
pub trait ToLiteral: fmt::Debug + Send + Sync {
    fn to_literal(&self) -> String;
}

/// A raw value plus optional language tag or datatype.
///
/// When both metadata fields are set the language tag wins and the datatype is
/// not emitted. An empty language tag counts as absent.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    value: Value,
    language_tag: Option<String>,
    datatype: Option<Identifier>,
}

impl Literal {
    /// Creates a plain literal with no language tag or datatype.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Literal {
            value: value.into(),
            language_tag: None,
            datatype: None,
        }
    }

    /// Creates a language-tagged literal.
    #[must_use]
    pub fn lang(value: impl Into<Value>, tag: impl Into<String>) -> Self {
        Self::new(value).with_language(tag)
    }

    /// Creates a typed literal.
    #[must_use]
    pub fn typed(value: impl Into<Value>, datatype: impl Into<Identifier>) -> Self {
        Self::new(value).with_datatype(datatype)
    }

    #[must_use]
    pub fn with_language(mut self, tag: impl Into<String>) -> Self {
        self.language_tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn with_datatype(mut self, datatype: impl Into<Identifier>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the language tag, if a non-empty one is set.
    #[must_use]
    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref().filter(|tag| !tag.is_empty())
    }

    #[must_use]
    pub fn datatype(&self) -> Option<&Identifier> {
        self.datatype.as_ref()
    }
}

impl ToLiteral for Literal {
    fn to_literal(&self) -> String {
        annotate(
            &self.value.to_string(),
            self.language_tag(),
            self.datatype.as_ref(),
        )
    }
}

/// An already-rendered token, emitted unchanged.
///
/// The serde bridge rebuilds self-serializing values as this, since only their
/// rendered output survives a trip through `Serialize`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Verbatim(pub(crate) String);

impl ToLiteral for Verbatim {
    fn to_literal(&self) -> String {
        self.0.clone()
    }
}
