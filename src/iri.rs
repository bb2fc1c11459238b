//! IRI references in the two forms SPARQL accepts.
//!
//! - [`Iri`]: a full `IRIREF`, written as `<...>` with reserved characters
//!   percent-encoded.
//! - [`PrefixedName`]: a compact `prefix:local` name, written as-is.
//!
//! Both implement [`IriRef`], and [`Identifier`] holds either one.
//!
//! ## Examples
//!
//! ```rust
//! use sparql_literal::{Iri, IriRef, PrefixedName};
//!
//! assert_eq!(Iri::new("http://a b<c>").iri_ref(), "<http://a%20b%3Cc%3E>");
//! assert_eq!(PrefixedName::new("foaf:name").iri_ref(), "foaf:name");
//! ```
//!
//! ## Trust boundary
//!
//! A [`PrefixedName`] is never escaped or validated. The caller vouches that it is
//! a syntactically valid compact name; an invalid one produces an invalid token.

use serde::{Serialize, Serializer};
use std::fmt;

pub(crate) const IRI_TOKEN: &str = "$sparql_literal::private::Iri";
pub(crate) const PREFIXED_NAME_TOKEN: &str = "$sparql_literal::private::PrefixedName";

/// Anything that can be written as an IRI reference token.
///
/// See <https://www.w3.org/TR/rdf-sparql-query/#rIRIref>.
pub trait IriRef {
    /// Returns the token to embed into query text.
    fn iri_ref(&self) -> String;
}

/// A full IRI, rendered as `<...>`.
///
/// # Examples
///
/// ```rust
/// use sparql_literal::{Iri, IriRef};
///
/// let iri = Iri::new("http://example.org/{id}");
/// assert_eq!(iri.iri_ref(), "<http://example.org/%7Bid%7D>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
    #[must_use]
    pub fn new(iri: impl Into<String>) -> Self {
        Iri(iri.into())
    }

    /// Returns the raw, unescaped IRI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IriRef for Iri {
    fn iri_ref(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 2);
        out.push('<');
        for ch in self.0.chars() {
            match ch {
                '<' => out.push_str("%3C"),
                '>' => out.push_str("%3E"),
                '"' => out.push_str("%22"),
                ' ' => out.push_str("%20"),
                '{' => out.push_str("%7B"),
                '}' => out.push_str("%7D"),
                '|' => out.push_str("%7C"),
                '\\' => out.push_str("%5C"),
                '^' => out.push_str("%5E"),
                '`' => out.push_str("%60"),
                _ => out.push(ch),
            }
        }
        out.push('>');
        out
    }
}

/// A compact `prefix:local` name, rendered verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixedName(String);

impl PrefixedName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        PrefixedName(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IriRef for PrefixedName {
    fn iri_ref(&self) -> String {
        self.0.clone()
    }
}

/// Either form of IRI reference.
///
/// Used wherever the crate stores an identifier: as a [`Value`](crate::Value),
/// as a literal's datatype, and in [`LiteralOptions`](crate::LiteralOptions).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identifier {
    Iri(Iri),
    Prefixed(PrefixedName),
}

impl Identifier {
    /// Shorthand for `Identifier::Iri(Iri::new(iri))`.
    #[must_use]
    pub fn iri(iri: impl Into<String>) -> Self {
        Identifier::Iri(Iri::new(iri))
    }

    /// Shorthand for `Identifier::Prefixed(PrefixedName::new(name))`.
    #[must_use]
    pub fn prefixed(name: impl Into<String>) -> Self {
        Identifier::Prefixed(PrefixedName::new(name))
    }

    #[must_use]
    pub const fn is_prefixed(&self) -> bool {
        matches!(self, Identifier::Prefixed(_))
    }
}

impl IriRef for Identifier {
    fn iri_ref(&self) -> String {
        match self {
            Identifier::Iri(iri) => iri.iri_ref(),
            Identifier::Prefixed(name) => name.iri_ref(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iri_ref())
    }
}

impl From<Iri> for Identifier {
    fn from(iri: Iri) -> Self {
        Identifier::Iri(iri)
    }
}

impl From<PrefixedName> for Identifier {
    fn from(name: PrefixedName) -> Self {
        Identifier::Prefixed(name)
    }
}

// The marker names let `ValueSerializer` recognise identifiers nested in user
// types. Other serializers just see a newtype around a string.
impl Serialize for Iri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(IRI_TOKEN, &self.0)
    }
}

impl Serialize for PrefixedName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(PREFIXED_NAME_TOKEN, &self.0)
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Identifier::Iri(iri) => iri.serialize(serializer),
            Identifier::Prefixed(name) => name.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_plain() {
        assert_eq!(
            Iri::new("http://example.org/a").iri_ref(),
            "<http://example.org/a>"
        );
        assert_eq!(Iri::new("").iri_ref(), "<>");
    }

    #[test]
    fn test_iri_escapes_every_reserved_char() {
        let iri = Iri::new("<>\" {}|\\^`");
        assert_eq!(
            iri.iri_ref(),
            "<%3C%3E%22%20%7B%7D%7C%5C%5E%60>"
        );
    }

    #[test]
    fn test_iri_mixed() {
        assert_eq!(Iri::new("http://a b<c>").iri_ref(), "<http://a%20b%3Cc%3E>");
    }

    #[test]
    fn test_iri_keeps_non_ascii() {
        assert_eq!(Iri::new("http://例え.jp/ü").iri_ref(), "<http://例え.jp/ü>");
    }

    #[test]
    fn test_prefixed_name_passthrough() {
        assert_eq!(PrefixedName::new("foaf:name").iri_ref(), "foaf:name");
        // not validated
        assert_eq!(PrefixedName::new("not valid <x>").iri_ref(), "not valid <x>");
    }

    #[test]
    fn test_identifier_dispatch() {
        assert_eq!(Identifier::iri("urn:x y").iri_ref(), "<urn:x%20y>");
        assert_eq!(Identifier::prefixed("xsd:int").iri_ref(), "xsd:int");
        assert!(Identifier::prefixed("xsd:int").is_prefixed());
        assert_eq!(Identifier::iri("urn:a").to_string(), "<urn:a>");
    }

    #[test]
    fn test_identifier_equality_by_content() {
        assert_eq!(Identifier::iri("urn:a"), Identifier::from(Iri::new("urn:a")));
        assert_ne!(Identifier::iri("urn:a"), Identifier::prefixed("urn:a"));
    }
}
