//! Query parameters and their placeholder strings.
//!
//! A [`Param`] pairs a [`Value`] with the information a query template needs
//! to find where it goes: an optional name (matched as `@name`) and a 1-based
//! ordinal (matched as `$N`). Substituting placeholders is left to the caller.
//!
//! ```rust
//! use sparql_literal::Param;
//!
//! let param = Param::named("x", 2, "Alice");
//! assert_eq!(param.placeholders(), vec!["@x", "$2"]);
//! assert_eq!(param.serialize(), r#""""Alice""""#);
//!
//! let query = "SELECT * WHERE { ?s foaf:name @x }";
//! let rendered = param
//!     .placeholders()
//!     .iter()
//!     .fold(query.to_string(), |q, p| q.replace(p.as_str(), &param.serialize()));
//! assert_eq!(rendered, r#"SELECT * WHERE { ?s foaf:name """Alice""" }"#);
//! ```

use crate::{LiteralSerializer, Value};

/// A parameter to fill query placeholders.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    /// Parameter name without the `@` prefix. When set and non-empty it is
    /// matched in addition to the ordinal.
    pub name: Option<String>,
    /// Position of the parameter, starting from one. Assigned by the caller and
    /// never checked for uniqueness.
    pub ordinal: usize,
    pub value: Value,
}

impl Param {
    /// Creates a positional parameter.
    #[must_use]
    pub fn new(ordinal: usize, value: impl Into<Value>) -> Self {
        Param {
            name: None,
            ordinal,
            value: value.into(),
        }
    }

    /// Creates a named parameter.
    #[must_use]
    pub fn named(name: impl Into<String>, ordinal: usize, value: impl Into<Value>) -> Self {
        Param {
            name: Some(name.into()),
            ordinal,
            value: value.into(),
        }
    }

    /// Returns the non-empty name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns the placeholder strings that refer to this parameter.
    ///
    /// `["@name", "$ordinal"]` for named parameters, `["$ordinal"]` otherwise.
    #[must_use]
    pub fn placeholders(&self) -> Vec<String> {
        let ordinal = format!("${}", self.ordinal);
        match self.name() {
            Some(name) => vec![format!("@{}", name), ordinal],
            None => vec![ordinal],
        }
    }

    /// Renders the value with default options.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.serialize_with(&LiteralSerializer::default())
    }

    #[must_use]
    pub fn serialize_with(&self, serializer: &LiteralSerializer) -> String {
        serializer.serialize(&self.value)
    }
}
