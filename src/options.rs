//! Configuration options for literal rendering.
//!
//! The defaults produce the standard lexical forms. Only timestamp rendering is
//! configurable:
//!
//! ```rust
//! use chrono::DateTime;
//! use sparql_literal::{to_literal_with_options, Identifier, LiteralOptions, Value};
//!
//! let ts = DateTime::parse_from_rfc3339("2023-01-02T05:04:05+02:00").unwrap();
//!
//! let options = LiteralOptions::new()
//!     .with_utc_timestamps(true)
//!     .with_datetime_datatype(Identifier::iri(
//!         "http://www.w3.org/2001/XMLSchema#dateTime",
//!     ));
//! assert_eq!(
//!     to_literal_with_options(&Value::from(ts), options),
//!     "\"2023-01-02T03:04:05Z\"^^<http://www.w3.org/2001/XMLSchema#dateTime>"
//! );
//! ```

use crate::Identifier;

/// Prefixed name used for timestamps by default.
pub const XSD_DATE_TIME: &str = "xsd:dateTime";

/// Options for [`LiteralSerializer`](crate::LiteralSerializer).
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralOptions {
    /// Datatype appended to timestamps after `^^`.
    pub datetime_datatype: Identifier,
    /// Convert timestamps to UTC before formatting.
    pub utc_timestamps: bool,
}

impl Default for LiteralOptions {
    fn default() -> Self {
        LiteralOptions {
            datetime_datatype: Identifier::prefixed(XSD_DATE_TIME),
            utc_timestamps: false,
        }
    }
}

impl LiteralOptions {
    /// Creates default options (`xsd:dateTime`, offsets preserved).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparql_literal::{Identifier, LiteralOptions};
    ///
    /// let options = LiteralOptions::new();
    /// assert_eq!(options.datetime_datatype, Identifier::prefixed("xsd:dateTime"));
    /// assert!(!options.utc_timestamps);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the datatype appended to timestamps.
    #[must_use]
    pub fn with_datetime_datatype(mut self, datatype: impl Into<Identifier>) -> Self {
        self.datetime_datatype = datatype.into();
        self
    }

    /// When enabled, timestamps are shifted to UTC and always end in `Z`.
    #[must_use]
    pub fn with_utc_timestamps(mut self, utc: bool) -> Self {
        self.utc_timestamps = utc;
        self
    }
}
