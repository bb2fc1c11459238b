//! Error types for converting Rust values into [`Value`](crate::Value).
//!
//! Rendering a [`Value`](crate::Value) into literal syntax never fails. The only
//! fallible step is the serde bridge ([`to_value`](crate::to_value)), where a user
//! `Serialize` impl may report its own error through `serde::ser::Error::custom`.
//!
//! ## Examples
//!
//! ```rust
//! use sparql_literal::Error;
//!
//! let err = Error::custom("bad payload");
//! assert!(err.to_string().contains("bad payload"));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors raised while converting a `T: Serialize` into a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Error reported by a `Serialize` implementation
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparql_literal::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert_eq!(err.to_string(), "Error: something went wrong");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
