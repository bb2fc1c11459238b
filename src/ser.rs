//! Literal serialization.
//!
//! This module holds the two halves of serialization:
//!
//! - [`LiteralSerializer`] renders a [`Value`] into SPARQL literal syntax. It
//!   never fails: every value reduces to some token.
//! - [`ValueSerializer`] is a `serde::Serializer` that turns any
//!   `T: Serialize` into a [`Value`].
//!
//! ## Dispatch
//!
//! [`LiteralSerializer::serialize`] picks the first matching rule:
//!
//! | Kind | Output |
//! |---|---|
//! | signed / unsigned integer | `-42`, `42` |
//! | float | `1.5e+00`, `1e-07` (shortest round-trip at native precision) |
//! | bool | `true`, `false` |
//! | bytes, text | `"""..."""` with embedded `"""` escaped |
//! | timestamp | `"2023-01-02T03:04:05Z"^^xsd:dateTime` |
//! | identifier | `<http://...>` or `prefix:name` |
//! | self-serializing | whatever [`ToLiteral::to_literal`] returns |
//! | anything else | textual form wrapped like text |
//!
//! ## Usage
//!
//! ```rust
//! use sparql_literal::{LiteralSerializer, Value};
//!
//! let serializer = LiteralSerializer::default();
//! assert_eq!(serializer.serialize(&Value::from(42)), "42");
//! assert_eq!(serializer.serialize(&Value::from(1e6)), "1e+06");
//! assert_eq!(serializer.serialize(&Value::from("hi")), r#""""hi""""#);
//! ```

use crate::iri::{IRI_TOKEN, PREFIXED_NAME_TOKEN};
use crate::literal::Verbatim;
use crate::value::{format_timestamp, BIGINT_TOKEN, TIMESTAMP_TOKEN, VERBATIM_TOKEN};
use crate::{
    Error, Float, Identifier, Iri, IriRef, LiteralOptions, PrefixedName, Result, Value, ValueMap,
};
use chrono::{DateTime, Utc};
use serde::{ser, Serialize};
use std::borrow::Cow;
use tracing::{debug, trace};

const TRIPLE_QUOTE: &str = r#"""""#;
const ESCAPED_TRIPLE_QUOTE: &str = r#"\"\"\""#;

/// Renders [`Value`]s as SPARQL literal tokens.
///
/// Created via [`LiteralSerializer::new`] or [`Default`]. Holds only its
/// options, so one instance can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct LiteralSerializer {
    options: LiteralOptions,
}

impl LiteralSerializer {
    pub fn new(options: LiteralOptions) -> Self {
        LiteralSerializer { options }
    }

    /// Renders a value through the kind dispatch table.
    #[must_use]
    pub fn serialize(&self, value: &Value) -> String {
        match value {
            Value::Signed(i) => i.to_string(),
            Value::BigInt(bi) => bi.to_string(),
            Value::Unsigned(u) => u.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Bool(b) => b.to_string(),
            Value::Bytes(bytes) => quote_long(&String::from_utf8_lossy(bytes)),
            Value::Text(s) => quote_long(s),
            Value::Timestamp(dt) => {
                let text = if self.options.utc_timestamps {
                    format_timestamp(&dt.with_timezone(&Utc))
                } else {
                    format_timestamp(dt)
                };
                format!("\"{}\"^^{}", text, self.options.datetime_datatype.iri_ref())
            }
            Value::Iri(id) => id.iri_ref(),
            Value::Custom(custom) => {
                trace!(?custom, "rendering self-serializing value verbatim");
                custom.to_literal()
            }
            Value::Null | Value::Array(_) | Value::Object(_) => {
                trace!(
                    kind = value.kind().as_str(),
                    "rendering value through textual fallback"
                );
                quote_long(&value.to_string())
            }
        }
    }

    /// Renders a value with optional language tag or datatype.
    ///
    /// With neither annotation this is [`serialize`](Self::serialize). With
    /// either one, the value's textual form is rendered as a long string
    /// followed by `@tag` or `^^datatype`, exactly like a
    /// [`Literal`](crate::Literal). A non-empty language tag wins over a datatype.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparql_literal::{Identifier, LiteralSerializer, Value};
    ///
    /// let serializer = LiteralSerializer::default();
    /// let xsd_int = Identifier::prefixed("xsd:integer");
    /// assert_eq!(
    ///     serializer.serialize_annotated(&Value::from(5), None, Some(&xsd_int)),
    ///     r#""""5"""^^xsd:integer"#
    /// );
    /// assert_eq!(serializer.serialize_annotated(&Value::from(5), None, None), "5");
    /// ```
    #[must_use]
    pub fn serialize_annotated(
        &self,
        value: &Value,
        language_tag: Option<&str>,
        datatype: Option<&Identifier>,
    ) -> String {
        let language_tag = language_tag.filter(|tag| !tag.is_empty());
        if language_tag.is_none() && datatype.is_none() {
            return self.serialize(value);
        }
        annotate(&value.to_string(), language_tag, datatype)
    }
}

/// Wraps `text` in long-string delimiters and appends the annotation.
pub(crate) fn annotate(
    text: &str,
    language_tag: Option<&str>,
    datatype: Option<&Identifier>,
) -> String {
    let mut out = quote_long(text);
    match (language_tag, datatype) {
        (Some(tag), datatype) => {
            if let Some(datatype) = datatype {
                debug!(
                    language_tag = tag,
                    datatype = %datatype,
                    "literal has both language tag and datatype, dropping datatype"
                );
            }
            out.push('@');
            out.push_str(tag);
        }
        (None, Some(datatype)) => {
            out.push_str("^^");
            out.push_str(&datatype.iri_ref());
        }
        (None, None) => {}
    }
    out
}

/// Escapes every `"""` in `s` as `\"\"\"`, scanning left to right.
///
/// # Examples
///
/// ```rust
/// use sparql_literal::ser::escape_triple_quotes;
///
/// assert_eq!(escape_triple_quotes("plain"), "plain");
/// assert_eq!(escape_triple_quotes(r#"a"""b"#), r#"a\"\"\"b"#);
/// assert_eq!(escape_triple_quotes("\"\"\"\"\"\""), r#"\"\"\"\"\"\""#);
/// ```
#[must_use]
pub fn escape_triple_quotes(s: &str) -> Cow<'_, str> {
    if s.contains(TRIPLE_QUOTE) {
        Cow::Owned(s.replace(TRIPLE_QUOTE, ESCAPED_TRIPLE_QUOTE))
    } else {
        Cow::Borrowed(s)
    }
}

/// Renders `s` as a `"""`-delimited long string literal.
#[must_use]
pub fn quote_long(s: &str) -> String {
    let escaped = escape_triple_quotes(s);
    let mut out = String::with_capacity(escaped.len() + 2 * TRIPLE_QUOTE.len());
    out.push_str(TRIPLE_QUOTE);
    out.push_str(&escaped);
    out.push_str(TRIPLE_QUOTE);
    out
}

/// Formats a float in scientific notation with the shortest round-tripping
/// mantissa for its precision and a signed, two-digit minimum exponent.
///
/// # Examples
///
/// ```rust
/// use sparql_literal::{ser::format_float, Float};
///
/// assert_eq!(format_float(Float::Double(1e6)), "1e+06");
/// assert_eq!(format_float(Float::Double(-2.5e-7)), "-2.5e-07");
/// assert_eq!(format_float(Float::Single(0.1)), "1e-01");
/// assert_eq!(format_float(Float::Double(f64::NAN)), "NaN");
/// ```
#[must_use]
pub fn format_float(value: Float) -> String {
    if !value.is_finite() {
        return non_finite(value.as_f64()).to_string();
    }
    let raw = match value {
        Float::Single(f) => format!("{:e}", f),
        Float::Double(f) => format!("{:e}", f),
    };

    // Rust writes `1.5e-7`; pad to `1.5e-07` and sign positive exponents.
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    let mut out = String::with_capacity(raw.len() + 2);
    out.push_str(mantissa);
    out.push('e');
    out.push(sign);
    if digits.len() < 2 {
        out.push('0');
    }
    out.push_str(digits);
    out
}

pub(crate) fn non_finite(f: f64) -> &'static str {
    if f.is_nan() {
        "NaN"
    } else if f.is_sign_positive() {
        "+Inf"
    } else {
        "-Inf"
    }
}

/// A `serde::Serializer` producing [`Value`]s.
///
/// Mapping from the serde data model:
///
/// - integers keep their signedness, floats keep their precision
/// - `serialize_bytes` becomes [`Value::Bytes`] (a plain `Vec<u8>` serializes
///   as a sequence and becomes an array)
/// - strings, chars and unit variants become [`Value::Text`]
/// - `None`, `()` and unit structs become [`Value::Null`]
/// - sequences and tuples become [`Value::Array`]
/// - maps and structs become [`Value::Object`]; non-string keys are replaced by
///   their textual form
/// - variants with data become a one-entry object keyed by the variant name
/// - [`Iri`] and [`PrefixedName`] stay identifiers
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: ValueMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: ValueMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::Signed(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::Unsigned(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(Float::Single(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(Float::Double(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Text(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(self)?;
        Ok(match (name, inner) {
            (IRI_TOKEN, Value::Text(s)) => Value::from(Iri::new(s)),
            (PREFIXED_NAME_TOKEN, Value::Text(s)) => Value::from(PrefixedName::new(s)),
            (BIGINT_TOKEN, Value::Text(s)) => match s.parse() {
                Ok(bi) => Value::BigInt(bi),
                Err(_) => Value::Text(s),
            },
            (TIMESTAMP_TOKEN, Value::Text(s)) => match DateTime::parse_from_rfc3339(&s) {
                Ok(dt) => Value::Timestamp(dt),
                Err(_) => Value::Text(s),
            },
            (VERBATIM_TOKEN, Value::Text(s)) => Value::custom(Verbatim(s)),
            (_, inner) => inner,
        })
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = ValueMap::with_capacity(1);
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: ValueMap::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: ValueMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = ValueMap::with_capacity(1);
        map.insert(self.variant.to_string(), Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::Text(s) => s,
            other => other.to_string(),
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = ValueMap::with_capacity(1);
        outer.insert(self.variant.to_string(), Value::Object(self.map));
        Ok(Value::Object(outer))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
