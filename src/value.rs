//! Dynamic value representation for query parameters.
//!
//! [`Value`] is the closed set of kinds the serializer knows how to render.
//! Every Rust primitive converts into it with `From`, and any `T: Serialize`
//! converts through [`to_value`](crate::to_value).
//!
//! ## Kinds
//!
//! Variants are declared in dispatch order. [`Value::kind`] maps each one onto
//! its [`Kind`]:
//!
//! | Variant | Kind |
//! |---|---|
//! | `Signed`, `BigInt` | [`Kind::SignedInteger`] |
//! | `Unsigned` | [`Kind::UnsignedInteger`] |
//! | `Float` | [`Kind::Float`] |
//! | `Bool` | [`Kind::Bool`] |
//! | `Bytes` | [`Kind::Bytes`] |
//! | `Text` | [`Kind::Text`] |
//! | `Timestamp` | [`Kind::Timestamp`] |
//! | `Iri` | [`Kind::Identifier`] |
//! | `Custom` | [`Kind::SelfSerializing`] |
//! | `Null`, `Array`, `Object` | [`Kind::Other`] |
//!
//! ## Textual form
//!
//! The [`Display`](fmt::Display) impl is the value's plain text, used for the
//! raw part of a [`Literal`](crate::Literal) and for the fallback branch.
//! Structured values (`Null`, `Array`, `Object`) display as compact JSON.
//!
//! ```rust
//! use sparql_literal::{value, Value};
//!
//! assert_eq!(Value::from(42).to_string(), "42");
//! assert_eq!(Value::from("hi").to_string(), "hi");
//! assert_eq!(value!({"a": [1, true]}).to_string(), r#"{"a":[1,true]}"#);
//! ```

use crate::ser::{format_float, non_finite};
use crate::{Identifier, Iri, IriRef, Literal, PrefixedName, ToLiteral, ValueMap};
use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, TimeZone, Utc};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

// Newtype names that let `ValueSerializer` rebuild kinds serde has no slot for.
// Other serializers see through them to the inner string.
pub(crate) const BIGINT_TOKEN: &str = "$sparql_literal::private::BigInt";
pub(crate) const TIMESTAMP_TOKEN: &str = "$sparql_literal::private::Timestamp";
pub(crate) const VERBATIM_TOKEN: &str = "$sparql_literal::private::Verbatim";

/// A dynamically-typed query parameter value.
///
/// # Examples
///
/// ```rust
/// use sparql_literal::{Kind, Value};
///
/// assert_eq!(Value::from(-3i8).kind(), Kind::SignedInteger);
/// assert_eq!(Value::from(3u64).kind(), Kind::UnsignedInteger);
/// assert_eq!(Value::from(vec![0u8, 1]).kind(), Kind::Bytes);
/// assert_eq!(Value::Null.kind(), Kind::Other);
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    Signed(i128),
    BigInt(BigInt),
    Unsigned(u128),
    Float(Float),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(DateTime<FixedOffset>),
    Iri(Identifier),
    Custom(Arc<dyn ToLiteral>),
    #[default]
    Null,
    Array(Vec<Value>),
    Object(ValueMap),
}

/// A floating-point value that remembers its native precision.
///
/// Rendering uses the shortest digits that round-trip at that precision, so
/// `0.1f32` renders as `1e-01` rather than the widened `1.0000000149011612e-01`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Float {
    Single(f32),
    Double(f64),
}

impl Float {
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Float::Single(f) => f64::from(*f),
            Float::Double(f) => *f,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Float::Single(f) => f.is_finite(),
            Float::Double(f) => f.is_finite(),
        }
    }
}

/// Positional notation for decimal exponents in `-4..21`, the scientific form
/// of [`format_float`] outside it.
///
/// ```rust
/// use sparql_literal::Float;
///
/// assert_eq!(Float::Double(2.25).to_string(), "2.25");
/// assert_eq!(Float::Double(0.0001).to_string(), "0.0001");
/// assert_eq!(Float::Double(1e-7).to_string(), "1e-07");
/// assert_eq!(Float::Double(1e300).to_string(), "1e+300");
/// assert_eq!(Float::Single(f32::INFINITY).to_string(), "+Inf");
/// ```
impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_finite() {
            return f.write_str(non_finite(self.as_f64()));
        }

        let scientific = format_float(*self);
        let exponent = scientific
            .rsplit_once('e')
            .and_then(|(_, exp)| exp.parse::<i32>().ok())
            .unwrap_or(0);
        if !(-4..21).contains(&exponent) {
            return f.write_str(&scientific);
        }

        match self {
            Float::Single(v) => write!(f, "{}", v),
            Float::Double(v) => write!(f, "{}", v),
        }
    }
}

/// Classification of a [`Value`], in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    SignedInteger,
    UnsignedInteger,
    Float,
    Bool,
    Bytes,
    Text,
    Timestamp,
    Identifier,
    SelfSerializing,
    Other,
}

impl Kind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::SignedInteger => "signed_integer",
            Kind::UnsignedInteger => "unsigned_integer",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Bytes => "bytes",
            Kind::Text => "text",
            Kind::Timestamp => "timestamp",
            Kind::Identifier => "identifier",
            Kind::SelfSerializing => "self_serializing",
            Kind::Other => "other",
        }
    }
}

impl Value {
    /// Returns the dispatch class of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Signed(_) | Value::BigInt(_) => Kind::SignedInteger,
            Value::Unsigned(_) => Kind::UnsignedInteger,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Bytes(_) => Kind::Bytes,
            Value::Text(_) => Kind::Text,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::Iri(_) => Kind::Identifier,
            Value::Custom(_) => Kind::SelfSerializing,
            Value::Null | Value::Array(_) | Value::Object(_) => Kind::Other,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_iri(&self) -> bool {
        matches!(self, Value::Iri(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as `i128` for fixed-width integers that fit.
    ///
    /// ```rust
    /// use sparql_literal::Value;
    ///
    /// assert_eq!(Value::from(-7i16).as_i128(), Some(-7));
    /// assert_eq!(Value::from(7u8).as_i128(), Some(7));
    /// assert_eq!(Value::from(u128::MAX).as_i128(), None);
    /// ```
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Value::Signed(i) => Some(*i),
            Value::Unsigned(u) => i128::try_from(*u).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Wraps any self-serializing object.
    #[must_use]
    pub fn custom<T: ToLiteral + 'static>(value: T) -> Self {
        Value::Custom(Arc::new(value))
    }
}

/// Formats a timestamp at second precision, `Z` for a zero offset.
pub(crate) fn format_timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Signed(i) => write!(f, "{}", i),
            Value::BigInt(bi) => write!(f, "{}", bi),
            Value::Unsigned(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Value::Text(s) => f.write_str(s),
            Value::Timestamp(dt) => f.write_str(&format_timestamp(dt)),
            Value::Iri(id) => f.write_str(&id.iri_ref()),
            Value::Custom(custom) => f.write_str(&custom.to_literal()),
            Value::Null | Value::Array(_) | Value::Object(_) => match serde_json::to_string(self) {
                Ok(json) => f.write_str(&json),
                Err(_) => write!(f, "{:?}", self),
            },
        }
    }
}

// Custom values compare by their rendered output.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Signed(a), Value::Signed(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Iri(a), Value::Iri(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => {
                Arc::ptr_eq(a, b) || a.to_literal() == b.to_literal()
            }
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Signed(i) => serializer.serialize_i128(*i),
            Value::BigInt(bi) => {
                serializer.serialize_newtype_struct(BIGINT_TOKEN, &bi.to_string())
            }
            Value::Unsigned(u) => serializer.serialize_u128(*u),
            Value::Float(Float::Single(f)) => serializer.serialize_f32(*f),
            Value::Float(Float::Double(f)) => serializer.serialize_f64(*f),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Bytes(bytes) => serializer.serialize_bytes(bytes),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Timestamp(dt) => {
                serializer.serialize_newtype_struct(TIMESTAMP_TOKEN, &format_timestamp(dt))
            }
            Value::Iri(id) => id.serialize(serializer),
            Value::Custom(custom) => {
                serializer.serialize_newtype_struct(VERBATIM_TOKEN, &custom.to_literal())
            }
            Value::Null => serializer.serialize_unit(),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Signed(value as i128)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Unsigned(value as u128)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(Float::Single(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(Float::Double(value))
    }
}

impl From<Float> for Value {
    fn from(value: Float) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value.with_timezone(&value.offset().fix()))
    }
}

impl From<Identifier> for Value {
    fn from(value: Identifier) -> Self {
        Value::Iri(value)
    }
}

impl From<Iri> for Value {
    fn from(value: Iri) -> Self {
        Value::Iri(Identifier::Iri(value))
    }
}

impl From<PrefixedName> for Value {
    fn from(value: PrefixedName) -> Self {
        Value::Iri(Identifier::Prefixed(value))
    }
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        Value::Custom(Arc::new(value))
    }
}

impl From<Arc<dyn ToLiteral>> for Value {
    fn from(value: Arc<dyn ToLiteral>) -> Self {
        Value::Custom(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_integers() {
        assert_eq!(Value::from(i8::MIN), Value::Signed(-128));
        assert_eq!(Value::from(i128::MAX), Value::Signed(i128::MAX));
        assert_eq!(Value::from(u8::MAX), Value::Unsigned(255));
        assert_eq!(Value::from(usize::MAX), Value::Unsigned(usize::MAX as u128));
    }

    #[test]
    fn test_from_floats_keep_precision() {
        assert_eq!(Value::from(1.5f32), Value::Float(Float::Single(1.5)));
        assert_eq!(Value::from(1.5f64), Value::Float(Float::Double(1.5)));
        assert_ne!(Value::from(1.5f32), Value::from(1.5f64));
    }

    #[test]
    fn test_from_bytes_and_text() {
        assert_eq!(Value::from(&b"ab"[..]), Value::Bytes(vec![b'a', b'b']));
        assert_eq!(Value::from('x'), Value::Text("x".to_string()));
        assert_eq!(Value::from(String::from("y")).as_str(), Some("y"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(BigInt::from(9)).kind(), Kind::SignedInteger);
        assert_eq!(Value::from(0.5).kind(), Kind::Float);
        assert_eq!(Value::from(false).kind(), Kind::Bool);
        assert_eq!(Value::from("t").kind(), Kind::Text);
        assert_eq!(Value::from(Iri::new("urn:a")).kind(), Kind::Identifier);
        assert_eq!(Value::from(Literal::new("a")).kind(), Kind::SelfSerializing);
        assert_eq!(Value::Array(vec![]).kind(), Kind::Other);
        assert_eq!(Kind::SelfSerializing.as_str(), "self_serializing");
    }

    #[test]
    fn test_utc_timestamp_has_zero_offset() {
        let utc = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        match Value::from(utc) {
            Value::Timestamp(dt) => {
                assert_eq!(dt.offset().local_minus_utc(), 0);
                assert_eq!(dt.timestamp(), utc.timestamp());
            }
            other => panic!("Expected timestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_display_textual_form() {
        assert_eq!(Value::from(-12).to_string(), "-12");
        assert_eq!(Value::from(2.25f64).to_string(), "2.25");
        assert_eq!(Value::from(vec![0x68u8, 0x69]).to_string(), "hi");
        assert_eq!(Value::from(vec![0xffu8]).to_string(), "\u{FFFD}");
        assert_eq!(Value::from(PrefixedName::new("ex:a")).to_string(), "ex:a");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_display_float_switches_to_exponent_at_extremes() {
        assert_eq!(Float::Double(0.0).to_string(), "0");
        assert_eq!(Float::Double(0.0001).to_string(), "0.0001");
        assert_eq!(Float::Double(0.00001).to_string(), "1e-05");
        assert_eq!(Float::Double(1e20).to_string(), "100000000000000000000");
        assert_eq!(Float::Double(1e21).to_string(), "1e+21");
        assert_eq!(Float::Double(-1e300).to_string(), "-1e+300");
        assert_eq!(Float::Single(1e-7).to_string(), "1e-07");
        assert_eq!(Float::Single(0.1).to_string(), "0.1");
        assert_eq!(Float::Double(f64::NAN).to_string(), "NaN");
        assert_eq!(Float::Double(f64::NEG_INFINITY).to_string(), "-Inf");
    }

    #[test]
    fn test_other_serializers_see_plain_strings() {
        let ts = DateTime::parse_from_rfc3339("2023-01-02T03:04:05Z").unwrap();
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        let items = Value::from(vec![
            Value::from(big),
            Value::from(ts),
            Value::from(Literal::lang("hi", "en")),
        ]);
        assert_eq!(
            serde_json::to_string(&items).unwrap(),
            r#"["123456789012345678901234567890","2023-01-02T03:04:05Z","\"\"\"hi\"\"\"@en"]"#
        );
    }

    #[test]
    fn test_display_structured_as_json() {
        let mut map = ValueMap::new();
        map.insert("name".to_string(), Value::from("Alice"));
        map.insert("tags".to_string(), Value::from(vec![Value::from(1u8), Value::Null]));
        assert_eq!(
            Value::from(map).to_string(),
            r#"{"name":"Alice","tags":[1,null]}"#
        );
    }

    #[test]
    fn test_custom_equality_by_rendering() {
        let a = Value::from(Literal::lang("x", "en"));
        let b = Value::from(Literal::lang("x", "en"));
        let c = Value::from(Literal::lang("x", "de"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_as_helpers() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(3u32).as_i128(), Some(3));
        assert!(Value::Null.is_null());
        assert!(Value::from(Identifier::prefixed("a:b")).is_iri());
        assert!(Value::from("s").is_text());
    }
}
