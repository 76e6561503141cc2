//! Dynamic value representation for INI entries.
//!
//! Every entry in a [`Section`](crate::Section) holds a [`Value`]. Values read from
//! text are coerced once, at parse time, with a fixed precedence:
//!
//! 1. text that is a number literal becomes a [`Number`],
//! 2. exactly `true` or `false` becomes a boolean,
//! 3. anything else is kept verbatim as a string (including any `=` after the first).
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use ini_roundtrip::{Number, Value};
//!
//! let number = Value::from(42);
//! let flag = Value::from(true);
//! let text = Value::from("hello");
//!
//! assert_eq!(Value::coerce("2.75"), Value::Number(Number::Float(2.75)));
//! assert_eq!(Value::coerce("false"), Value::Bool(false));
//! assert_eq!(Value::coerce("some=data"), Value::from("some=data"));
//! ```
//!
//! ### Custom Values
//!
//! Anything else can be stored through the [`Stringable`] capability; it is written
//! out with its own text conversion and reads back as whatever that text coerces to.
//!
//! ```rust
//! use ini_roundtrip::{Stringable, Value};
//!
//! #[derive(Debug)]
//! struct Version(u32, u32);
//!
//! impl Stringable for Version {
//!     fn to_ini_string(&self) -> String {
//!         format!("v{}.{}", self.0, self.1)
//!     }
//! }
//!
//! let value = Value::custom(Version(1, 4));
//! assert_eq!(value.to_string(), "v1.4");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A deterministic text conversion for values that are not numbers, booleans or strings.
///
/// This is the only supported way to write arbitrary objects into a section. The
/// text must be non-empty and free of line breaks, otherwise saving fails with
/// [`Error::InvalidValue`](crate::Error::InvalidValue).
pub trait Stringable: fmt::Debug + Send + Sync {
    fn to_ini_string(&self) -> String;
}

/// The value of a single INI entry.
///
/// # Examples
///
/// ```rust
/// use ini_roundtrip::{Number, Value};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert_eq!(num.to_string(), "42");
/// ```
#[derive(Clone, Debug)]
pub enum Value {
    Number(Number),
    Bool(bool),
    String(String),
    Custom(Arc<dyn Stringable>),
}

/// A numeric value, either integral or floating point.
///
/// # Examples
///
/// ```rust
/// use ini_roundtrip::Number;
///
/// assert_eq!(Number::parse_literal("42"), Some(Number::Integer(42)));
/// assert_eq!(Number::parse_literal("0x1F"), Some(Number::Integer(31)));
/// assert_eq!(Number::parse_literal("2.5e3"), Some(Number::Float(2500.0)));
/// assert_eq!(Number::parse_literal("inf"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Parses a number literal, ignoring surrounding whitespace.
    ///
    /// Accepts decimal integers, hexadecimal integers (`0x1F`, optionally signed) and
    /// decimal floats with an optional exponent. Words such as `inf` or `NaN` are not
    /// number literals and stay strings.
    #[must_use]
    pub fn parse_literal(text: &str) -> Option<Number> {
        let text = text.trim();
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        if let Some(hex) = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
        {
            if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let magnitude = i64::from_str_radix(hex, 16).ok()?;
            return Some(Number::Integer(if negative { -magnitude } else { magnitude }));
        }

        let well_formed = unsigned.bytes().any(|b| b.is_ascii_digit())
            && unsigned
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
        if !well_formed {
            return None;
        }

        if let Ok(i) = text.parse::<i64>() {
            return Some(Number::Integer(i));
        }
        text.parse::<f64>().ok().map(Number::Float)
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it has no fractional part and fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_roundtrip::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // `{:?}` keeps the ".0" on whole floats so they read back as floats
            Number::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Float(value as f64),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    /// Applies the parse-time coercion rule to raw value text.
    ///
    /// Number literals win over booleans, booleans over strings. Strings are kept
    /// verbatim, whitespace included.
    #[must_use]
    pub fn coerce(raw: &str) -> Value {
        if let Some(number) = Number::parse_literal(raw) {
            return Value::Number(number);
        }
        match raw {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(raw.to_string()),
        }
    }

    /// Wraps any [`Stringable`] object.
    pub fn custom<T: Stringable + 'static>(value: T) -> Value {
        Value::Custom(Arc::new(value))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Value::Custom(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_roundtrip::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from("true").as_bool(), None);
    /// ```
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
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }
}

/// Writes the value the way it appears on the right-hand side of `key=value`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => f.write_str(s),
            Value::Custom(c) => f.write_str(&c.to_ini_string()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a.to_ini_string() == b.to_ini_string(),
            _ => false,
        }
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::String(s) => serializer.serialize_str(s),
            Value::Custom(c) => serializer.serialize_str(&c.to_ini_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, boolean or string")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {:?}", value)))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {:?}", value)))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| crate::Error::custom(format!("expected boolean, found {:?}", value)))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                other
            ))),
        }
    }
}
