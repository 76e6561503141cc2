//! Error and warning types for INI parsing and serialization.
//!
//! The codec distinguishes two tiers of problems:
//!
//! - **Fatal errors** ([`Error`]): the operation is aborted. Reading a source or
//!   writing a sink failed, or the document holds content the INI grammar cannot
//!   carry (a section name with `]`, a key with spaces, a value with a line break).
//! - **Warnings** ([`ParseWarning`]): a single input line could not be classified.
//!   Parsing continues and the warning is reported alongside the document.
//!
//! ## Examples
//!
//! ```rust
//! use ini_roundtrip::from_str;
//!
//! let result = from_str("[Server]\nport=8080\nthis is not ini");
//! assert_eq!(result.warnings.len(), 1);
//! assert_eq!(
//!     result.warnings[0].to_string(),
//!     "Line 3: Invalid data found 'this is not ini'"
//! );
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all fatal errors that can occur while loading or saving INI data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Reading from a line source or writing to a sink failed
    #[error("IO error on '{name}': {msg}")]
    Io { name: String, msg: String },

    /// Section name cannot be written as a `[name]` header
    #[error("Invalid section name '{name}': {reason}")]
    InvalidSection { name: String, reason: String },

    /// Key cannot be written as the left-hand side of `key=value`
    #[error("Invalid key '{key}' in section '{section}': keys may only contain [A-Za-z0-9_]")]
    InvalidKey { section: String, key: String },

    /// Value is empty or would span more than one line
    #[error("Invalid value for '{key}' in section '{section}': values must be non-empty and fit on one line")]
    InvalidValue { section: String, key: String },

    /// Custom error, mostly raised through the serde bridge
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for the named source or sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_roundtrip::Error;
    ///
    /// let err = Error::io("settings.ini", "permission denied");
    /// assert!(err.to_string().contains("settings.ini"));
    /// ```
    pub fn io<T: fmt::Display>(name: &str, msg: T) -> Self {
        Error::Io {
            name: name.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an error for a section name that cannot be used as a header.
    pub fn invalid_section(name: &str, reason: &str) -> Self {
        Error::InvalidSection {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an error for a key outside the `[A-Za-z0-9_]+` alphabet.
    pub fn invalid_key(section: &str, key: &str) -> Self {
        Error::InvalidKey {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates an error for a value whose text contains a line break.
    pub fn invalid_value(section: &str, key: &str) -> Self {
        Error::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_roundtrip::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A line the parser could not classify as a header, comment or key-value pair.
///
/// Warnings never abort parsing. The `Display` form is the human-readable message
/// callers usually log or show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line}: Invalid data found '{content}'")]
pub struct ParseWarning {
    /// 1-based line number
    pub line: usize,
    /// The offending line, verbatim
    pub content: String,
}

impl ParseWarning {
    pub fn new(line: usize, content: &str) -> Self {
        ParseWarning {
            line,
            content: content.to_string(),
        }
    }
}
