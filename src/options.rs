//! Configuration options for INI parsing and serialization.
//!
//! The only behavior switch is the "no section" compatibility mode, which decides
//! what happens to key-value lines that appear before the first `[Section]` header.
//! Options are passed explicitly to every call; there is no process-wide state.
//!
//! ## Examples
//!
//! ```rust
//! use ini_roundtrip::{from_str_with_options, IniOptions, NoSection, IMPLICIT_SECTION};
//!
//! let options = IniOptions::new().with_no_section(NoSection::Implicit);
//! let result = from_str_with_options("debug=true\n[Server]\nport=80", &options);
//!
//! assert!(result.warnings.is_empty());
//! assert_eq!(
//!     result.document.get(IMPLICIT_SECTION, "debug").and_then(|v| v.as_bool()),
//!     Some(true)
//! );
//! ```

/// Name of the reserved section that collects header-less entries in
/// [`NoSection::Implicit`] mode. It is never written as a `[...]` header in that mode.
pub const IMPLICIT_SECTION: &str = "__implicit__";

/// How key-value lines before the first section header are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NoSection {
    /// The line is rejected and reported as a warning.
    #[default]
    Reject,
    /// The line is attached to [`IMPLICIT_SECTION`].
    Implicit,
}

impl NoSection {
    #[must_use]
    pub const fn is_implicit(self) -> bool {
        matches!(self, NoSection::Implicit)
    }
}

/// Configuration for [`parse_with_options`](crate::parse_with_options) and
/// [`save_with_options`](crate::save_with_options).
///
/// Use the same options for both directions: a document parsed in implicit mode
/// should be saved in implicit mode, otherwise the reserved section comes back as a
/// regular `[__implicit__]` block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniOptions {
    pub no_section: NoSection,
}

impl IniOptions {
    /// Creates default options (header-less key-value lines are rejected).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_roundtrip::{IniOptions, NoSection};
    ///
    /// let options = IniOptions::new();
    /// assert_eq!(options.no_section, NoSection::Reject);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_no_section(mut self, no_section: NoSection) -> Self {
        self.no_section = no_section;
        self
    }

    /// Returns `true` if `name` is the reserved section that is written without a header.
    #[must_use]
    pub fn is_headerless(&self, name: &str) -> bool {
        self.no_section.is_implicit() && name == IMPLICIT_SECTION
    }
}
