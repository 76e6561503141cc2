//! The INI dialect understood by this crate.
//!
//! # Grammar
//!
//! ```text
//! file      := (blankline | comment | header | keyvalue)*
//! header    := "[" name "]"          ; name = one or more chars except "]"
//! comment   := ";" text              ; text = one or more chars, kept verbatim
//! keyvalue  := key "=" value         ; key = [A-Za-z0-9_]+, value = rest of line
//! ```
//!
//! One directive per line. There is no escaping, no line continuation and no
//! encoding declaration.
//!
//! ## Headers
//!
//! The whole line must be bracketed: `[Server]` opens a section, ` [Server]` and
//! `[Server] ; note` do not. Opening a section that already exists reopens it; its
//! keys merge into the same [`Section`](crate::Section) while the layout keeps both
//! occurrences.
//!
//! ## Key-value pairs
//!
//! Only the first `=` separates key from value, so `url=a=b` stores `a=b`.
//! Whitespace around that `=` is dropped, whitespace anywhere else is kept:
//!
//! ```text
//! name  =  hello world     ; value "hello world"
//! path=C:\temp             ; value "C:\temp"
//! ```
//!
//! ## Comments
//!
//! A comment belongs to the section open at that point, or to the pre-section
//! block if no header has been seen. On save, a section's comments are written
//! right under its header, so comments placed between keys move to the top of
//! their section.
//!
//! ## Invalid lines
//!
//! Blank lines, lone `;`, and anything else that fits none of the rules above are
//! reported as [`ParseWarning`](crate::ParseWarning)s. A key-value line before the
//! first header is also invalid unless
//! [`NoSection::Implicit`](crate::NoSection::Implicit) is enabled.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]$").expect("section header pattern is valid"));

pub(crate) static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^;(.+)$").expect("comment pattern is valid"));

pub(crate) static KEY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*(.+)$").expect("key-value pattern is valid")
});

static KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("key pattern is valid"));

/// Returns `true` if `key` can appear on the left of `key=value`.
pub(crate) fn is_valid_key(key: &str) -> bool {
    KEY.is_match(key)
}

/// Returns why `name` cannot be written as `[name]`, if it cannot.
pub(crate) fn section_name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("section names cannot be empty")
    } else if name.contains(']') {
        Some("section names cannot contain ']'")
    } else if name.contains(['\n', '\r']) {
        Some("section names cannot contain line breaks")
    } else {
        None
    }
}
