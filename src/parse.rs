//! INI parsing.
//!
//! This module provides the [`Parser`] that turns a sequence of lines into a
//! [`ParseResult`]. Parsing never fails: a line that is not a section header,
//! comment or key-value pair in an open section becomes a [`ParseWarning`] and the
//! parser moves on.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use ini_roundtrip::{parse, Value};
//!
//! let result = parse(["[Test]", "Value=some=data", "Flag=true"]);
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.document.get("Test", "Value"), Some(&Value::from("some=data")));
//! ```
//!
//! ## Incremental Parsing
//!
//! ```rust
//! use ini_roundtrip::{IniOptions, Parser};
//!
//! let mut parser = Parser::new(IniOptions::new());
//! parser.parse_line("[Server]");
//! parser.parse_line("port=8080");
//! let result = parser.finish();
//! assert_eq!(result.metadata.section_order()[0].keys, vec!["port"]);
//! ```

use crate::document::{CommentOwner, Metadata, ParseResult};
use crate::grammar::{COMMENT, KEY_VALUE, SECTION_HEADER};
use crate::options::IMPLICIT_SECTION;
use crate::{Document, IniOptions, ParseWarning, Value};

/// A line-by-line INI parser.
///
/// Feed lines with [`Parser::parse_line`] (without their trailing newline) and
/// collect the result with [`Parser::finish`].
pub struct Parser {
    options: IniOptions,
    document: Document,
    metadata: Metadata,
    warnings: Vec<ParseWarning>,
    current: Option<String>,
    line: usize,
}

impl Parser {
    pub fn new(options: IniOptions) -> Self {
        Parser {
            options,
            document: Document::new(),
            metadata: Metadata::default(),
            warnings: Vec::new(),
            current: None,
            line: 0,
        }
    }

    /// Classifies one line and records its effect.
    ///
    /// A header is exclusive. Comment and key-value matching are independent tests;
    /// the line is reported only if neither had an effect.
    pub fn parse_line(&mut self, line: &str) {
        self.line += 1;

        if let Some(caps) = SECTION_HEADER.captures(line) {
            self.open_section(&caps[1]);
            return;
        }

        let mut consumed = false;

        if let Some(caps) = COMMENT.captures(line) {
            // The header-less section has no header to keep its comments under.
            let owner = match &self.current {
                Some(name) if !self.options.is_headerless(name) => {
                    CommentOwner::Section(name.clone())
                }
                _ => CommentOwner::PreSection,
            };
            self.metadata.add_comment(owner, &caps[1]);
            consumed = true;
        }

        if let Some(caps) = KEY_VALUE.captures(line) {
            consumed |= self.insert_entry(&caps[1], &caps[2]);
        }

        if !consumed {
            tracing::debug!("Line {}: ignoring unclassified input", self.line);
            self.warnings.push(ParseWarning::new(self.line, line));
        }
    }

    /// Consumes the parser and returns the document, its layout and all warnings.
    pub fn finish(self) -> ParseResult {
        tracing::debug!(
            "Parsed {} lines into {} sections with {} warnings",
            self.line,
            self.document.len(),
            self.warnings.len()
        );
        ParseResult {
            document: self.document,
            metadata: self.metadata,
            warnings: self.warnings,
            options: self.options,
        }
    }

    fn open_section(&mut self, name: &str) {
        self.document.ensure_section(name);
        self.metadata.open_section(name);
        self.current = Some(name.to_string());
    }

    /// Stores `key=raw` in the open section. Returns `false` if there is nowhere to put it.
    fn insert_entry(&mut self, key: &str, raw: &str) -> bool {
        if self.current.is_none() {
            if !self.options.no_section.is_implicit() {
                return false;
            }
            self.open_section(IMPLICIT_SECTION);
        }

        let Some(section) = self.current.as_deref() else {
            return false;
        };
        self.document
            .ensure_section(section)
            .insert(key, Value::coerce(raw));
        self.metadata.record_key(key);
        true
    }
}
