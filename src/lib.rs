//! # ini_roundtrip
//!
//! A round-trip preserving codec for INI configuration files.
//!
//! ## What does round-trip preserving mean?
//!
//! Most INI libraries read a file into a map and write the map back out, losing the
//! order of sections and keys and every comment on the way. This crate records how
//! the input was laid out while parsing, and uses that record when saving:
//!
//! - an unmodified document saves back to the text it was parsed from, as long as
//!   that text is already in the saved layout (one `key=value` per line, canonical
//!   numbers, a blank line after each section);
//! - removing a key or section removes exactly its lines;
//! - added keys land at the end of their section, added sections at the end of the
//!   file;
//! - comments stay with the section they were written in.
//!
//! ## Key Features
//!
//! - **Layout Preservation**: section order, key order, reopened sections and comments
//! - **Typed Values**: numbers, booleans and strings, coerced once at parse time
//! - **Forgiving Parser**: bad lines become warnings, never a failed parse
//! - **Serde Bridge**: read a document straight into your own config structs
//! - **Pluggable Storage**: files, memory, or your own [`LineSource`]/[`LineSink`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_roundtrip::{from_str, Value};
//!
//! let text = "; Generated by setup\n\n[Server]\nhost=localhost\nport=8080\n";
//! let mut result = from_str(text);
//! assert_eq!(result.warnings.len(), 1); // the blank line
//!
//! // Untouched documents in the saved layout come back byte for byte
//! assert_eq!(result.save().unwrap(), text);
//!
//! // Edits produce minimal diffs
//! result.document.set("Server", "port", 9090);
//! result.document.set("Server", "tls", true);
//! assert_eq!(
//!     result.save().unwrap(),
//!     "; Generated by setup\n\n[Server]\nhost=localhost\nport=9090\ntls=true\n"
//! );
//! ```
//!
//! ### Warnings
//!
//! ```rust
//! use ini_roundtrip::from_str;
//!
//! let result = from_str("orphan=1\n[A]\nkey = value");
//! assert_eq!(result.warning_messages(), vec!["Line 1: Invalid data found 'orphan=1'"]);
//! ```
//!
//! ### Building Documents
//!
//! ```rust
//! use ini_roundtrip::{ini, save};
//!
//! let doc = ini! { "Window" => { "width" => 800, "fullscreen" => false } };
//! assert_eq!(save(&doc, None).unwrap(), "[Window]\nwidth=800\nfullscreen=false\n");
//! ```
//!
//! ## Known Limitations
//!
//! - Comments written between keys move to the top of their section on save.
//! - Layout metadata is fixed at parse time; new keys and sections never carry
//!   comments.
//! - Blank lines are not part of the grammar. They are reported as warnings and
//!   regenerated on save as one blank line after each section.
//! - Numbers are saved in canonical form (`007` as `7`, `0xff` as `255`, `1e3` as
//!   `1000.0`) and spaces around `=` are dropped.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parse, inspect and save
//! - **`edit_in_place.rs`** - editing a file while keeping its layout
//! - **`typed_config.rs`** - reading a document into config structs
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod document;
pub mod error;
pub mod grammar;
pub mod io;
pub mod macros;
pub mod options;
pub mod parse;
pub mod section;
pub mod ser;
pub mod value;

pub use de::from_document;
pub use document::{CommentOwner, Document, Metadata, ParseResult, SectionOrder};
pub use error::{Error, ParseWarning, Result};
pub use io::{FileStore, LineSink, LineSource, MemoryStore};
pub use options::{IniOptions, NoSection, IMPLICIT_SECTION};
pub use parse::Parser;
pub use section::Section;
pub use ser::Serializer;
pub use value::{Number, Stringable, Value};

use std::io as stdio;

/// Parses a sequence of lines (without trailing newlines) with default options.
///
/// # Examples
///
/// ```rust
/// use ini_roundtrip::parse;
///
/// let result = parse(["[Test]", "Value1=true"]);
/// assert_eq!(result.document.get("Test", "Value1").and_then(|v| v.as_bool()), Some(true));
/// ```
#[must_use]
pub fn parse<I, S>(lines: I) -> ParseResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with_options(lines, &IniOptions::default())
}

/// Parses a sequence of lines with custom options.
#[must_use]
pub fn parse_with_options<I, S>(lines: I, options: &IniOptions) -> ParseResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new(options.clone());
    for line in lines {
        parser.parse_line(line.as_ref());
    }
    parser.finish()
}

/// Parses INI text, splitting it on `\n` or `\r\n`.
///
/// A single trailing newline does not produce an extra (blank) line.
#[must_use]
pub fn from_str(text: &str) -> ParseResult {
    from_str_with_options(text, &IniOptions::default())
}

#[must_use]
pub fn from_str_with_options(text: &str, options: &IniOptions) -> ParseResult {
    parse_with_options(text.lines(), options)
}

/// Reads everything from `reader` and parses it.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not valid UTF-8.
pub fn from_reader<R>(mut reader: R, options: &IniOptions) -> Result<ParseResult>
where
    R: stdio::Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io("<reader>", e))?;
    Ok(from_str_with_options(&text, options))
}

/// Serializes a document with default options.
///
/// Pass the [`Metadata`] from the parse that produced the document to keep its
/// layout; with `None`, sections and keys are written in document order without
/// comments.
///
/// # Errors
///
/// Returns an error if a section name, key or value cannot be written as INI.
pub fn save(document: &Document, metadata: Option<&Metadata>) -> Result<String> {
    save_with_options(document, metadata, &IniOptions::default())
}

/// Serializes a document with custom options.
///
/// # Errors
///
/// Returns an error if a section name, key or value cannot be written as INI.
pub fn save_with_options(
    document: &Document,
    metadata: Option<&Metadata>,
    options: &IniOptions,
) -> Result<String> {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize(document, metadata)?;
    Ok(serializer.into_inner())
}

/// Serializes a document into `writer`.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
pub fn to_writer<W>(
    mut writer: W,
    document: &Document,
    metadata: Option<&Metadata>,
    options: &IniOptions,
) -> Result<()>
where
    W: stdio::Write,
{
    let text = save_with_options(document, metadata, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io("<writer>", e))
}

/// Reads the lines stored under `name` and parses them.
///
/// # Errors
///
/// Returns [`Error::Io`] if the source cannot provide the lines.
pub fn load<S>(source: &S, name: &str, options: &IniOptions) -> Result<ParseResult>
where
    S: LineSource + ?Sized,
{
    let lines = source.read_lines(name)?;
    Ok(parse_with_options(lines, options))
}

/// Serializes a document and hands the text to `sink` under `name`.
///
/// # Errors
///
/// Returns an error if serialization fails or the sink cannot store the text.
pub fn store<K>(
    sink: &mut K,
    name: &str,
    document: &Document,
    metadata: Option<&Metadata>,
    options: &IniOptions,
) -> Result<()>
where
    K: LineSink + ?Sized,
{
    let text = save_with_options(document, metadata, options)?;
    sink.write_text(name, &text)
}
