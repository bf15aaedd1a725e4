//! Configuration tree for the Bracken configuration format.
//!
//! Bracken documents are sequences of statements. A statement is one or
//! more words and is either terminated by `;` or followed by a `{ ... }`
//! block holding a nested sequence of statements:
//!
//! ```text
//! worker_processes 4;
//! server {
//!     listen 8080;
//!     location / {
//!         root /srv/html;
//!     }
//! }
//! ```
//!
//! [`parse`] turns a source string into a [`Config`]; [`parse_file`] does
//! the same for a file on disk. Parsing either succeeds with a complete
//! tree or fails with a [`ParseError`] — there is no partial result.

mod diagnostic;
mod parser;
mod value;
mod word;

pub use bracken_tokenizer::Span;
pub use diagnostic::{LoadError, ParseError, ParseErrorKind};
pub use parser::Parser;
pub use value::{Config, Statement};
pub use word::word_value;

use std::path::Path;

/// Parse a Bracken document into a configuration tree.
pub fn parse(source: &str) -> Result<Config, ParseError> {
    Parser::new(source).parse()
}

/// Read a file and parse it as a Bracken document.
///
/// An unreadable file is reported as [`LoadError::Io`]; invalid contents
/// as [`LoadError::Parse`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Config, LoadError> {
    let source = std::fs::read_to_string(path)?;
    Ok(parse(&source)?)
}
