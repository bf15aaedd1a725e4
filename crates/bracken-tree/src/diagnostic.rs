//! Diagnostic rendering for parse errors.

use ariadne::{Color, Label, Report, ReportKind, Source};
use bracken_tokenizer::{LexErrorKind, Span};

/// Everything that can make a parse fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    // Lexical errors
    /// Input ended inside a quoted word.
    UnterminatedQuote,
    /// Input ended right after a backslash.
    DanglingEscape,
    /// A closing quote was followed by something other than a delimiter.
    UnseparatedQuote,

    // Structural errors
    /// A `;` with no words before it.
    EmptyStatement,
    /// A `{` with no words before it.
    EmptyBlockHead,
    /// A `}` with no open block to close.
    UnmatchedCloseBrace,
    /// Input ended with a block still open.
    UnclosedBlock,
    /// Words with neither a `;` nor a `{` after them.
    UnterminatedStatement,
    /// The document contains no statements.
    EmptyDocument,
}

impl From<LexErrorKind> for ParseErrorKind {
    fn from(kind: LexErrorKind) -> Self {
        match kind {
            LexErrorKind::UnterminatedQuote => ParseErrorKind::UnterminatedQuote,
            LexErrorKind::DanglingEscape => ParseErrorKind::DanglingEscape,
            LexErrorKind::UnseparatedQuote => ParseErrorKind::UnseparatedQuote,
        }
    }
}

/// A parse error with source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Source location.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with
    /// source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range = self.span.start as usize..self.span.end as usize;

        match self.kind {
            ParseErrorKind::UnterminatedQuote => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("unterminated quoted word")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("quote opened here is never closed")
                            .with_color(Color::Red),
                    )
                    .with_help("add the matching closing quote")
            }

            ParseErrorKind::DanglingEscape => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("escape at end of input")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("the trailing backslash has nothing to escape")
                            .with_color(Color::Red),
                    )
            }

            ParseErrorKind::UnseparatedQuote => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("missing separator after quoted word")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("the closing quote runs into more text")
                            .with_color(Color::Red),
                    )
                    .with_help("a closing quote must be followed by whitespace, ';', '{', '}', or '#'")
            }

            ParseErrorKind::EmptyStatement => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("statement has no words")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("';' with nothing before it")
                            .with_color(Color::Red),
                    )
                    .with_help("every statement needs at least one word before ';'")
            }

            ParseErrorKind::EmptyBlockHead => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("block has no head")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("'{' with nothing before it")
                            .with_color(Color::Red),
                    )
                    .with_help("name the block, e.g. `server {`")
            }

            ParseErrorKind::UnmatchedCloseBrace => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("unmatched '}'")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("no block is open here")
                            .with_color(Color::Red),
                    )
            }

            ParseErrorKind::UnclosedBlock => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("unclosed block")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("block opened here")
                            .with_color(Color::Red),
                    )
                    .with_help("add a closing '}'")
            }

            ParseErrorKind::UnterminatedStatement => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("statement is missing its terminator")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("these words are never terminated")
                            .with_color(Color::Red),
                    )
                    .with_help("end the statement with ';' or open a block with '{'")
            }

            ParseErrorKind::EmptyDocument => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message("empty document")
                    .with_label(
                        Label::new((filename, range))
                            .with_message("no statements here")
                            .with_color(Color::Red),
                    )
                    .with_help("a configuration must contain at least one statement")
            }
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ParseErrorKind::UnterminatedQuote => write!(f, "unterminated quoted word"),
            ParseErrorKind::DanglingEscape => write!(f, "escape at end of input"),
            ParseErrorKind::UnseparatedQuote => write!(f, "missing separator after quoted word"),
            ParseErrorKind::EmptyStatement => write!(f, "statement has no words"),
            ParseErrorKind::EmptyBlockHead => write!(f, "block has no head"),
            ParseErrorKind::UnmatchedCloseBrace => write!(f, "unmatched '}}'"),
            ParseErrorKind::UnclosedBlock => write!(f, "unclosed block"),
            ParseErrorKind::UnterminatedStatement => {
                write!(f, "statement is missing its terminator")
            }
            ParseErrorKind::EmptyDocument => write!(f, "empty document"),
        }?;
        write!(f, " at offset {}", self.span.start)
    }
}

impl std::error::Error for ParseError {}

/// Error from the file-backed entry point.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The contents did not parse.
    Parse(ParseError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "could not read configuration: {}", err),
            LoadError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ParseError> for LoadError {
    fn from(err: ParseError) -> Self {
        LoadError::Parse(err)
    }
}
