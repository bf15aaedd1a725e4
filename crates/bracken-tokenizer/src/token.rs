//! Token types for the Bracken tokenizer.

use crate::Span;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural tokens
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,

    /// A word: bare, quoted, or containing escapes. `text` is the raw
    /// source slice; decoding happens downstream.
    Word,

    // Trivia tokens
    /// `#` through end of line.
    Comment,
    /// Spaces, tabs, carriage returns, newlines.
    Whitespace,

    // Special tokens
    /// End of input.
    Eof,
    /// Lexical error.
    Error(LexErrorKind),
}

/// Why a stretch of input failed to tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Input ended inside a quoted word.
    UnterminatedQuote,
    /// Input ended right after a backslash.
    DanglingEscape,
    /// A closing quote was followed by something other than whitespace,
    /// `{`, `}`, `;`, or `#`.
    UnseparatedQuote,
}

impl TokenKind {
    /// Whether this token is trivia (whitespace or comments).
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// A token with its kind, span, and source text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span in the source text.
    pub span: Span,
    /// The source text of this token.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: &'src str) -> Self {
        Self { kind, span, text }
    }
}
