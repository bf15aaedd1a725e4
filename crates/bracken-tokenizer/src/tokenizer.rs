//! Tokenizer for the Bracken configuration format.

use crate::{LexErrorKind, Span, Token, TokenKind};
use tracing::trace;

/// Characters that end a bare word. A closing quote must be followed by
/// one of these (or end of input).
fn is_delimiter(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '{' | '}' | ';' | '#')
}

/// A tokenizer that produces tokens from Bracken source text.
#[derive(Clone)]
pub struct Tokenizer<'src> {
    /// The source text being tokenized.
    source: &'src str,
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Current byte position in `source`.
    pos: u32,
}

/// Mode of the word scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    /// Outside quotes.
    Bare,
    /// Inside a quote opened by the given character.
    Quoted(char),
    /// Right after a backslash; `quote` is the enclosing quote, if any.
    Escaped { quote: Option<char> },
    /// Right after the closing quote of a quoted word.
    QuoteClosed,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            remaining: source,
            pos: 0,
        }
    }

    /// Get the current byte position.
    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Check if we're at the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Advance by one character.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8() as u32;
        self.remaining = &self.remaining[c.len_utf8()..];
        Some(c)
    }

    /// Create a token from the given start position to current position.
    fn token(&self, kind: TokenKind, start: u32) -> Token<'src> {
        let span = Span::new(start, self.pos);
        let text = span.slice(self.source);
        trace!("Token {:?} at {:?}: {:?}", kind, span, text);
        Token::new(kind, span, text)
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.is_eof() {
            return self.token(TokenKind::Eof, self.pos);
        }

        let start = self.pos;
        let c = self.peek().unwrap();

        match c {
            // Structural tokens; these also end an adjacent word, which
            // `scan_word` handles by stopping in front of them.
            '{' => {
                self.advance();
                self.token(TokenKind::LBrace, start)
            }
            '}' => {
                self.advance();
                self.token(TokenKind::RBrace, start)
            }
            ';' => {
                self.advance();
                self.token(TokenKind::Semicolon, start)
            }

            // Comment
            '#' => self.scan_comment(),

            // Whitespace
            c if c.is_ascii_whitespace() => self.scan_whitespace(),

            // Everything else starts a word
            _ => self.scan_word(),
        }
    }

    /// Scan a run of whitespace.
    fn scan_whitespace(&mut self) -> Token<'src> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        self.token(TokenKind::Whitespace, start)
    }

    /// Scan a comment: `#` through end of line (newline excluded).
    fn scan_comment(&mut self) -> Token<'src> {
        let start = self.pos;

        // Consume `#`
        self.advance();

        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }

        self.token(TokenKind::Comment, start)
    }

    /// Scan a word, tracking quote and escape state.
    ///
    /// The token text is the raw source slice: surrounding quotes and
    /// escaping backslashes are kept for the consumer to decode.
    fn scan_word(&mut self) -> Token<'src> {
        let start = self.pos;

        let mut state = match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.advance();
                WordState::Quoted(q)
            }
            _ => WordState::Bare,
        };

        loop {
            match (state, self.peek()) {
                (WordState::Bare, None) => break,
                (WordState::Bare, Some(c)) if is_delimiter(c) => break,
                (WordState::Bare, Some('\\')) => {
                    self.advance();
                    state = WordState::Escaped { quote: None };
                }
                (WordState::Bare, Some(_)) => {
                    self.advance();
                }

                (WordState::Quoted(_), None) => {
                    return self.token(TokenKind::Error(LexErrorKind::UnterminatedQuote), start);
                }
                (WordState::Quoted(q), Some(c)) if c == q => {
                    self.advance();
                    state = WordState::QuoteClosed;
                }
                (WordState::Quoted(q), Some('\\')) => {
                    self.advance();
                    state = WordState::Escaped { quote: Some(q) };
                }
                (WordState::Quoted(_), Some(_)) => {
                    self.advance();
                }

                (WordState::Escaped { .. }, None) => {
                    return self.token(TokenKind::Error(LexErrorKind::DanglingEscape), start);
                }
                (WordState::Escaped { quote }, Some(_)) => {
                    self.advance();
                    state = match quote {
                        Some(q) => WordState::Quoted(q),
                        None => WordState::Bare,
                    };
                }

                (WordState::QuoteClosed, None) => break,
                (WordState::QuoteClosed, Some(c)) if is_delimiter(c) => break,
                (WordState::QuoteClosed, Some(_)) => {
                    self.advance();
                    return self.token(TokenKind::Error(LexErrorKind::UnseparatedQuote), start);
                }
            }
        }

        self.token(TokenKind::Word, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect (kind, text) pairs until Eof or the first error token.
    fn tokens(source: &str) -> Vec<(TokenKind, &str)> {
        let mut tokenizer = Tokenizer::new(source);
        let mut out = Vec::new();
        loop {
            let token = tokenizer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            let is_error = matches!(token.kind, TokenKind::Error(_));
            out.push((token.kind, token.text));
            if is_error {
                break;
            }
        }
        out
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokens(source).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = Tokenizer::new("");
        let token = tokenizer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.span, Span::empty(0));
        // Polling past the end keeps returning Eof.
        assert_eq!(tokenizer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            tokens("foo bar;"),
            vec![
                (TokenKind::Word, "foo"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "bar"),
                (TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_braces_end_adjacent_words() {
        assert_eq!(
            tokens("server{x}"),
            vec![
                (TokenKind::Word, "server"),
                (TokenKind::LBrace, "{"),
                (TokenKind::Word, "x"),
                (TokenKind::RBrace, "}"),
            ]
        );
    }

    #[test]
    fn test_semicolon_ends_adjacent_word() {
        assert_eq!(
            kinds("a;b"),
            vec![TokenKind::Word, TokenKind::Semicolon, TokenKind::Word]
        );
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            tokens("# note\nfoo"),
            vec![
                (TokenKind::Comment, "# note"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Word, "foo"),
            ]
        );
    }

    #[test]
    fn test_comment_ends_adjacent_word() {
        assert_eq!(
            tokens("foo#bar"),
            vec![(TokenKind::Word, "foo"), (TokenKind::Comment, "#bar")]
        );
    }

    #[test]
    fn test_quoted_word_keeps_raw_text() {
        assert_eq!(
            tokens("\"a b;{}#\" c"),
            vec![
                (TokenKind::Word, "\"a b;{}#\""),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "c"),
            ]
        );
    }

    #[test]
    fn test_single_quoted_word() {
        assert_eq!(tokens("'a \"b'"), vec![(TokenKind::Word, "'a \"b'")]);
    }

    #[test]
    fn test_quote_inside_bare_word_is_literal() {
        assert_eq!(tokens("don't"), vec![(TokenKind::Word, "don't")]);
    }

    #[test]
    fn test_escape_keeps_word_going() {
        assert_eq!(
            tokens(r"foo\;bar\ baz;"),
            vec![
                (TokenKind::Word, r"foo\;bar\ baz"),
                (TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_inside_quotes() {
        assert_eq!(tokens(r#""a\"b""#), vec![(TokenKind::Word, r#""a\"b""#)]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            kinds("\"abc"),
            vec![TokenKind::Error(LexErrorKind::UnterminatedQuote)]
        );
    }

    #[test]
    fn test_dangling_escape_in_bare_word() {
        assert_eq!(
            kinds("abc\\"),
            vec![TokenKind::Error(LexErrorKind::DanglingEscape)]
        );
    }

    #[test]
    fn test_dangling_escape_inside_quotes() {
        assert_eq!(
            kinds("\"abc\\"),
            vec![TokenKind::Error(LexErrorKind::DanglingEscape)]
        );
    }

    #[test]
    fn test_closing_quote_needs_separator() {
        assert_eq!(
            kinds("\"a\"b"),
            vec![TokenKind::Error(LexErrorKind::UnseparatedQuote)]
        );
    }

    #[test]
    fn test_closing_quote_before_delimiter_is_fine() {
        assert_eq!(
            kinds("\"a\";"),
            vec![TokenKind::Word, TokenKind::Semicolon]
        );
        assert_eq!(kinds("\"a\"{"), vec![TokenKind::Word, TokenKind::LBrace]);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let mut tokenizer = Tokenizer::new("ab {");
        let word = tokenizer.next_token();
        assert_eq!(word.span, Span::new(0, 2));
        let ws = tokenizer.next_token();
        assert_eq!(ws.span, Span::new(2, 3));
        let brace = tokenizer.next_token();
        assert_eq!(brace.span, Span::new(3, 4));
        assert_eq!(brace.span.slice("ab {"), "{");
    }
}
