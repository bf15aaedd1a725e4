//! Stack-driven parser building configuration trees from tokens.

use bracken_tokenizer::{Span, Token, TokenKind, Tokenizer};
use tracing::trace;

use crate::diagnostic::{ParseError, ParseErrorKind};
use crate::value::{Config, Statement};
use crate::word::word_value;

/// Parser for Bracken documents.
///
/// Holds all parse state itself; every [`Parser::parse`] call starts from
/// a fresh instance, so separate parses never share anything.
pub struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
    /// Open blocks, innermost last.
    stack: Vec<BlockFrame>,
    /// Statements collected at the top level.
    root: Vec<Statement>,
    /// Words of the statement being accumulated.
    pending: Vec<String>,
    /// Source range covered by `pending`.
    pending_span: Option<Span>,
}

/// An open `{ ... }` block.
struct BlockFrame {
    /// Words of the statement that opened the block.
    head: Vec<String>,
    /// Span of the opening brace.
    open_span: Span,
    /// Statements collected inside the block so far.
    statements: Vec<Statement>,
}

impl<'src> Parser<'src> {
    /// Create a parser for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            stack: Vec::new(),
            root: Vec::new(),
            pending: Vec::new(),
            pending_span: None,
        }
    }

    /// Consume the token stream and build the tree.
    pub fn parse(mut self) -> Result<Config, ParseError> {
        loop {
            let token = self.tokenizer.next_token();
            trace!("parse step: {:?} at {:?}", token.kind, token.span);
            match token.kind {
                kind if kind.is_trivia() => {}
                TokenKind::Word => self.push_word(&token),
                TokenKind::Semicolon => self.end_statement(&token)?,
                TokenKind::LBrace => self.open_block(&token)?,
                TokenKind::RBrace => self.close_block(&token)?,
                TokenKind::Error(kind) => {
                    return Err(ParseError::new(kind.into(), token.span));
                }
                TokenKind::Eof => return self.finish(&token),
                // is_trivia covers the remaining kinds
                _ => {}
            }
        }
    }

    /// The statement list of the innermost open block, or the root.
    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.statements,
            None => &mut self.root,
        }
    }

    fn push_word(&mut self, token: &Token<'src>) {
        self.pending.push(word_value(token.text).into_owned());
        self.pending_span = Some(match self.pending_span {
            Some(span) => span.extend(token.span),
            None => token.span,
        });
    }

    /// `;` closes the pending statement as a leaf.
    fn end_statement(&mut self, token: &Token<'src>) -> Result<(), ParseError> {
        if self.pending.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyStatement, token.span));
        }
        let tokens = std::mem::take(&mut self.pending);
        self.pending_span = None;
        self.statements_mut().push(Statement {
            tokens,
            child_block: None,
        });
        Ok(())
    }

    /// `{` turns the pending statement into the head of a new block.
    fn open_block(&mut self, token: &Token<'src>) -> Result<(), ParseError> {
        if self.pending.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyBlockHead, token.span));
        }
        let head = std::mem::take(&mut self.pending);
        self.pending_span = None;
        self.stack.push(BlockFrame {
            head,
            open_span: token.span,
            statements: Vec::new(),
        });
        Ok(())
    }

    /// `}` pops the innermost block and attaches it to its head.
    fn close_block(&mut self, token: &Token<'src>) -> Result<(), ParseError> {
        if !self.pending.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedStatement,
                self.pending_span.unwrap_or(token.span),
            ));
        }
        let Some(frame) = self.stack.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::UnmatchedCloseBrace,
                token.span,
            ));
        };
        let statement = Statement {
            tokens: frame.head,
            child_block: Some(Config {
                statements: frame.statements,
            }),
        };
        self.statements_mut().push(statement);
        Ok(())
    }

    /// End of input: everything must be closed and the document non-empty.
    fn finish(self, token: &Token<'src>) -> Result<Config, ParseError> {
        if !self.pending.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedStatement,
                self.pending_span.unwrap_or(token.span),
            ));
        }
        if let Some(frame) = self.stack.last() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedBlock,
                frame.open_span,
            ));
        }
        if self.root.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyDocument, token.span));
        }
        Ok(Config {
            statements: self.root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Config, ParseError> {
        Parser::new(source).parse()
    }

    #[test]
    fn test_words_are_decoded_into_statements() {
        let config = parse("log_format \"a b\" c\\;d;").unwrap();
        assert_eq!(config.statements[0].tokens, ["log_format", "a b", "c;d"]);
    }

    #[test]
    fn test_error_spans_point_at_the_offender() {
        let err = parse("foo bar;\n;").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyStatement);
        assert_eq!(err.span, Span::new(9, 10));

        let err = parse("a {").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnclosedBlock);
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn test_unterminated_statement_spans_its_words() {
        let err = parse("foo bar").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedStatement);
        assert_eq!(err.span, Span::new(0, 7));
    }

    #[test]
    fn test_deep_nesting_resolves_to_zero() {
        let config = parse("a { b { c { d e; } } }").unwrap();
        let a = &config.statements[0];
        let b = &a.child_block.as_ref().unwrap().statements[0];
        let c = &b.child_block.as_ref().unwrap().statements[0];
        let d = &c.child_block.as_ref().unwrap().statements[0];
        assert_eq!(d.tokens, ["d", "e"]);
        assert!(d.child_block.is_none());
    }
}
