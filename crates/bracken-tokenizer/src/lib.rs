//! A tokenizer for the Bracken configuration format.

mod span;
pub use span::Span;

mod token;
pub use token::{LexErrorKind, Token, TokenKind};

mod tokenizer;
pub use tokenizer::Tokenizer;
