//! Tree types for parsed Bracken documents.
//!
//! A document is a [`Config`]: an ordered list of [`Statement`]s. Each
//! statement is a list of words plus, for block statements, an owned
//! child [`Config`]. Ownership is strictly a tree: a child block belongs
//! to exactly one statement, and the root config to the caller.

/// One directive: an ordered sequence of words, optionally owning a
/// block body.
///
/// A parsed statement always has at least one word. `child_block` is
/// present exactly when the statement was followed by `{ ... }` instead
/// of `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The words of the directive, in source order.
    pub tokens: Vec<String>,
    /// The `{ ... }` body, present only for block statements.
    pub child_block: Option<Config>,
}

/// An ordered sequence of statements at one nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Statements in document order.
    pub statements: Vec<Statement>,
}

impl Statement {
    /// Create a leaf statement (terminated by `;`).
    pub fn leaf<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Statement {
            tokens: tokens.into_iter().map(Into::into).collect(),
            child_block: None,
        }
    }

    /// Create a block statement with the given body.
    pub fn block<I, S>(tokens: I, body: Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Statement {
            tokens: tokens.into_iter().map(Into::into).collect(),
            child_block: Some(body),
        }
    }

    /// The directive name (first word).
    pub fn name(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or("")
    }

    /// The words after the name.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Whether this statement owns a block body.
    pub fn is_block(&self) -> bool {
        self.child_block.is_some()
    }
}

impl Config {
    /// Number of statements at this level.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether this level holds no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over the statements at this level.
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// All statements at this level whose name equals `name`.
    pub fn matching<'a, 'b>(&'a self, name: &'b str) -> impl Iterator<Item = &'a Statement> + use<'a, 'b> {
        self.statements.iter().filter(move |s| s.name() == name)
    }

    /// The first statement at this level whose name equals `name`.
    pub fn get(&self, name: &str) -> Option<&Statement> {
        self.matching(name).next()
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
