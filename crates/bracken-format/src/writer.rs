//! Output writer for canonical rendering.

use bracken_tree::{Config, Statement};

use crate::options::FormatOptions;
use crate::scalar::{can_be_bare, quote};

/// Builds rendered output with indentation tracking.
pub(crate) struct Writer<'a> {
    out: String,
    options: &'a FormatOptions,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(options: &'a FormatOptions) -> Self {
        Self {
            out: String::new(),
            options,
        }
    }

    /// Consume the writer and return the output.
    pub(crate) fn finish(self) -> String {
        self.out
    }

    /// Write every statement of a config at the given depth.
    pub(crate) fn config(&mut self, config: &Config, depth: usize) {
        for statement in config {
            self.statement(statement, depth);
        }
    }

    /// Write one statement: `words;` for a leaf, `words { ... }` for a
    /// block, each line newline-terminated.
    pub(crate) fn statement(&mut self, statement: &Statement, depth: usize) {
        self.indent(depth);
        self.words(&statement.tokens);
        match &statement.child_block {
            Some(body) => {
                self.out.push_str(" {\n");
                self.config(body, depth + 1);
                self.indent(depth);
                self.out.push_str("}\n");
            }
            None => self.out.push_str(";\n"),
        }
    }

    fn words(&mut self, words: &[String]) {
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            if can_be_bare(word) {
                self.out.push_str(word);
            } else {
                self.out.push_str(&quote(word));
            }
        }
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(self.options.indent);
        }
    }
}
