//! Canonical text rendering for Bracken configuration trees.
//!
//! The output is a normalized form: one statement per line, two-space
//! indentation per nesting level, and words re-quoted only where needed.
//! Comments and the original quoting style are not preserved, but
//! parsing the rendered text yields the same tree, and rendering that
//! tree yields the same text.

mod options;
pub use options::FormatOptions;

mod scalar;
pub use scalar::can_be_bare;

mod writer;
use writer::Writer;

use bracken_tree::{Config, Statement};

/// Render a configuration tree with default options.
pub fn render(config: &Config) -> String {
    render_with_options(config, &FormatOptions::default())
}

/// Render a configuration tree.
pub fn render_with_options(config: &Config, options: &FormatOptions) -> String {
    let mut writer = Writer::new(options);
    writer.config(config, 0);
    writer.finish()
}

/// Render a single statement at the given indentation depth.
pub fn render_statement(statement: &Statement, depth: usize) -> String {
    render_statement_with_options(statement, depth, &FormatOptions::default())
}

/// Render a single statement at the given indentation depth.
pub fn render_statement_with_options(
    statement: &Statement,
    depth: usize,
    options: &FormatOptions,
) -> String {
    let mut writer = Writer::new(options);
    writer.statement(statement, depth);
    writer.finish()
}
