//! Indented tree dumps for debugging and snapshot tests

use crate::ast::{AsNode, NodeRef, Visit};
use crate::config::Config;
use colored::*;
use std::convert::Infallible;

/// Renders one node per line, children indented two spaces below their parent
///
/// ```text
/// Program
///   VariableDeclaration let
///     VariableDeclarator
///       Identifier x
///       Literal 10
/// ```
pub struct TreePrinter {
    config: Config,
    use_color: bool,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            use_color: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn print<N: AsNode>(&self, node: &N) -> String {
        let mut lines = LineWriter {
            printer: self,
            depth: 0,
            output: String::new(),
        };
        match node.as_node().accept(&mut lines) {
            Ok(()) => lines.output,
            Err(never) => match never {},
        }
    }

    fn line(&self, node: NodeRef<'_>) -> String {
        let kind = node.kind().to_string();
        let mut line = if self.use_color {
            kind.cyan().bold().to_string()
        } else {
            kind
        };

        if let Some(detail) = node.detail() {
            line.push(' ');
            line.push_str(&detail);
        }

        if self.config.dump_spans {
            let span = node.span();
            let position = format!(" @{} [{}..{}]", span.location(), span.start(), span.end());
            if self.use_color {
                line.push_str(&position.dimmed().to_string());
            } else {
                line.push_str(&position);
            }
        }
        line
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

struct LineWriter<'p> {
    printer: &'p TreePrinter,
    depth: usize,
    output: String,
}

impl<'a, 'p> Visit<'a> for LineWriter<'p> {
    type Error = Infallible;

    fn enter(&mut self, node: NodeRef<'a>) -> Result<(), Infallible> {
        self.output.push_str(&"  ".repeat(self.depth));
        self.output.push_str(&self.printer.line(node));
        self.output.push('\n');
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self, _node: NodeRef<'a>) -> Result<(), Infallible> {
        self.depth -= 1;
        Ok(())
    }
}
