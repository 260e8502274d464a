//! Statement grammar for Gradle build scripts.
//!
//! A script is a flat list of [`Statement`]s; blocks nest further statements.
//! Rendering is a pure function of the tree and the [`Indent`] unit.

use std::fmt;

use modgen_core::Indent;

/// One renderable unit of a build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Already-formatted text, emitted verbatim.
    Line(String),
    /// `<key> <value>`, e.g. `minSdkVersion 21`.
    KeyValue { key: String, value: String },
    /// `<name> { ... }` with nested statements.
    Block {
        name: String,
        children: Vec<Statement>,
    },
}

impl Statement {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn block(name: impl Into<String>, children: Vec<Statement>) -> Self {
        Self::Block {
            name: name.into(),
            children,
        }
    }

    /// Render this statement at `level`.
    ///
    /// Blocks render their children one level deeper, joined by newlines. An
    /// empty block keeps the empty body line: `name {\n\n}`.
    pub fn render(&self, indent: Indent, level: usize) -> String {
        let prefix = indent.repeat(level);
        match self {
            Self::Line(text) => format!("{prefix}{text}"),
            Self::KeyValue { key, value } => format!("{prefix}{key} {value}"),
            Self::Block { name, children } => {
                let body = children
                    .iter()
                    .map(|child| child.render(indent, level + 1))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{prefix}{name} {{\n{body}\n{prefix}}}")
            }
        }
    }
}

/// Top-level statement list of one build script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    statements: Vec<Statement>,
}

impl Script {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Find a top-level block by name.
    pub fn block(&self, name: &str) -> Option<&[Statement]> {
        find_block(&self.statements, name)
    }

    /// Render every statement at level 0, newline-joined, no trailing newline.
    pub fn render(&self, indent: Indent) -> String {
        self.statements
            .iter()
            .map(|statement| statement.render(indent, 0))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Indent::GRADLE))
    }
}

/// Children of the first block named `name` among `statements`.
pub fn find_block<'a>(statements: &'a [Statement], name: &str) -> Option<&'a [Statement]> {
    statements.iter().find_map(|statement| match statement {
        Statement::Block {
            name: block_name,
            children,
        } if block_name == name => Some(children.as_slice()),
        _ => None,
    })
}

/// Wrap in double quotes.
pub fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

/// Wrap in single quotes.
pub fn single_quoted(value: &str) -> String {
    format!("'{value}'")
}
