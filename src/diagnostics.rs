use std::fmt;
use tree_sitter::Node;

/// A position in a translation unit's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    /// 1-based line
    pub line: usize,
    /// 1-based column, in bytes
    pub column: usize,
    /// 0-based byte offset
    pub offset: usize,
}

impl SourceLocation {
    pub(crate) fn start_of(node: &Node) -> Self {
        let point = node.start_position();
        Self {
            line: point.row + 1,
            column: point.column + 1,
            offset: node.start_byte(),
        }
    }

    pub(crate) fn end_of(node: &Node) -> Self {
        let point = node.end_position();
        Self {
            line: point.row + 1,
            column: point.column + 1,
            offset: node.end_byte(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRange {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceRange {
    pub(crate) fn of(node: &Node) -> Self {
        Self {
            start: SourceLocation::start_of(node),
            end: SourceLocation::end_of(node),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found in the source text of a translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", self.location, severity, self.message)
    }
}

const MAX_SNIPPET_LEN: usize = 32;

/// Collect a diagnostic for every syntax error in a parse tree.
///
/// Errors nested inside an `ERROR` node are reported once, at the outermost node.
pub(crate) fn collect_diagnostics(root: Node, source_code: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if !root.has_error() {
        return diagnostics;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        let mut descend = node.has_error();

        if node.is_error() {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                message: format!("unexpected '{}'", snippet(&node, source_code)),
                location: SourceLocation::start_of(&node),
            });
            descend = false;
        } else if node.is_missing() {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                message: format!("expected '{}'", node.kind()),
                location: SourceLocation::start_of(&node),
            });
        }

        if descend && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return diagnostics;
            }
        }
    }
}

fn snippet(node: &Node, source_code: &str) -> String {
    let text = source_code
        .get(node.start_byte()..node.end_byte())
        .unwrap_or_default();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match text.char_indices().nth(MAX_SNIPPET_LEN) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text,
    }
}
