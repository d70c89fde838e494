//! # Diagnostics
//!
//! Error and warning reports surfaced to editor tooling. Adaptation itself is
//! permissive, so diagnostics come from the grammar's error recovery:
//! [`collect_diagnostics`] sweeps a parse tree for `ERROR` and `MISSING`
//! nodes and reports each one with its source location.

use crate::cst::{SyntaxNode, SyntaxTree};
use crate::position::Position;
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// How severe a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic with location information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Byte range of the offending source text.
    pub span: Span,
    /// Line/column range of the offending source text.
    pub position: Position,
    /// Optional fix suggestion.
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
            position,
            hint: None,
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
            position,
            hint: None,
        }
    }

    /// Attaches a fix suggestion.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Sweeps a parse tree for the grammar's error-recovery nodes.
///
/// Every `ERROR` node reports one error; every `MISSING` node reports one
/// error naming the token the grammar inserted. Diagnostics come out in
/// source order. A clean tree yields an empty list.
pub fn collect_diagnostics(tree: &SyntaxTree) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    visit(tree.root(), &mut diagnostics);
    diagnostics
}

fn visit(node: &SyntaxNode, diagnostics: &mut Vec<Diagnostic>) {
    if node.is_error() {
        let excerpt = excerpt(&node.text);
        diagnostics.push(Diagnostic::error(
            format!("syntax error near `{excerpt}`"),
            Span::of_node(node),
            Position::of(node),
        ));
        // The grammar nests recovered children under the ERROR node; one
        // report per error region is enough.
        return;
    }
    if node.is_missing() {
        let expected = node.node_type.trim_start_matches("MISSING").trim();
        diagnostics.push(
            Diagnostic::error(
                format!("missing {expected}"),
                Span::of_node(node),
                Position::of(node),
            )
            .with_hint(format!("insert {expected}")),
        );
        return;
    }
    for child in &node.children {
        visit(child, diagnostics);
    }
}

fn excerpt(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(24) {
        Some((i, _)) => &trimmed[..i],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn test_clean_tree_has_no_diagnostics() {
        let tree = tree(program(vec![call("cube", vec![number("1")])]));
        assert!(collect_diagnostics(&tree).is_empty());
    }

    #[test]
    fn test_error_node_reports_once() {
        let mut bad = node("ERROR", "cube(10");
        bad.children.push(node("ERROR", "10"));
        let tree = tree(program(vec![bad, call("sphere", vec![number("2")])]));

        let diagnostics = collect_diagnostics(&tree);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics[0].message.contains("cube(10"));
    }

    #[test]
    fn test_missing_node_reports_with_hint() {
        let missing = node("MISSING \";\"", "");
        let tree = tree(program(vec![call("cube", vec![number("1")]), missing]));

        let diagnostics = collect_diagnostics(&tree);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("missing"));
        assert!(diagnostics[0].hint.as_deref().unwrap().contains("\";\""));
    }

    #[test]
    fn test_diagnostics_in_source_order() {
        let mut first = node("ERROR", "@@");
        first.start_index = 0;
        first.end_index = 2;
        let mut second = node("ERROR", "##");
        second.start_index = 10;
        second.end_index = 12;
        let tree = tree(program(vec![first, second]));

        let diagnostics = collect_diagnostics(&tree);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].span.start() < diagnostics[1].span.start());
    }

    #[test]
    fn test_with_hint_builder() {
        let diagnostic = Diagnostic::warning("unused variable", Span::new(0, 1), Position::default())
            .with_hint("remove the declaration");
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.hint.as_deref(), Some("remove the declaration"));
    }
}
