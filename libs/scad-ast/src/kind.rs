//! # Node-Kind Detection
//!
//! Classifies a raw CST node into the canonical AST node kind used for
//! adapter dispatch.
//!
//! Direct structural tags (`if_block`, `for_block`, `var_declaration`, ...)
//! map 1:1. Generic call wrappers (`module_call`, `transform_chain`) are
//! discriminated by the callee identifier text: `cube` → [`NodeKind::Cube3D`],
//! `translate` → [`NodeKind::TranslateTransform`], and so on. The first named
//! child always wins as the discriminator; there is no backtracking.
//! Anything unrecognized detects as [`NodeKind::Unknown`].

use crate::cst::SyntaxNode;

/// Canonical AST node kinds.
///
/// A closed enum: the adapter registry is keyed by this type, so adding a
/// kind forces every consumer (registry table, `AstNode` accessors) to handle
/// it at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    // 3D primitives
    Cube3D,
    Sphere3D,
    Cylinder3D,
    // 2D primitives
    Circle2D,
    Square2D,
    Polygon2D,
    // Transforms
    TranslateTransform,
    RotateTransform,
    ScaleTransform,
    MirrorTransform,
    ColorTransform,
    LinearExtrudeTransform,
    RotateExtrudeTransform,
    // Boolean operations
    UnionOperation,
    DifferenceOperation,
    IntersectionOperation,
    // Control flow
    IfStatement,
    ForStatement,
    AssignmentStatement,
    // Expressions
    LiteralExpression,
    IdentifierExpression,
    VectorExpression,
    RangeExpression,
    BinaryExpression,
    CallExpression,
    /// Fallback kind; always has an adapter so traversal is total.
    Unknown,
}

/// Extracts the callee name of a call-shaped node.
///
/// For a `module_call` this is the leading identifier; for a
/// `transform_chain` it is the callee of its leading `module_call`.
pub fn callee_name(node: &SyntaxNode) -> Option<&str> {
    let call = if node.node_type == "module_call" {
        node
    } else {
        node.find_child("module_call")?
    };
    // First named child decides; a mistyped discriminator is not scanned past
    let name = call
        .child_by_field("name")
        .or_else(|| call.first_named_child().filter(|c| c.node_type == "identifier"))?;
    Some(name.text.as_str())
}

/// Maps a callee keyword to its canonical kind, or `Unknown` for user-defined
/// or unrecognized modules.
fn keyword_kind(name: &str) -> NodeKind {
    match name {
        "cube" => NodeKind::Cube3D,
        "sphere" => NodeKind::Sphere3D,
        "cylinder" => NodeKind::Cylinder3D,
        "circle" => NodeKind::Circle2D,
        "square" => NodeKind::Square2D,
        "polygon" => NodeKind::Polygon2D,
        "translate" => NodeKind::TranslateTransform,
        "rotate" => NodeKind::RotateTransform,
        "scale" => NodeKind::ScaleTransform,
        "mirror" => NodeKind::MirrorTransform,
        "color" => NodeKind::ColorTransform,
        "linear_extrude" => NodeKind::LinearExtrudeTransform,
        "rotate_extrude" => NodeKind::RotateExtrudeTransform,
        "union" => NodeKind::UnionOperation,
        "difference" => NodeKind::DifferenceOperation,
        "intersection" => NodeKind::IntersectionOperation,
        _ => NodeKind::Unknown,
    }
}

/// Detects the canonical kind of a CST node.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(detect_kind(&cube_call), NodeKind::Cube3D);
/// assert_eq!(detect_kind(&weird_future_syntax), NodeKind::Unknown);
/// ```
pub fn detect_kind(node: &SyntaxNode) -> NodeKind {
    match node.node_type.as_str() {
        "source_file" => NodeKind::Program,
        // Generic call wrappers: the callee identifier discriminates
        "module_call" | "transform_chain" => match callee_name(node) {
            Some(name) => keyword_kind(name),
            None => NodeKind::Unknown,
        },
        // An anonymous `{ ... }` block is an implicit union
        "union_block" => NodeKind::UnionOperation,
        "if_block" | "if_statement" => NodeKind::IfStatement,
        "for_block" | "for_statement" => NodeKind::ForStatement,
        "var_declaration" | "assignment" => NodeKind::AssignmentStatement,
        "number" | "integer" | "float" | "string" | "boolean" => NodeKind::LiteralExpression,
        "identifier" | "special_variable" => NodeKind::IdentifierExpression,
        "list" => NodeKind::VectorExpression,
        "range" => NodeKind::RangeExpression,
        "binary_expression" => NodeKind::BinaryExpression,
        "function_call" | "call_expression" => NodeKind::CallExpression,
        _ => NodeKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::{Point, SyntaxNode};

    fn node(node_type: &str, text: &str) -> SyntaxNode {
        SyntaxNode {
            node_type: node_type.to_string(),
            text: text.to_string(),
            start_index: 0,
            end_index: text.len(),
            start_position: Point::default(),
            end_position: Point::default(),
            children: Vec::new(),
            is_named: true,
            field_name: None,
        }
    }

    fn module_call(name: &str) -> SyntaxNode {
        let mut call = node("module_call", name);
        call.children.push(node("identifier", name));
        call
    }

    #[test]
    fn test_direct_structural_tags() {
        assert_eq!(detect_kind(&node("source_file", "")), NodeKind::Program);
        assert_eq!(detect_kind(&node("if_block", "")), NodeKind::IfStatement);
        assert_eq!(detect_kind(&node("for_block", "")), NodeKind::ForStatement);
        assert_eq!(
            detect_kind(&node("var_declaration", "x = 1;")),
            NodeKind::AssignmentStatement
        );
        assert_eq!(detect_kind(&node("union_block", "{}")), NodeKind::UnionOperation);
    }

    #[test]
    fn test_call_discriminated_by_callee() {
        assert_eq!(detect_kind(&module_call("cube")), NodeKind::Cube3D);
        assert_eq!(detect_kind(&module_call("sphere")), NodeKind::Sphere3D);
        assert_eq!(detect_kind(&module_call("translate")), NodeKind::TranslateTransform);
        assert_eq!(detect_kind(&module_call("difference")), NodeKind::DifferenceOperation);
    }

    #[test]
    fn test_transform_chain_uses_leading_module_call() {
        let mut chain = node("transform_chain", "rotate(90) cube(1);");
        chain.children.push(module_call("rotate"));
        assert_eq!(detect_kind(&chain), NodeKind::RotateTransform);
    }

    #[test]
    fn test_unrecognized_callee_is_unknown() {
        assert_eq!(detect_kind(&module_call("gizmo")), NodeKind::Unknown);
    }

    #[test]
    fn test_mistyped_discriminator_is_not_scanned_past() {
        // First named child is not an identifier: later identifiers do not
        // rescue the classification
        let mut call = node("module_call", "(1) cube");
        call.children.push(node("number", "1"));
        call.children.push(node("identifier", "cube"));
        assert_eq!(detect_kind(&call), NodeKind::Unknown);
    }

    #[test]
    fn test_call_without_identifier_is_unknown() {
        // Missing discriminator child: no backtracking, straight to Unknown
        let call = node("module_call", "(10)");
        assert_eq!(detect_kind(&call), NodeKind::Unknown);
    }

    #[test]
    fn test_unrecognized_tag_is_unknown() {
        assert_eq!(detect_kind(&node("weird_future_syntax", "?!")), NodeKind::Unknown);
    }
}
