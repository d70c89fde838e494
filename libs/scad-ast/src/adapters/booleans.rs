//! Boolean operation adapters (union, difference, intersection).
//!
//! All three share one shape: no parameters, only an aggregated body. An
//! anonymous `{ ... }` block also lands here, adapted as an implicit union.

use crate::ast::AstNode;
use crate::engine::{AdaptContext, AdaptError};

use super::body_children;

/// Adapts `union() { ... }` and anonymous `{ ... }` blocks.
pub fn union_operation(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    Ok(AstNode::UnionOperation {
        children: body_children(ctx)?,
        position: ctx.position(),
    })
}

/// Adapts `difference() { ... }`. Child order is preserved: the first child
/// is the minuend, the rest subtract from it.
pub fn difference_operation(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    Ok(AstNode::DifferenceOperation {
        children: body_children(ctx)?,
        position: ctx.position(),
    })
}

/// Adapts `intersection() { ... }`.
pub fn intersection_operation(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    Ok(AstNode::IntersectionOperation {
        children: body_children(ctx)?,
        position: ctx.position(),
    })
}

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use crate::{Adapter, AdapterRegistry, AstNode};

    fn adapt(tree: &crate::SyntaxTree) -> AstNode {
        let registry = AdapterRegistry::standard();
        Adapter::new(&registry).adapt(tree).expect("adapt succeeds")
    }

    #[test]
    fn test_difference_preserves_child_order() {
        let body = block(vec![
            call("cube", vec![number("10")]),
            call("sphere", vec![number("4")]),
        ]);
        let tree = tree(chain("difference", vec![], vec![body]));
        match adapt(&tree) {
            AstNode::DifferenceOperation { children, .. } => {
                assert_eq!(children.len(), 2);
                assert!(matches!(children[0], AstNode::Cube3D { .. }));
                assert!(matches!(children[1], AstNode::Sphere3D { .. }));
            }
            other => panic!("expected DifferenceOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_union() {
        let tree = tree(chain("union", vec![], vec![block(vec![])]));
        match adapt(&tree) {
            AstNode::UnionOperation { children, .. } => assert!(children.is_empty()),
            other => panic!("expected UnionOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_call_has_empty_body() {
        // `union();` parses as a module_call without a transform_chain
        // wrapper; the callee identifier and argument list are not body
        // statements
        let tree = tree(call("union", vec![]));
        match adapt(&tree) {
            AstNode::UnionOperation { children, .. } => assert!(children.is_empty()),
            other => panic!("expected UnionOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_anonymous_block_is_implicit_union() {
        let tree = tree(block(vec![
            call("cube", vec![number("1")]),
            call("cylinder", vec![number("2")]),
        ]));
        match adapt(&tree) {
            AstNode::UnionOperation { children, .. } => {
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected UnionOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_intersection_single_child_without_block() {
        let tree = tree(chain(
            "intersection",
            vec![],
            vec![call("cube", vec![number("3")])],
        ));
        match adapt(&tree) {
            AstNode::IntersectionOperation { children, .. } => {
                assert_eq!(children.len(), 1);
            }
            other => panic!("expected IntersectionOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_booleans() {
        let inner = chain(
            "intersection",
            vec![],
            vec![block(vec![call("sphere", vec![number("5")])])],
        );
        let body = block(vec![call("cube", vec![number("10")]), inner]);
        let tree = tree(chain("difference", vec![], vec![body]));
        match adapt(&tree) {
            AstNode::DifferenceOperation { children, .. } => {
                assert_eq!(children.len(), 2);
                assert!(matches!(children[1], AstNode::IntersectionOperation { .. }));
            }
            other => panic!("expected DifferenceOperation, got {other:?}"),
        }
    }
}
