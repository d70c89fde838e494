//! Control flow adapters (if, for, assignment).
//!
//! Recovery here is deliberately permissive: a malformed binding synthesizes
//! the sentinel identifier or number from the `config` crate instead of
//! failing, so a half-typed statement still produces a well-formed node.

use crate::ast::AstNode;
use crate::cst::SyntaxNode;
use crate::engine::{AdaptContext, AdaptError};
use config::constants::{RECOVERY_IDENTIFIER, RECOVERY_NUMBER};

use super::statement_items;

fn recovery_identifier(ctx: &AdaptContext<'_, '_>) -> AstNode {
    AstNode::Identifier {
        name: RECOVERY_IDENTIFIER.to_string(),
        position: ctx.position(),
    }
}

/// Adapts `if (cond) ... [else ...]`.
///
/// The `else` branch stays `None` when absent; an empty `else {}` is an
/// empty, not missing, list. `else if` chains nest as an `IfStatement`
/// inside the else branch.
pub fn if_statement(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let node = ctx.node();
    let condition_node = node
        .child_by_field("condition")
        .or_else(|| node.find_named_child("parenthesized_expression"));
    let condition = match condition_node {
        Some(c) => Box::new(ctx.adapt_child(c)?),
        // No condition: recover to `true` so the then branch stays reachable
        None => Box::new(AstNode::Literal {
            value: crate::ast::LiteralValue::Boolean(true),
            position: ctx.position(),
        }),
    };

    let mut then_branch = Vec::new();
    let mut else_branch: Option<Vec<AstNode>> = None;
    let mut cursor = ctx.walk(node);
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.node_type == "else" {
                // Everything after this token belongs to the else branch
                else_branch.get_or_insert_with(Vec::new);
            } else if child.is_named
                && child.node_type != "comment"
                && !child.is_error()
                && !condition_node.is_some_and(|c| std::ptr::eq(c, child))
            {
                let items = statement_items(ctx, child)?;
                match &mut else_branch {
                    Some(branch) => branch.extend(items),
                    None => then_branch.extend(items),
                }
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    Ok(AstNode::IfStatement {
        condition,
        then_branch,
        else_branch,
        position: ctx.position(),
    })
}

/// Locates the loop binding: the first `assignment` inside the `assignments`
/// head, or a bare `assignment` child.
fn loop_binding(node: &SyntaxNode) -> Option<&SyntaxNode> {
    node.find_named_child("assignments")
        .and_then(|head| head.find_named_child("assignment"))
        .or_else(|| node.find_named_child("assignment"))
}

/// Adapts `for (name = iterable) ...`.
///
/// A missing binding recovers to the sentinel identifier iterating over the
/// sentinel number.
pub fn for_statement(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let node = ctx.node();
    let binding = loop_binding(node);

    let (variable, iterable) = match binding {
        Some(b) => {
            let name = b.child_by_field("name").or_else(|| b.first_named_child());
            let value = b
                .child_by_field("value")
                .or_else(|| b.named_children().nth(1));
            let variable = match name {
                Some(n) => Box::new(ctx.adapt_child(n)?),
                None => Box::new(recovery_identifier(ctx)),
            };
            let iterable = match value {
                Some(v) => Box::new(ctx.adapt_child(v)?),
                None => Box::new(AstNode::number(RECOVERY_NUMBER, ctx.position())),
            };
            (variable, iterable)
        }
        None => (
            Box::new(recovery_identifier(ctx)),
            Box::new(AstNode::number(RECOVERY_NUMBER, ctx.position())),
        ),
    };

    let mut children = Vec::new();
    let mut cursor = ctx.walk(node);
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.is_named
                && !matches!(child.node_type.as_str(), "assignments" | "comment")
                && !child.is_error()
            {
                children.extend(statement_items(ctx, child)?);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    Ok(AstNode::ForStatement {
        variable,
        iterable,
        children,
        position: ctx.position(),
    })
}

/// Adapts `name = value;` statements (`var_declaration` wraps an
/// `assignment` in statement position; argument lists carry the bare form).
pub fn assignment(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let mut node = ctx.node();
    if node.node_type == "var_declaration" {
        if let Some(inner) = node.find_named_child("assignment") {
            node = inner;
        }
    }

    let name = node.child_by_field("name").or_else(|| node.first_named_child());
    let value = node
        .child_by_field("value")
        .or_else(|| node.named_children().nth(1));

    let left = match name {
        Some(n) => Box::new(ctx.adapt_child(n)?),
        None => Box::new(recovery_identifier(ctx)),
    };
    let right = match value {
        Some(v) => Box::new(ctx.adapt_child(v)?),
        None => Box::new(AstNode::number(RECOVERY_NUMBER, ctx.position())),
    };

    Ok(AstNode::AssignmentStatement {
        left,
        right,
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

    fn if_block(
        condition: crate::SyntaxNode,
        then: Vec<crate::SyntaxNode>,
        else_: Option<Vec<crate::SyntaxNode>>,
    ) -> crate::SyntaxNode {
        let mut n = node("if_block", "if");
        n.children.push(token("if", "if"));
        let mut paren = node("parenthesized_expression", "(...)");
        paren.children.push(token("(", "("));
        paren.children.push(condition);
        paren.children.push(token(")", ")"));
        n.children.push(with_field(paren, "condition"));
        n.children.push(block(then));
        if let Some(else_) = else_ {
            n.children.push(token("else", "else"));
            n.children.push(block(else_));
        }
        n
    }

    fn for_block(name: &str, iterable: crate::SyntaxNode, body: Vec<crate::SyntaxNode>) -> crate::SyntaxNode {
        let mut head = node("assignments", "(...)");
        head.children.push(assignment_of(ident(name), iterable));
        let mut n = node("for_block", "for");
        n.children.push(token("for", "for"));
        n.children.push(head);
        n.children.push(block(body));
        n
    }

    #[test]
    fn test_if_without_else() {
        let tree = tree(if_block(
            boolean(true),
            vec![call("cube", vec![number("1")])],
            None,
        ));
        match adapt(&tree) {
            AstNode::IfStatement {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                assert!(matches!(
                    *condition,
                    AstNode::Literal {
                        value: crate::LiteralValue::Boolean(true),
                        ..
                    }
                ));
                assert_eq!(then_branch.len(), 1);
                assert!(else_branch.is_none());
            }
            other => panic!("expected IfStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_if_with_empty_else() {
        let tree = tree(if_block(
            boolean(false),
            vec![call("cube", vec![number("1")])],
            Some(vec![]),
        ));
        match adapt(&tree) {
            AstNode::IfStatement { else_branch, .. } => {
                // Present and empty, not None
                assert_eq!(else_branch, Some(vec![]));
            }
            other => panic!("expected IfStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_else_if_nests() {
        let nested = if_block(boolean(false), vec![call("sphere", vec![number("1")])], None);
        let mut outer = node("if_block", "if");
        outer.children.push(token("if", "if"));
        let mut paren = node("parenthesized_expression", "(true)");
        paren.children.push(boolean(true));
        outer.children.push(with_field(paren, "condition"));
        outer
            .children
            .push(block(vec![call("cube", vec![number("1")])]));
        outer.children.push(token("else", "else"));
        outer.children.push(nested);

        let tree = tree(outer);
        match adapt(&tree) {
            AstNode::IfStatement { else_branch, .. } => {
                let else_branch = else_branch.expect("else branch present");
                assert_eq!(else_branch.len(), 1);
                assert!(matches!(else_branch[0], AstNode::IfStatement { .. }));
            }
            other => panic!("expected IfStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_if_without_condition_recovers_to_true() {
        let mut n = node("if_block", "if");
        n.children.push(token("if", "if"));
        n.children.push(block(vec![call("cube", vec![number("1")])]));
        let tree = tree(n);
        match adapt(&tree) {
            AstNode::IfStatement {
                condition,
                then_branch,
                ..
            } => {
                assert!(matches!(
                    *condition,
                    AstNode::Literal {
                        value: crate::LiteralValue::Boolean(true),
                        ..
                    }
                ));
                assert_eq!(then_branch.len(), 1);
            }
            other => panic!("expected IfStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_for_over_range() {
        let mut range = node("range", "[0:5]");
        range.children.push(with_field(number("0"), "start"));
        range.children.push(with_field(number("5"), "end"));
        let tree = tree(for_block("i", range, vec![call("cube", vec![ident("i")])]));
        match adapt(&tree) {
            AstNode::ForStatement {
                variable,
                iterable,
                children,
                ..
            } => {
                assert!(matches!(*variable, AstNode::Identifier { ref name, .. } if name == "i"));
                assert!(matches!(*iterable, AstNode::Range { .. }));
                assert_eq!(children.len(), 1);
            }
            other => panic!("expected ForStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_for_without_binding_recovers() {
        let mut n = node("for_block", "for");
        n.children.push(token("for", "for"));
        n.children.push(block(vec![call("cube", vec![number("1")])]));
        let tree = tree(n);
        match adapt(&tree) {
            AstNode::ForStatement {
                variable, iterable, ..
            } => {
                assert!(
                    matches!(*variable, AstNode::Identifier { ref name, .. } if name == "unknown")
                );
                assert_eq!(iterable.as_number(), Some(0.0));
            }
            other => panic!("expected ForStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_var_declaration() {
        let mut decl = node("var_declaration", "x = 10;");
        decl.children.push(assignment_of(ident("x"), number("10")));
        decl.children.push(token(";", ";"));
        let tree = tree(decl);
        match adapt(&tree) {
            AstNode::AssignmentStatement { left, right, .. } => {
                assert!(matches!(*left, AstNode::Identifier { ref name, .. } if name == "x"));
                assert_eq!(right.as_number(), Some(10.0));
            }
            other => panic!("expected AssignmentStatement, got {other:?}"),
        }
    }

    #[test]
    fn test_assignment_missing_sides_recover() {
        let tree = tree(node("var_declaration", "= ;"));
        match adapt(&tree) {
            AstNode::AssignmentStatement { left, right, .. } => {
                assert!(
                    matches!(*left, AstNode::Identifier { ref name, .. } if name == "unknown")
                );
                assert_eq!(right.as_number(), Some(0.0));
            }
            other => panic!("expected AssignmentStatement, got {other:?}"),
        }
    }
}
