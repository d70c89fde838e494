//! Expression adapters (literals, identifiers, vectors, ranges, binary
//! operations, function calls).
//!
//! These are the leaves and inner nodes every parameter normalization
//! ultimately recurses into. Like the statement adapters they never fail on
//! malformed input: an unparseable number becomes the sentinel value, a
//! missing operand becomes the sentinel identifier.

use crate::ast::{AstNode, LiteralValue};
use crate::engine::{AdaptContext, AdaptError};
use config::constants::{RECOVERY_IDENTIFIER, RECOVERY_NUMBER};

/// Adapts numeric, string and boolean literals.
///
/// String text arrives with its surrounding quotes; they are stripped here so
/// the AST carries the value, not the lexeme.
pub fn literal(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let node = ctx.node();
    let value = match node.node_type.as_str() {
        "string" => LiteralValue::String(
            node.text
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string(),
        ),
        "boolean" => LiteralValue::Boolean(node.text == "true"),
        _ => LiteralValue::Number(node.text.trim().parse().unwrap_or(RECOVERY_NUMBER)),
    };
    Ok(AstNode::Literal {
        value,
        position: ctx.position(),
    })
}

/// Adapts identifiers and `$`-prefixed special variables.
pub fn identifier(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    Ok(AstNode::Identifier {
        name: ctx.node().text.clone(),
        position: ctx.position(),
    })
}

/// Adapts `[a, b, c]` list expressions element-wise via the dispatch cursor.
pub fn vector(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let position = ctx.position();
    let mut pending = Vec::new();
    let cursor = ctx.cursor();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.is_named && child.node_type != "comment" && !child.is_error() {
                pending.push(child);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    let mut elements = Vec::with_capacity(pending.len());
    for child in pending {
        elements.push(ctx.adapt_child(child)?);
    }
    Ok(AstNode::Vector { elements, position })
}

/// Adapts `[start : end]` and `[start : step : end]` ranges.
///
/// The grammar labels the fields `start`, `increment` and `end`; without
/// labels the named children decide by count (two means no step).
pub fn range(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let node = ctx.node();
    let named: Vec<_> = node.named_children().collect();

    let start_node = node.child_by_field("start").or_else(|| named.first().copied());
    let step_node = node.child_by_field("increment").or_else(|| {
        if named.len() >= 3 {
            named.get(1).copied()
        } else {
            None
        }
    });
    let end_node = node.child_by_field("end").or_else(|| named.last().copied());

    let start = match start_node {
        Some(n) => Box::new(ctx.adapt_child(n)?),
        None => Box::new(AstNode::number(RECOVERY_NUMBER, ctx.position())),
    };
    let step = step_node
        .map(|n| ctx.adapt_child(n).map(Box::new))
        .transpose()?;
    let end = match end_node {
        Some(n) => Box::new(ctx.adapt_child(n)?),
        None => Box::new(AstNode::number(RECOVERY_NUMBER, ctx.position())),
    };

    Ok(AstNode::Range {
        start,
        step,
        end,
        position: ctx.position(),
    })
}

/// Adapts `left op right` expressions.
///
/// Operands come from the `left`/`right` fields or the first two named
/// children; the operator is the `operator` field or the first anonymous
/// token between them.
pub fn binary(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let node = ctx.node();
    let left_node = node.child_by_field("left").or_else(|| node.first_named_child());
    let right_node = node
        .child_by_field("right")
        .or_else(|| node.named_children().nth(1));
    let operator = node
        .child_by_field("operator")
        .or_else(|| node.children.iter().find(|c| !c.is_named))
        .map(|c| c.text.clone())
        .unwrap_or_else(|| "+".to_string());

    let left = match left_node {
        Some(n) => Box::new(ctx.adapt_child(n)?),
        None => Box::new(AstNode::Identifier {
            name: RECOVERY_IDENTIFIER.to_string(),
            position: ctx.position(),
        }),
    };
    let right = match right_node {
        Some(n) => Box::new(ctx.adapt_child(n)?),
        None => Box::new(AstNode::number(RECOVERY_NUMBER, ctx.position())),
    };

    Ok(AstNode::Binary {
        operator,
        left,
        right,
        position: ctx.position(),
    })
}

/// Adapts `name(args)` expression calls (user functions, `len`, `sin`, ...).
///
/// Arguments flatten to their value expressions in source order; argument
/// names are not preserved at this level.
pub fn call(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let node = ctx.node();
    let callee = node
        .child_by_field("function")
        .or_else(|| node.child_by_field("name"))
        .or_else(|| node.find_named_child("identifier"))
        .map(|n| n.text.clone())
        .unwrap_or_else(|| RECOVERY_IDENTIFIER.to_string());

    let mut arguments = Vec::new();
    if let Some(args) = node.find_child("arguments") {
        let mut cursor = ctx.walk(args);
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if child.is_named && child.node_type != "comment" && !child.is_error() {
                    let value = if child.node_type == "assignment" {
                        child
                            .child_by_field("value")
                            .or_else(|| child.named_children().nth(1))
                            .unwrap_or(child)
                    } else {
                        child
                    };
                    arguments.push(ctx.adapt_child(value)?);
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
    }

    Ok(AstNode::Call {
        callee,
        arguments,
        position: ctx.position(),
    })
}
