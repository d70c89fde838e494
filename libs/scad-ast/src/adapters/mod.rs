//! # Per-Construct Adapters
//!
//! One function per AST node kind. Each adapter receives the dispatch
//! context (cursor positioned at the matching CST node plus the recursive
//! adapt-a-child capability) and returns exactly one AST node.
//!
//! Every adapter follows the same contract:
//! 1. **Argument extraction**: positional and `name=value` arguments are
//!    collected by [`arguments::CallArgs`]; unrecognized names are ignored.
//! 2. **Parameter normalization**: scalar broadcast, diameter→radius
//!    conversion, defaults from the `config` crate.
//! 3. **Child aggregation**: bodied constructs adapt the body's named
//!    children in source order; an empty body yields an empty list.
//! 4. **Position assignment**: the node's position spans the full construct.
//!
//! Recovery is permissive throughout: structural mismatches produce synthetic
//! defaults, never errors.

pub mod arguments;
pub mod booleans;
pub mod control_flow;
pub mod expressions;
pub mod primitives;
pub mod transforms;

use crate::ast::AstNode;
use crate::cst::SyntaxNode;
use crate::engine::{AdaptContext, AdaptError};

/// Adapter for the root kind. Returns an empty program; the engine fills
/// `children` by aggregating the root's named children.
pub fn program(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    Ok(AstNode::Program {
        children: Vec::new(),
        position: ctx.position(),
    })
}

/// The fixed fallback adapter: a position-only node. Guarantees traversal
/// always terminates with *a* node.
pub fn unknown(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    Ok(AstNode::Unknown {
        position: ctx.position(),
    })
}

/// Resolves the `module_call` of a call-shaped construct. A bare
/// `module_call` is its own callee; a `transform_chain` carries it as its
/// first child.
pub(crate) fn callee_call(node: &SyntaxNode) -> &SyntaxNode {
    if node.node_type == "module_call" {
        node
    } else {
        node.find_child("module_call").unwrap_or(node)
    }
}

/// Adapts the statements a body child contributes.
///
/// A `union_block` contributes its named children (flattened into the parent
/// list), a `statement` wrapper unwraps to its inner node, a bare terminator
/// contributes nothing, anything else is one statement.
pub(crate) fn statement_items<'t>(
    ctx: &AdaptContext<'_, 't>,
    child: &'t SyntaxNode,
) -> Result<Vec<AstNode>, AdaptError> {
    match child.node_type.as_str() {
        "union_block" => block_children(ctx, child),
        "statement" => match child.first_named_child() {
            Some(inner) => statement_items(ctx, inner),
            None => Ok(Vec::new()),
        },
        _ => Ok(vec![ctx.adapt_child(child)?]),
    }
}

/// Adapts the named children of a `{ ... }` block in source order.
pub(crate) fn block_children<'t>(
    ctx: &AdaptContext<'_, 't>,
    block: &'t SyntaxNode,
) -> Result<Vec<AstNode>, AdaptError> {
    let mut items = Vec::new();
    let mut cursor = ctx.walk(block);
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.is_named && child.node_type != "comment" && !child.is_error() {
                items.extend(statement_items(ctx, child)?);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    Ok(items)
}

/// Aggregates the child statements of a bodied construct (transform chain,
/// boolean operation).
///
/// The callee is not a body statement: for a `transform_chain` that is the
/// leading `module_call`, for a bare `module_call` it is the call's own
/// `identifier` and `arguments` children. An empty (`;`) body yields an
/// empty, not missing, list.
pub(crate) fn body_children(ctx: &AdaptContext<'_, '_>) -> Result<Vec<AstNode>, AdaptError> {
    let node = ctx.node();
    if node.node_type == "union_block" {
        return block_children(ctx, node);
    }

    let call = callee_call(node);
    let bare_call = std::ptr::eq(call, node);
    let callee_name = call
        .child_by_field("name")
        .or_else(|| call.first_named_child());
    let callee_arguments = call.find_child("arguments");

    let mut items = Vec::new();
    let mut seen_callee = false;
    let mut cursor = ctx.walk(node);
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            let is_callee_part = if bare_call {
                callee_name.is_some_and(|n| std::ptr::eq(n, child))
                    || callee_arguments.is_some_and(|a| std::ptr::eq(a, child))
            } else if child.node_type == "module_call" && !seen_callee {
                seen_callee = true;
                true
            } else {
                false
            };
            if !is_callee_part
                && child.is_named
                && !matches!(child.node_type.as_str(), "comment" | "modifier")
                && !child.is_error()
            {
                items.extend(statement_items(ctx, child)?);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    Ok(items)
}
