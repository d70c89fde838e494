//! Shared argument extraction and normalization helpers.
//!
//! [`CallArgs`] scans a call's argument list once and answers named/positional
//! lookups; the free functions implement the normalization rules every
//! primitive and transform adapter shares (scalar broadcast, diameter→radius
//! conversion, defaults).

use crate::ast::{AstNode, LiteralValue, Vector2Param, Vector3Param};
use crate::cst::SyntaxNode;
use crate::engine::{AdaptContext, AdaptError};
use crate::position::Position;
use config::constants::DEFAULT_RADIUS;

/// The scanned argument list of one call.
///
/// `name=value` arguments land in `named`, everything else keeps its
/// positional slot. Unrecognized names are simply never looked up; they are
/// ignored rather than rejected.
pub struct CallArgs<'t> {
    positional: Vec<&'t SyntaxNode>,
    named: Vec<(&'t str, &'t SyntaxNode)>,
}

impl<'t> CallArgs<'t> {
    /// Walks the construct's `arguments` node with a cursor and splits the
    /// children into positional values and named pairs.
    pub fn scan(ctx: &AdaptContext<'_, 't>) -> Self {
        let mut args = Self {
            positional: Vec::new(),
            named: Vec::new(),
        };
        let call = super::callee_call(ctx.node());
        let Some(arguments) = call.find_child("arguments") else {
            return args;
        };

        let mut cursor = ctx.walk(arguments);
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if child.is_named && child.node_type != "comment" && !child.is_error() {
                    if child.node_type == "assignment" {
                        let name = child
                            .child_by_field("name")
                            .or_else(|| child.first_named_child());
                        let value = child
                            .child_by_field("value")
                            .or_else(|| child.named_children().nth(1));
                        if let (Some(name), Some(value)) = (name, value) {
                            args.named.push((name.text.as_str(), value));
                        }
                    } else {
                        args.positional.push(child);
                    }
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        args
    }

    /// Looks up a named argument.
    pub fn named(&self, name: &str) -> Option<&'t SyntaxNode> {
        self.named.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    /// Looks up a positional argument by slot index.
    pub fn positional(&self, index: usize) -> Option<&'t SyntaxNode> {
        self.positional.get(index).copied()
    }

    /// Canonical lookup: the named form wins over the positional slot.
    pub fn get(&self, name: &str, index: usize) -> Option<&'t SyntaxNode> {
        self.named(name).or_else(|| self.positional(index))
    }
}

/// Adapts a value node, or synthesizes a numeric default at the construct's
/// position when the argument was omitted.
pub fn expr_or<'t>(
    ctx: &AdaptContext<'_, 't>,
    value: Option<&'t SyntaxNode>,
    default: f64,
) -> Result<Box<AstNode>, AdaptError> {
    match value {
        Some(node) => Ok(Box::new(ctx.adapt_child(node)?)),
        None => Ok(Box::new(AstNode::number(default, ctx.position()))),
    }
}

/// Adapts an optional value node, keeping absence observable.
pub fn expr_opt<'t>(
    ctx: &AdaptContext<'_, 't>,
    value: Option<&'t SyntaxNode>,
) -> Result<Option<Box<AstNode>>, AdaptError> {
    value
        .map(|node| ctx.adapt_child(node).map(Box::new))
        .transpose()
}

/// Reads a boolean flag argument, falling back to `default` when the
/// argument is omitted or not a boolean literal.
pub fn bool_flag(value: Option<&SyntaxNode>, default: bool) -> bool {
    match value.map(|n| n.text.as_str()) {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

/// Normalizes a vector-valued argument into three per-component expressions.
///
/// - omitted: every component is a literal `fill`
/// - list: element-wise, missing trailing elements fall back to `fill`
/// - anything else: scalar broadcast, the expression replicated across all
///   components
pub fn vector3<'t>(
    ctx: &AdaptContext<'_, 't>,
    value: Option<&'t SyntaxNode>,
    fill: f64,
) -> Result<Vector3Param, AdaptError> {
    match value {
        Some(list) if list.node_type == "list" => {
            let mut elements = list_elements(ctx, list)?.into_iter();
            let fill_node = AstNode::number(fill, Position::of(list));
            let x = elements.next().unwrap_or_else(|| fill_node.clone());
            let y = elements.next().unwrap_or_else(|| fill_node.clone());
            let z = elements.next().unwrap_or(fill_node);
            Ok(Vector3Param {
                x: Box::new(x),
                y: Box::new(y),
                z: Box::new(z),
            })
        }
        Some(scalar) => {
            let expr = ctx.adapt_child(scalar)?;
            Ok(Vector3Param {
                x: Box::new(expr.clone()),
                y: Box::new(expr.clone()),
                z: Box::new(expr),
            })
        }
        None => {
            let expr = AstNode::number(fill, ctx.position());
            Ok(Vector3Param {
                x: Box::new(expr.clone()),
                y: Box::new(expr.clone()),
                z: Box::new(expr),
            })
        }
    }
}

/// 2D counterpart of [`vector3`], used by `square`.
pub fn vector2<'t>(
    ctx: &AdaptContext<'_, 't>,
    value: Option<&'t SyntaxNode>,
    fill: f64,
) -> Result<Vector2Param, AdaptError> {
    match value {
        Some(list) if list.node_type == "list" => {
            let mut elements = list_elements(ctx, list)?.into_iter();
            let fill_node = AstNode::number(fill, Position::of(list));
            let x = elements.next().unwrap_or_else(|| fill_node.clone());
            let y = elements.next().unwrap_or(fill_node);
            Ok(Vector2Param {
                x: Box::new(x),
                y: Box::new(y),
            })
        }
        Some(scalar) => {
            let expr = ctx.adapt_child(scalar)?;
            Ok(Vector2Param {
                x: Box::new(expr.clone()),
                y: Box::new(expr),
            })
        }
        None => {
            let expr = AstNode::number(fill, ctx.position());
            Ok(Vector2Param {
                x: Box::new(expr.clone()),
                y: Box::new(expr),
            })
        }
    }
}

/// Adapts the elements of a `list` node in source order.
pub fn list_elements<'t>(
    ctx: &AdaptContext<'_, 't>,
    list: &'t SyntaxNode,
) -> Result<Vec<AstNode>, AdaptError> {
    let mut elements = Vec::new();
    let mut cursor = ctx.walk(list);
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.is_named && child.node_type != "comment" && !child.is_error() {
                elements.push(ctx.adapt_child(child)?);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    Ok(elements)
}

/// Resolves the canonical radius of a radial primitive.
///
/// Precedence: named `r`, named `d` (halved), the positional slot, then the
/// language default.
pub fn radius_param<'t>(
    ctx: &AdaptContext<'_, 't>,
    args: &CallArgs<'t>,
    positional_index: usize,
) -> Result<Box<AstNode>, AdaptError> {
    if let Some(r) = args.named("r") {
        return Ok(Box::new(ctx.adapt_child(r)?));
    }
    if let Some(d) = args.named("d") {
        return halved(ctx, d);
    }
    if let Some(p) = args.positional(positional_index) {
        return Ok(Box::new(ctx.adapt_child(p)?));
    }
    Ok(Box::new(AstNode::number(DEFAULT_RADIUS, ctx.position())))
}

/// Collects the facet-resolution specials (`$fn`, `$fa`, `$fs`).
///
/// Only supplied specials are adapted; omitted ones stay `None` so their
/// absence remains observable downstream.
pub fn resolution<'t>(
    ctx: &AdaptContext<'_, 't>,
    args: &CallArgs<'t>,
) -> Result<crate::ast::Resolution, AdaptError> {
    Ok(crate::ast::Resolution {
        fn_: expr_opt(ctx, args.named("$fn"))?,
        fa: expr_opt(ctx, args.named("$fa"))?,
        fs: expr_opt(ctx, args.named("$fs"))?,
    })
}

/// Converts a diameter-valued expression onto the canonical radius field.
///
/// A numeric literal is halved in place. Any other expression becomes
/// `<expr> / 2`, so the field always means radius regardless of how the
/// diameter was written.
pub fn halved<'t>(
    ctx: &AdaptContext<'_, 't>,
    diameter: &'t SyntaxNode,
) -> Result<Box<AstNode>, AdaptError> {
    let expr = ctx.adapt_child(diameter)?;
    Ok(Box::new(match expr {
        AstNode::Literal {
            value: LiteralValue::Number(n),
            position,
        } => AstNode::number(n / 2.0, position),
        other => {
            let position = other.position();
            AstNode::Binary {
                operator: "/".to_string(),
                left: Box::new(other),
                right: Box::new(AstNode::number(2.0, position)),
                position,
            }
        }
    }))
}
