//! Transform adapters (translate, rotate, scale, mirror, color, extrusions).
//!
//! Transforms wrap child statements: the adapter normalizes the call's
//! parameters and aggregates the body through [`super::body_children`]. An
//! empty (`;`) body yields an empty child list, never a missing one.

use crate::ast::{AstNode, Vector3Param};
use crate::engine::{AdaptContext, AdaptError};
use crate::position::Position;
use config::constants::{
    DEFAULT_CENTER, DEFAULT_EXTRUDE_HEIGHT, DEFAULT_REVOLVE_ANGLE, DEFAULT_SCALE_COMPONENT,
    DEFAULT_VECTOR_COMPONENT, RECOVERY_IDENTIFIER,
};

use super::arguments::{bool_flag, expr_opt, expr_or, vector3, CallArgs};
use super::body_children;

/// Adapts `translate(v) ...`. A missing or short vector fills with zero.
pub fn translate(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let vector = vector3(ctx, args.get("v", 0), DEFAULT_VECTOR_COMPONENT)?;
    let children = body_children(ctx)?;
    Ok(AstNode::TranslateTransform {
        vector,
        children,
        position: ctx.position(),
    })
}

/// Adapts `rotate(a) ...` and `rotate([x, y, z]) ...`.
///
/// A scalar angle rotates about Z, so it normalizes to `[0, 0, a]` rather
/// than broadcasting.
pub fn rotate(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let rotation = match args.get("a", 0) {
        Some(list) if list.node_type == "list" => {
            vector3(ctx, Some(list), DEFAULT_VECTOR_COMPONENT)?
        }
        Some(scalar) => {
            let angle = ctx.adapt_child(scalar)?;
            let zero = AstNode::number(DEFAULT_VECTOR_COMPONENT, Position::of(scalar));
            Vector3Param {
                x: Box::new(zero.clone()),
                y: Box::new(zero),
                z: Box::new(angle),
            }
        }
        None => vector3(ctx, None, DEFAULT_VECTOR_COMPONENT)?,
    };
    let children = body_children(ctx)?;
    Ok(AstNode::RotateTransform {
        rotation,
        children,
        position: ctx.position(),
    })
}

/// Adapts `scale(v) ...`. Short vectors fill with the neutral factor 1.
pub fn scale(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let vector = vector3(ctx, args.get("v", 0), DEFAULT_SCALE_COMPONENT)?;
    let children = body_children(ctx)?;
    Ok(AstNode::ScaleTransform {
        vector,
        children,
        position: ctx.position(),
    })
}

/// Adapts `mirror(v) ...`.
pub fn mirror(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let vector = vector3(ctx, args.get("v", 0), DEFAULT_VECTOR_COMPONENT)?;
    let children = body_children(ctx)?;
    Ok(AstNode::MirrorTransform {
        vector,
        children,
        position: ctx.position(),
    })
}

/// Adapts `color(c, alpha) ...`. The color value stays an expression (name
/// string, `[r, g, b, a]` vector or anything else the source wrote); a
/// missing color recovers to the sentinel identifier.
pub fn color(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let color = match args.named("c").or_else(|| args.positional(0)) {
        Some(value) => Box::new(ctx.adapt_child(value)?),
        None => Box::new(AstNode::Identifier {
            name: RECOVERY_IDENTIFIER.to_string(),
            position: ctx.position(),
        }),
    };
    let alpha = expr_opt(ctx, args.get("alpha", 1))?;
    let children = body_children(ctx)?;
    Ok(AstNode::ColorTransform {
        color,
        alpha,
        children,
        position: ctx.position(),
    })
}

/// Adapts `linear_extrude(height, center, twist, scale, convexity) ...`.
pub fn linear_extrude(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let height = match args.named("height").or_else(|| args.named("h")) {
        Some(value) => Some(value),
        None => args.positional(0),
    };
    let height = expr_or(ctx, height, DEFAULT_EXTRUDE_HEIGHT)?;
    let center = bool_flag(args.named("center"), DEFAULT_CENTER);
    let twist = expr_opt(ctx, args.named("twist"))?;
    let scale = expr_opt(ctx, args.named("scale"))?;
    let convexity = expr_opt(ctx, args.named("convexity"))?;
    let children = body_children(ctx)?;
    Ok(AstNode::LinearExtrudeTransform {
        height,
        center,
        twist,
        scale,
        convexity,
        children,
        position: ctx.position(),
    })
}

/// Adapts `rotate_extrude(angle, convexity) ...`. The sweep angle defaults
/// to a full revolution.
pub fn rotate_extrude(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let angle = expr_or(ctx, args.get("angle", 0), DEFAULT_REVOLVE_ANGLE)?;
    let convexity = expr_opt(ctx, args.named("convexity"))?;
    let children = body_children(ctx)?;
    Ok(AstNode::RotateExtrudeTransform {
        angle,
        convexity,
        children,
        position: ctx.position(),
    })
}
