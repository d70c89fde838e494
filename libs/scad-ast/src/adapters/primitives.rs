//! Primitive adapters (cube, sphere, cylinder, circle, square, polygon).
//!
//! Each adapter normalizes the language's argument forms into the stable AST
//! shape: named arguments win over positional slots, scalars broadcast where
//! vectors are expected, diameters convert onto the canonical radius fields,
//! and omitted optionals take the defaults from the `config` crate.
//!
//! # Supported Forms
//!
//! - `cube(10)`, `cube([1,2,3])`, `cube(size=10, center=true)`
//! - `sphere(5)`, `sphere(r=5)`, `sphere(d=10, $fn=64)`
//! - `cylinder(h=20, r=5)`, `cylinder(10, 5, 2)`, `cylinder(h=8, d1=6, d2=2)`
//! - `circle(r=3)`, `circle(d=6)`
//! - `square(10)`, `square([10, 20], center=true)`
//! - `polygon([[0,0], [10,0], [0,10]])`, `polygon(points=..., paths=...)`

use crate::ast::AstNode;
use crate::engine::{AdaptContext, AdaptError};
use config::constants::{DEFAULT_CENTER, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SIZE};

use super::arguments::{
    bool_flag, expr_opt, expr_or, halved, list_elements, radius_param, resolution, vector2,
    vector3, CallArgs,
};

/// Adapts `cube(size, center)`.
///
/// `size` accepts a scalar (broadcast across x/y/z) or a vector; both
/// normalize to one expression per component.
pub fn cube(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let size = vector3(ctx, args.get("size", 0), DEFAULT_SIZE)?;
    let center = bool_flag(args.get("center", 1), DEFAULT_CENTER);
    Ok(AstNode::Cube3D {
        size,
        center,
        position: ctx.position(),
    })
}

/// Adapts `sphere(r | d, $fn, $fa, $fs)`.
pub fn sphere(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let radius = radius_param(ctx, &args, 0)?;
    let resolution = resolution(ctx, &args)?;
    Ok(AstNode::Sphere3D {
        radius,
        resolution,
        position: ctx.position(),
    })
}

/// Adapts `cylinder(h, r1, r2, center, ...)`.
///
/// `r`/`d` set both radii; `r1`/`r2`/`d1`/`d2` override them individually.
/// Diameters are halved onto the radius fields.
pub fn cylinder(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let height = expr_or(ctx, args.get("h", 0), DEFAULT_HEIGHT)?;

    // r/d apply to both ends unless an end-specific parameter overrides
    let shared = if let Some(r) = args.named("r") {
        Some(Box::new(ctx.adapt_child(r)?))
    } else if let Some(d) = args.named("d") {
        Some(halved(ctx, d)?)
    } else {
        None
    };

    let radius1 = if let Some(r1) = args.named("r1") {
        Box::new(ctx.adapt_child(r1)?)
    } else if let Some(d1) = args.named("d1") {
        halved(ctx, d1)?
    } else if let Some(shared) = &shared {
        shared.clone()
    } else {
        expr_or(ctx, args.positional(1), DEFAULT_RADIUS)?
    };

    let radius2 = if let Some(r2) = args.named("r2") {
        Box::new(ctx.adapt_child(r2)?)
    } else if let Some(d2) = args.named("d2") {
        halved(ctx, d2)?
    } else if let Some(shared) = &shared {
        shared.clone()
    } else {
        expr_or(ctx, args.positional(2), DEFAULT_RADIUS)?
    };

    let center = bool_flag(args.get("center", 3), DEFAULT_CENTER);
    let resolution = resolution(ctx, &args)?;
    Ok(AstNode::Cylinder3D {
        height,
        radius1,
        radius2,
        center,
        resolution,
        position: ctx.position(),
    })
}

/// Adapts `circle(r | d, $fn, $fa, $fs)`.
pub fn circle(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let radius = radius_param(ctx, &args, 0)?;
    let resolution = resolution(ctx, &args)?;
    Ok(AstNode::Circle2D {
        radius,
        resolution,
        position: ctx.position(),
    })
}

/// Adapts `square(size, center)`. The scalar form broadcasts across x/y.
pub fn square(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let size = vector2(ctx, args.get("size", 0), DEFAULT_SIZE)?;
    let center = bool_flag(args.get("center", 1), DEFAULT_CENTER);
    Ok(AstNode::Square2D {
        size,
        center,
        position: ctx.position(),
    })
}

/// Adapts `polygon(points, paths, convexity)`.
///
/// A missing points list yields an empty (not missing) list; `paths` and
/// `convexity` stay absent when omitted.
pub fn polygon(ctx: &mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError> {
    let args = CallArgs::scan(ctx);
    let points = match args.get("points", 0) {
        Some(list) if list.node_type == "list" => list_elements(ctx, list)?,
        Some(other) => vec![ctx.adapt_child(other)?],
        None => Vec::new(),
    };
    let paths = expr_opt(ctx, args.get("paths", 1))?;
    let convexity = expr_opt(ctx, args.named("convexity"))?;
    Ok(AstNode::Polygon2D {
        points,
        paths,
        convexity,
        position: ctx.position(),
    })
}
