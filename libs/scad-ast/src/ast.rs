//! Typed AST for the modeling language.
//!
//! One closed discriminated union over all node kinds. Every variant carries
//! the `Position` of the CST construct it was derived from; composite nodes
//! own their children by value, so the CST can be discarded once adaptation
//! completes.

use crate::kind::NodeKind;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A literal's value with its type tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Boolean(bool),
}

/// A vector-valued parameter with one expression per component.
///
/// Scalar broadcast replicates a single expression across all components, so
/// `cube(size=10)` and `cube(size=[10,10,10])` normalize to the same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vector3Param {
    pub x: Box<AstNode>,
    pub y: Box<AstNode>,
    pub z: Box<AstNode>,
}

/// 2D counterpart of [`Vector3Param`], used by `square`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vector2Param {
    pub x: Box<AstNode>,
    pub y: Box<AstNode>,
}

/// Facet-resolution specials (`$fn`, `$fa`, `$fs`).
///
/// Absence is observable: an omitted special stays `None`, it is never
/// defaulted during adaptation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Resolution {
    #[serde(rename = "fn")]
    pub fn_: Option<Box<AstNode>>,
    pub fa: Option<Box<AstNode>>,
    pub fs: Option<Box<AstNode>>,
}

impl Resolution {
    /// True when no special was supplied.
    pub fn is_absent(&self) -> bool {
        self.fn_.is_none() && self.fa.is_none() && self.fs.is_none()
    }
}

/// A node of the adapted AST.
///
/// Structural families:
/// - leaf expressions: `Literal`, `Identifier`, `Unknown`
/// - composite expressions: `Binary`, `Call`, `Vector`, `Range`
/// - geometry, transforms, booleans and control flow statements
///
/// Adaptation is total: a CST node always maps to exactly one `AstNode`,
/// falling back to `Unknown` instead of `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum AstNode {
    Program {
        children: Vec<AstNode>,
        position: Position,
    },

    // ----- expressions -----
    Literal {
        value: LiteralValue,
        position: Position,
    },
    Identifier {
        name: String,
        position: Position,
    },
    Vector {
        elements: Vec<AstNode>,
        position: Position,
    },
    Range {
        start: Box<AstNode>,
        step: Option<Box<AstNode>>,
        end: Box<AstNode>,
        position: Position,
    },
    Binary {
        operator: String,
        left: Box<AstNode>,
        right: Box<AstNode>,
        position: Position,
    },
    Call {
        callee: String,
        arguments: Vec<AstNode>,
        position: Position,
    },

    // ----- 3D primitives -----
    Cube3D {
        size: Vector3Param,
        center: bool,
        position: Position,
    },
    Sphere3D {
        radius: Box<AstNode>,
        resolution: Resolution,
        position: Position,
    },
    Cylinder3D {
        height: Box<AstNode>,
        radius1: Box<AstNode>,
        radius2: Box<AstNode>,
        center: bool,
        resolution: Resolution,
        position: Position,
    },

    // ----- 2D primitives -----
    Circle2D {
        radius: Box<AstNode>,
        resolution: Resolution,
        position: Position,
    },
    Square2D {
        size: Vector2Param,
        center: bool,
        position: Position,
    },
    Polygon2D {
        points: Vec<AstNode>,
        paths: Option<Box<AstNode>>,
        convexity: Option<Box<AstNode>>,
        position: Position,
    },

    // ----- transforms -----
    TranslateTransform {
        vector: Vector3Param,
        children: Vec<AstNode>,
        position: Position,
    },
    RotateTransform {
        /// Per-axis rotation in degrees. A scalar angle normalizes to
        /// `[0, 0, a]` (the language rotates about Z for scalar angles).
        rotation: Vector3Param,
        children: Vec<AstNode>,
        position: Position,
    },
    ScaleTransform {
        vector: Vector3Param,
        children: Vec<AstNode>,
        position: Position,
    },
    MirrorTransform {
        vector: Vector3Param,
        children: Vec<AstNode>,
        position: Position,
    },
    ColorTransform {
        color: Box<AstNode>,
        alpha: Option<Box<AstNode>>,
        children: Vec<AstNode>,
        position: Position,
    },
    LinearExtrudeTransform {
        height: Box<AstNode>,
        center: bool,
        twist: Option<Box<AstNode>>,
        scale: Option<Box<AstNode>>,
        convexity: Option<Box<AstNode>>,
        children: Vec<AstNode>,
        position: Position,
    },
    RotateExtrudeTransform {
        angle: Box<AstNode>,
        convexity: Option<Box<AstNode>>,
        children: Vec<AstNode>,
        position: Position,
    },

    // ----- boolean operations -----
    UnionOperation {
        children: Vec<AstNode>,
        position: Position,
    },
    DifferenceOperation {
        children: Vec<AstNode>,
        position: Position,
    },
    IntersectionOperation {
        children: Vec<AstNode>,
        position: Position,
    },

    // ----- control flow -----
    IfStatement {
        condition: Box<AstNode>,
        then_branch: Vec<AstNode>,
        else_branch: Option<Vec<AstNode>>,
        position: Position,
    },
    ForStatement {
        variable: Box<AstNode>,
        iterable: Box<AstNode>,
        children: Vec<AstNode>,
        position: Position,
    },
    AssignmentStatement {
        left: Box<AstNode>,
        right: Box<AstNode>,
        position: Position,
    },

    /// Fallback node emitted for unrecognized constructs; carries only the
    /// source position.
    Unknown { position: Position },
}

impl AstNode {
    /// Builds a numeric literal, the shape most normalization rules emit.
    pub fn number(value: f64, position: Position) -> Self {
        AstNode::Literal {
            value: LiteralValue::Number(value),
            position,
        }
    }

    /// The source position of this node.
    pub fn position(&self) -> Position {
        match self {
            AstNode::Program { position, .. }
            | AstNode::Literal { position, .. }
            | AstNode::Identifier { position, .. }
            | AstNode::Vector { position, .. }
            | AstNode::Range { position, .. }
            | AstNode::Binary { position, .. }
            | AstNode::Call { position, .. }
            | AstNode::Cube3D { position, .. }
            | AstNode::Sphere3D { position, .. }
            | AstNode::Cylinder3D { position, .. }
            | AstNode::Circle2D { position, .. }
            | AstNode::Square2D { position, .. }
            | AstNode::Polygon2D { position, .. }
            | AstNode::TranslateTransform { position, .. }
            | AstNode::RotateTransform { position, .. }
            | AstNode::ScaleTransform { position, .. }
            | AstNode::MirrorTransform { position, .. }
            | AstNode::ColorTransform { position, .. }
            | AstNode::LinearExtrudeTransform { position, .. }
            | AstNode::RotateExtrudeTransform { position, .. }
            | AstNode::UnionOperation { position, .. }
            | AstNode::DifferenceOperation { position, .. }
            | AstNode::IntersectionOperation { position, .. }
            | AstNode::IfStatement { position, .. }
            | AstNode::ForStatement { position, .. }
            | AstNode::AssignmentStatement { position, .. }
            | AstNode::Unknown { position } => *position,
        }
    }

    /// The canonical kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            AstNode::Program { .. } => NodeKind::Program,
            AstNode::Literal { .. } => NodeKind::LiteralExpression,
            AstNode::Identifier { .. } => NodeKind::IdentifierExpression,
            AstNode::Vector { .. } => NodeKind::VectorExpression,
            AstNode::Range { .. } => NodeKind::RangeExpression,
            AstNode::Binary { .. } => NodeKind::BinaryExpression,
            AstNode::Call { .. } => NodeKind::CallExpression,
            AstNode::Cube3D { .. } => NodeKind::Cube3D,
            AstNode::Sphere3D { .. } => NodeKind::Sphere3D,
            AstNode::Cylinder3D { .. } => NodeKind::Cylinder3D,
            AstNode::Circle2D { .. } => NodeKind::Circle2D,
            AstNode::Square2D { .. } => NodeKind::Square2D,
            AstNode::Polygon2D { .. } => NodeKind::Polygon2D,
            AstNode::TranslateTransform { .. } => NodeKind::TranslateTransform,
            AstNode::RotateTransform { .. } => NodeKind::RotateTransform,
            AstNode::ScaleTransform { .. } => NodeKind::ScaleTransform,
            AstNode::MirrorTransform { .. } => NodeKind::MirrorTransform,
            AstNode::ColorTransform { .. } => NodeKind::ColorTransform,
            AstNode::LinearExtrudeTransform { .. } => NodeKind::LinearExtrudeTransform,
            AstNode::RotateExtrudeTransform { .. } => NodeKind::RotateExtrudeTransform,
            AstNode::UnionOperation { .. } => NodeKind::UnionOperation,
            AstNode::DifferenceOperation { .. } => NodeKind::DifferenceOperation,
            AstNode::IntersectionOperation { .. } => NodeKind::IntersectionOperation,
            AstNode::IfStatement { .. } => NodeKind::IfStatement,
            AstNode::ForStatement { .. } => NodeKind::ForStatement,
            AstNode::AssignmentStatement { .. } => NodeKind::AssignmentStatement,
            AstNode::Unknown { .. } => NodeKind::Unknown,
        }
    }

    /// Returns the numeric value when this node is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AstNode::Literal {
                value: LiteralValue::Number(n),
                ..
            } => Some(*n),
            _ => None,
        }
    }
}
