//! # Adapter Registry
//!
//! An immutable mapping from canonical [`NodeKind`] to the adapter function
//! that builds its AST node. The table is built once at startup from the
//! fixed list below and is read-only during traversal; extension happens by
//! adding entries at build time, never by subclassing or runtime mutation.
//!
//! Lookups are total: a kind without an entry resolves to the `Unknown`
//! adapter, which emits a position-only node, so dispatch can never come back
//! empty-handed.

use crate::adapters;
use crate::ast::AstNode;
use crate::engine::{AdaptContext, AdaptError};
use crate::kind::NodeKind;
use std::collections::HashMap;

/// A per-construct adapter: receives the dispatch context (cursor positioned
/// at the matching CST node plus the recursive adapt-a-child capability) and
/// returns exactly one AST node.
pub type AdapterFn = fn(&mut AdaptContext<'_, '_>) -> Result<AstNode, AdaptError>;

/// The kind → adapter dispatch table.
pub struct AdapterRegistry {
    table: HashMap<NodeKind, AdapterFn>,
}

impl AdapterRegistry {
    /// Builds the standard table covering every construct of the language.
    pub fn standard() -> Self {
        let mut table: HashMap<NodeKind, AdapterFn> = HashMap::new();

        table.insert(NodeKind::Program, adapters::program);

        // 3D primitives
        table.insert(NodeKind::Cube3D, adapters::primitives::cube);
        table.insert(NodeKind::Sphere3D, adapters::primitives::sphere);
        table.insert(NodeKind::Cylinder3D, adapters::primitives::cylinder);

        // 2D primitives
        table.insert(NodeKind::Circle2D, adapters::primitives::circle);
        table.insert(NodeKind::Square2D, adapters::primitives::square);
        table.insert(NodeKind::Polygon2D, adapters::primitives::polygon);

        // Transforms
        table.insert(NodeKind::TranslateTransform, adapters::transforms::translate);
        table.insert(NodeKind::RotateTransform, adapters::transforms::rotate);
        table.insert(NodeKind::ScaleTransform, adapters::transforms::scale);
        table.insert(NodeKind::MirrorTransform, adapters::transforms::mirror);
        table.insert(NodeKind::ColorTransform, adapters::transforms::color);
        table.insert(
            NodeKind::LinearExtrudeTransform,
            adapters::transforms::linear_extrude,
        );
        table.insert(
            NodeKind::RotateExtrudeTransform,
            adapters::transforms::rotate_extrude,
        );

        // Boolean operations
        table.insert(NodeKind::UnionOperation, adapters::booleans::union_operation);
        table.insert(
            NodeKind::DifferenceOperation,
            adapters::booleans::difference_operation,
        );
        table.insert(
            NodeKind::IntersectionOperation,
            adapters::booleans::intersection_operation,
        );

        // Control flow
        table.insert(NodeKind::IfStatement, adapters::control_flow::if_statement);
        table.insert(NodeKind::ForStatement, adapters::control_flow::for_statement);
        table.insert(
            NodeKind::AssignmentStatement,
            adapters::control_flow::assignment,
        );

        // Expressions
        table.insert(NodeKind::LiteralExpression, adapters::expressions::literal);
        table.insert(NodeKind::IdentifierExpression, adapters::expressions::identifier);
        table.insert(NodeKind::VectorExpression, adapters::expressions::vector);
        table.insert(NodeKind::RangeExpression, adapters::expressions::range);
        table.insert(NodeKind::BinaryExpression, adapters::expressions::binary);
        table.insert(NodeKind::CallExpression, adapters::expressions::call);

        table.insert(NodeKind::Unknown, adapters::unknown);

        Self { table }
    }

    /// Build-time override or extension. Used by tests and hosts that extend
    /// the language; never called during traversal.
    pub fn with_adapter(mut self, kind: NodeKind, adapter: AdapterFn) -> Self {
        self.table.insert(kind, adapter);
        self
    }

    /// Resolves a kind to its adapter, falling back to the `Unknown` adapter
    /// for kinds without an entry.
    pub fn lookup(&self, kind: NodeKind) -> AdapterFn {
        self.table.get(&kind).copied().unwrap_or(adapters::unknown)
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_all_kinds() {
        let registry = AdapterRegistry::standard();
        for kind in [
            NodeKind::Program,
            NodeKind::Cube3D,
            NodeKind::Sphere3D,
            NodeKind::Cylinder3D,
            NodeKind::Circle2D,
            NodeKind::Square2D,
            NodeKind::Polygon2D,
            NodeKind::TranslateTransform,
            NodeKind::RotateTransform,
            NodeKind::ScaleTransform,
            NodeKind::MirrorTransform,
            NodeKind::ColorTransform,
            NodeKind::LinearExtrudeTransform,
            NodeKind::RotateExtrudeTransform,
            NodeKind::UnionOperation,
            NodeKind::DifferenceOperation,
            NodeKind::IntersectionOperation,
            NodeKind::IfStatement,
            NodeKind::ForStatement,
            NodeKind::AssignmentStatement,
            NodeKind::LiteralExpression,
            NodeKind::IdentifierExpression,
            NodeKind::VectorExpression,
            NodeKind::RangeExpression,
            NodeKind::BinaryExpression,
            NodeKind::CallExpression,
            NodeKind::Unknown,
        ] {
            assert!(registry.table.contains_key(&kind), "missing entry for {kind:?}");
        }
    }

    #[test]
    fn test_with_adapter_overrides() {
        fn stub(ctx: &mut crate::AdaptContext<'_, '_>) -> Result<AstNode, crate::AdaptError> {
            Ok(AstNode::Unknown {
                position: ctx.position(),
            })
        }
        let registry = AdapterRegistry::standard().with_adapter(NodeKind::Cube3D, stub);
        assert_eq!(registry.lookup(NodeKind::Cube3D) as usize, stub as usize);
    }
}
