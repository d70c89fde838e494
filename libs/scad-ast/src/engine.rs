//! # Cursor Traversal Engine
//!
//! The single dispatch point of the adaptation subsystem: detect the current
//! node's kind, look the kind up in the [`AdapterRegistry`], invoke the
//! adapter with a cursor positioned at the node, and release the cursor on
//! every exit path.
//!
//! Adapters recurse through [`AdaptContext::adapt_child`], which constructs a
//! temporary cursor over the child node and repeats the same dispatch, so
//! traversal state always lives in explicitly advanced cursors rather than in
//! recursion over raw node handles.
//!
//! ## Failure semantics
//!
//! - A kind with no registered adapter falls back to the `Unknown` adapter;
//!   traversal always terminates with *a* node, never a missing value.
//! - An adapter returning `Err` propagates to the caller, after the cursor
//!   has been released.

use crate::ast::AstNode;
use crate::cst::{SyntaxNode, SyntaxTree};
use crate::cursor::CstCursor;
use crate::kind::{detect_kind, NodeKind};
use crate::position::Position;
use crate::registry::AdapterRegistry;
use thiserror::Error;

/// Errors that can escape adaptation.
///
/// Malformed input never produces one of these: structural mismatches recover
/// to permissive defaults and unrecognized constructs become `Unknown` nodes.
/// An `AdapterFailed` signals a defect inside an adapter, not bad input.
#[derive(Debug, Error)]
pub enum AdaptError {
    /// An adapter reported an internal failure.
    #[error("adapter for {kind:?} failed: {message}")]
    AdapterFailed { kind: NodeKind, message: String },
}

/// The per-dispatch view handed to an adapter.
///
/// Exposes the construct's CST node, the cursor positioned at it, and the
/// recursive adapt-a-child capability. The context is created and destroyed
/// by the engine; adapters never retain it or the cursor past their call.
pub struct AdaptContext<'a, 't> {
    registry: &'a AdapterRegistry,
    tree: &'t SyntaxTree,
    node: &'t SyntaxNode,
    kind: NodeKind,
    cursor: CstCursor<'t>,
}

impl<'a, 't> AdaptContext<'a, 't> {
    /// The CST node this adapter was dispatched on.
    pub fn node(&self) -> &'t SyntaxNode {
        self.node
    }

    /// The canonical kind the node was detected as.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The position spanning the full construct. Taken once per node, not
    /// per-field.
    pub fn position(&self) -> Position {
        Position::of(self.node)
    }

    /// The dispatch cursor, positioned at [`AdaptContext::node`] on entry.
    pub fn cursor(&mut self) -> &mut CstCursor<'t> {
        &mut self.cursor
    }

    /// Acquires a temporary cursor over a descendant node. Dropping it
    /// releases it; it must not outlive the adapter invocation.
    pub fn walk(&self, node: &'t SyntaxNode) -> CstCursor<'t> {
        self.tree.walk_from(node)
    }

    /// Recursively adapts a child node through the same detect → lookup →
    /// invoke pipeline.
    pub fn adapt_child(&self, child: &'t SyntaxNode) -> Result<AstNode, AdaptError> {
        Adapter::new(self.registry).adapt_node(self.tree, child)
    }

    /// Builds an adapter-internal failure tagged with the current kind.
    pub fn fail(&self, message: impl Into<String>) -> AdaptError {
        AdaptError::AdapterFailed {
            kind: self.kind,
            message: message.into(),
        }
    }
}

/// The CST → AST traversal engine. Cheap to construct; borrows the registry
/// for the duration of one adaptation.
#[derive(Clone, Copy)]
pub struct Adapter<'r> {
    registry: &'r AdapterRegistry,
}

impl<'r> Adapter<'r> {
    pub fn new(registry: &'r AdapterRegistry) -> Self {
        Self { registry }
    }

    /// Adapts a whole tree from its root.
    pub fn adapt(&self, tree: &SyntaxTree) -> Result<AstNode, AdaptError> {
        self.adapt_node(tree, tree.root())
    }

    /// Adapts a single node (and, through the adapters, its subtree).
    ///
    /// Acquires a cursor at the node, detects the kind, looks up the adapter
    /// and invokes it. The cursor is released on every exit path; an adapter
    /// error propagates only after release.
    pub fn adapt_node<'t>(
        &self,
        tree: &'t SyntaxTree,
        node: &'t SyntaxNode,
    ) -> Result<AstNode, AdaptError> {
        // Parenthesized expressions are transparent wrappers
        let mut node = node;
        while node.node_type == "parenthesized_expression" {
            match node.first_named_child() {
                Some(inner) => node = inner,
                None => break,
            }
        }

        let kind = detect_kind(node);
        let adapter = self.registry.lookup(kind);

        let mut ctx = AdaptContext {
            registry: self.registry,
            tree,
            node,
            kind,
            cursor: tree.walk_from(node),
        };
        let result = adapter(&mut ctx);
        // Release the cursor before any propagation
        drop(ctx);
        let mut result = result?;

        // Root special case: aggregate all named top-level children into the
        // program's child list, whatever the registered adapter returned for
        // its own fields.
        if kind == NodeKind::Program {
            if let AstNode::Program { children, .. } = &mut result {
                *children = self.collect_program_children(tree, node)?;
            }
        }
        Ok(result)
    }

    /// Iterates the root's named children (punctuation and comments skipped)
    /// in source order.
    fn collect_program_children<'t>(
        &self,
        tree: &'t SyntaxTree,
        node: &'t SyntaxNode,
    ) -> Result<Vec<AstNode>, AdaptError> {
        let mut children = Vec::new();
        let mut cursor = tree.walk_from(node);
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if child.is_named && child.node_type != "comment" && !child.is_error() {
                    children.push(self.adapt_node(tree, child)?);
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        Ok(children)
    }
}
