//! # Serialized CST Types
//!
//! Defines the tree shape received from the external grammar. Parsing happens
//! in the host (editor process or web worker running the grammar); this crate
//! only consumes the serialized result, so it stays free of native parser
//! dependencies.
//!
//! ## Architecture
//!
//! ```text
//! Host: Source → grammar → Serialized CST (JSON)
//! Here: Serialized CST → cursor traversal → typed AST
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scad_ast::{SyntaxNode, SyntaxTree};
//!
//! let root: SyntaxNode = serde_json::from_str(json)?;
//! let tree = SyntaxTree::new(root);
//! let mut cursor = tree.walk();
//! ```

use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Position in source code (row, column). Both are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Zero-based row number
    pub row: usize,
    /// Zero-based column number
    pub column: usize,
}

fn default_named() -> bool {
    true
}

/// A serialized syntax tree node from the external grammar.
///
/// This structure mirrors the host-side `SerializedNode` interface. Children
/// distinguish named (semantic) nodes from anonymous punctuation through
/// `is_named`; semantic lookups go through [`SyntaxNode::named_children`].
///
/// Invariant: the tree is immutable for the lifetime of one parse. A new
/// parse produces an entirely new tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Node type from the grammar (e.g. "source_file", "module_call", "number")
    #[serde(rename = "type")]
    pub node_type: String,

    /// Source text covered by this node
    #[serde(default)]
    pub text: String,

    /// Byte offset where this node starts
    #[serde(rename = "startIndex", default)]
    pub start_index: usize,

    /// Byte offset where this node ends
    #[serde(rename = "endIndex", default)]
    pub end_index: usize,

    /// Start position (row, column)
    #[serde(rename = "startPosition", default)]
    pub start_position: Point,

    /// End position (row, column)
    #[serde(rename = "endPosition", default)]
    pub end_position: Point,

    /// All child nodes, punctuation included, in source order
    #[serde(default)]
    pub children: Vec<SyntaxNode>,

    /// Whether this is a named node in the grammar
    #[serde(rename = "isNamed", default = "default_named")]
    pub is_named: bool,

    /// Field name if this node is a field child (e.g. "name", "value")
    #[serde(rename = "fieldName", default)]
    pub field_name: Option<String>,
}

impl SyntaxNode {
    /// Iterates the named (semantic) children, skipping punctuation.
    pub fn named_children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|c| c.is_named)
    }

    /// Returns the first named child, the discriminator for generic call
    /// wrappers.
    pub fn first_named_child(&self) -> Option<&SyntaxNode> {
        self.named_children().next()
    }

    /// Finds the first child (named or not) with the given type.
    pub fn find_child(&self, node_type: &str) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.node_type == node_type)
    }

    /// Finds the first named child with the given type.
    pub fn find_named_child(&self, node_type: &str) -> Option<&SyntaxNode> {
        self.named_children().find(|c| c.node_type == node_type)
    }

    /// Finds the child carrying the given grammar field name.
    pub fn child_by_field(&self, field: &str) -> Option<&SyntaxNode> {
        self.children
            .iter()
            .find(|c| c.field_name.as_deref() == Some(field))
    }

    /// Gets all children of a specific type.
    pub fn children_by_type<'a>(&'a self, node_type: &'a str) -> impl Iterator<Item = &'a SyntaxNode> {
        self.children.iter().filter(move |c| c.node_type == node_type)
    }

    /// Checks if this node is a syntax error node.
    pub fn is_error(&self) -> bool {
        self.node_type == "ERROR"
    }

    /// Checks if this node was inserted by the grammar's error recovery.
    pub fn is_missing(&self) -> bool {
        self.node_type.starts_with("MISSING")
    }
}

/// An immutable parse result owning the serialized CST.
///
/// The tree is the cursor factory: [`SyntaxTree::walk`] acquires a
/// [`crate::CstCursor`] at the root and [`SyntaxTree::walk_from`] at an
/// arbitrary node. Disposal of every cursor is recorded so the
/// acquire/use/release discipline is observable in tests.
#[derive(Debug)]
pub struct SyntaxTree {
    root: SyntaxNode,
    cursors_disposed: Cell<usize>,
}

impl SyntaxTree {
    /// Wraps a deserialized root node into a traversable tree.
    pub fn new(root: SyntaxNode) -> Self {
        Self {
            root,
            cursors_disposed: Cell::new(0),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Acquires a cursor positioned at the root.
    pub fn walk(&self) -> crate::CstCursor<'_> {
        self.walk_from(&self.root)
    }

    /// Acquires a temporary cursor positioned at an arbitrary node of this
    /// tree. The cursor cannot climb above `node`.
    pub fn walk_from<'t>(&'t self, node: &'t SyntaxNode) -> crate::CstCursor<'t> {
        crate::CstCursor::new(self, node)
    }

    /// Number of cursors released so far. Every acquired cursor counts
    /// exactly once, on success and on error paths alike.
    pub fn cursors_disposed(&self) -> usize {
        self.cursors_disposed.get()
    }

    pub(crate) fn note_cursor_disposed(&self) {
        self.cursors_disposed.set(self.cursors_disposed.get() + 1);
    }
}
