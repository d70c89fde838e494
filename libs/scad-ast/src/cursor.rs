//! # CST Cursor
//!
//! A stateful, explicitly advanced handle into the CST. Traversal state lives
//! in the cursor (an ancestor path), not in recursion over raw node
//! references, so deep trees never grow the call stack during iteration and
//! the handle's release is a single observable event.
//!
//! Release is RAII: dropping the cursor notifies the owning [`SyntaxTree`]
//! exactly once, on every exit path including error propagation out of an
//! adapter. The raw cursor never escapes the traversal call boundary.

use crate::cst::{SyntaxNode, SyntaxTree};

/// An explicitly advanced traversal handle over a [`SyntaxTree`].
///
/// Mirrors the external parser's cursor surface: `node`, `goto_first_child`,
/// `goto_next_sibling`, `goto_parent`. The cursor cannot climb above the node
/// it was acquired at.
///
/// ## Usage
///
/// ```rust,ignore
/// let mut cursor = tree.walk();
/// if cursor.goto_first_child() {
///     loop {
///         inspect(cursor.node());
///         if !cursor.goto_next_sibling() {
///             break;
///         }
///     }
/// }
/// ```
pub struct CstCursor<'t> {
    tree: &'t SyntaxTree,
    /// Ancestors of the current node, paired with the index of the child the
    /// cursor descended into. Empty at the acquisition node.
    path: Vec<(&'t SyntaxNode, usize)>,
    node: &'t SyntaxNode,
}

impl<'t> CstCursor<'t> {
    pub(crate) fn new(tree: &'t SyntaxTree, node: &'t SyntaxNode) -> Self {
        Self {
            tree,
            path: Vec::new(),
            node,
        }
    }

    /// The node the cursor currently points at.
    pub fn node(&self) -> &'t SyntaxNode {
        self.node
    }

    /// Moves to the first child of the current node. Returns `false` (and
    /// stays put) if the node has no children.
    pub fn goto_first_child(&mut self) -> bool {
        match self.node.children.first() {
            Some(child) => {
                self.path.push((self.node, 0));
                self.node = child;
                true
            }
            None => false,
        }
    }

    /// Moves to the next sibling of the current node. Returns `false` at the
    /// last sibling or at the acquisition node.
    pub fn goto_next_sibling(&mut self) -> bool {
        let Some((parent, index)) = self.path.last_mut() else {
            return false;
        };
        match parent.children.get(*index + 1) {
            Some(sibling) => {
                *index += 1;
                self.node = sibling;
                true
            }
            None => false,
        }
    }

    /// Moves back to the parent. Returns `false` at the acquisition node.
    pub fn goto_parent(&mut self) -> bool {
        match self.path.pop() {
            Some((parent, _)) => {
                self.node = parent;
                true
            }
            None => false,
        }
    }
}

impl Drop for CstCursor<'_> {
    fn drop(&mut self) {
        self.tree.note_cursor_disposed();
    }
}

impl std::fmt::Debug for CstCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CstCursor")
            .field("node_type", &self.node.node_type)
            .field("depth", &self.path.len())
            .finish()
    }
}
