//! # Source Position
//!
//! Line/column coordinates attached to every AST node, copied verbatim from
//! the parser's 0-based row/column convention.
//!
//! ## Usage
//!
//! ```rust
//! use scad_ast::{Point, Position};
//!
//! let pos = Position::from_points(Point { row: 0, column: 0 }, Point { row: 0, column: 8 });
//! assert_eq!(pos.end_column, 8);
//! ```

use crate::cst::{Point, SyntaxNode};
use serde::{Deserialize, Serialize};

/// A line/column range in the source code.
///
/// All fields are zero-based, matching the coordinate convention of the
/// external grammar. Adapters take the position once for the whole construct
/// (identifier through closing body), not per-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line the node starts on.
    pub start_line: usize,
    /// Zero-based column the node starts at.
    pub start_column: usize,
    /// Zero-based line the node ends on.
    pub end_line: usize,
    /// Zero-based column the node ends at (exclusive).
    pub end_column: usize,
}

impl Position {
    /// Builds a position from raw start/end points. Pure and total: fields
    /// are copied verbatim, no validation applies.
    #[inline]
    pub fn from_points(start: Point, end: Point) -> Self {
        Self {
            start_line: start.row,
            start_column: start.column,
            end_line: end.row,
            end_column: end.column,
        }
    }

    /// Extracts the position of a CST node.
    #[inline]
    pub fn of(node: &SyntaxNode) -> Self {
        Self::from_points(node.start_position, node.end_position)
    }
}
