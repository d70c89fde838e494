//! # scad-ast Crate
//!
//! Converts a tree-sitter style CST (Concrete Syntax Tree) into a typed AST
//! (Abstract Syntax Tree) for a declarative 3D-modeling language. Every AST
//! node carries source position information for diagnostics and editor
//! tooling.
//!
//! ## Architecture
//!
//! ```text
//! Source → external grammar (CST) → scad-ast (AST) → editor features / analysis
//! ```
//!
//! The grammar itself lives outside this crate: the CST arrives as a
//! serialized tree ([`SyntaxNode`]) produced by the external parser, exactly
//! as an editor host would hand it over. Adaptation walks the tree with an
//! explicitly advanced cursor, classifies each node into a canonical
//! [`NodeKind`], and dispatches to a per-construct adapter that normalizes the
//! language's parameter semantics (named/positional arguments, scalar
//! broadcast, diameter→radius conversion, defaults) into a stable
//! [`AstNode`] shape.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scad_ast::{Adapter, AdapterRegistry, SyntaxTree};
//!
//! let tree: SyntaxTree = SyntaxTree::new(serde_json::from_str(json)?);
//! let registry = AdapterRegistry::standard();
//! let ast = Adapter::new(&registry).adapt(&tree)?;
//! ```
//!
//! ## Design Principles
//!
//! - **Typed AST**: All nodes are strongly typed Rust enums/structs
//! - **Source Mapping**: Every node carries a `Position` for diagnostics
//! - **No Evaluation**: Pure syntax transformation, no semantic analysis
//! - **Best Effort**: Malformed constructs recover to permissive defaults or
//!   an `Unknown` node; adaptation never returns "no node"

pub mod adapters;
pub mod ast;
pub mod cst;
pub mod cursor;
pub mod diagnostic;
pub mod driver;
pub mod engine;
pub mod kind;
pub mod position;
pub mod registry;
pub mod span;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports for convenience
pub use ast::{AstNode, LiteralValue, Resolution, Vector2Param, Vector3Param};
pub use cst::{Point, SyntaxNode, SyntaxTree};
pub use cursor::CstCursor;
pub use diagnostic::{collect_diagnostics, Diagnostic, Severity};
pub use driver::{CstParser, DocumentDriver, DocumentState, DriverError, ParseError};
pub use engine::{AdaptContext, AdaptError, Adapter};
pub use kind::{detect_kind, NodeKind};
pub use position::Position;
pub use registry::{AdapterFn, AdapterRegistry};
pub use span::Span;
