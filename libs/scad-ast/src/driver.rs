//! # Document Driver
//!
//! Ties the pipeline together for an editor host: parse the source through a
//! [`CstParser`], sweep the tree for diagnostics, adapt it to an AST, and
//! memoize the whole result per document version.
//!
//! One driver instance serves one document. Concurrent documents get their
//! own driver; there is no shared mutable state between instances.

use crate::ast::AstNode;
use crate::cst::{SyntaxNode, SyntaxTree};
use crate::diagnostic::{collect_diagnostics, Diagnostic};
use crate::engine::{AdaptError, Adapter};
use crate::registry::AdapterRegistry;
use thiserror::Error;

/// Errors produced by the host-side parser.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The host process running the grammar failed.
    #[error("parser host failed: {message}")]
    Host { message: String },
    /// The host returned a tree this crate could not understand.
    #[error("malformed serialized tree: {message}")]
    Malformed { message: String },
}

/// Errors that can escape a document update.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Adapt(#[from] AdaptError),
}

/// The external grammar, abstracted. The host (editor process or web worker)
/// parses the source and hands back the serialized root node.
pub trait CstParser {
    fn parse(&mut self, source: &str) -> Result<SyntaxNode, ParseError>;
}

/// One fully processed document revision.
///
/// Updates replace the state wholesale; the tree, AST and diagnostics of one
/// state always describe the same parse.
#[derive(Debug)]
pub struct DocumentState {
    /// Host-assigned document version, the memoization key.
    pub version: u64,
    pub tree: SyntaxTree,
    pub ast: AstNode,
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-document pipeline driver with version-gated memoization.
pub struct DocumentDriver<P> {
    parser: P,
    registry: AdapterRegistry,
    state: Option<DocumentState>,
}

impl<P: CstParser> DocumentDriver<P> {
    /// Creates a driver with the standard adapter registry.
    pub fn new(parser: P) -> Self {
        Self::with_registry(parser, AdapterRegistry::standard())
    }

    /// Creates a driver with a custom registry (language extensions, tests).
    pub fn with_registry(parser: P, registry: AdapterRegistry) -> Self {
        Self {
            parser,
            registry,
            state: None,
        }
    }

    /// Processes a document revision.
    ///
    /// If `version` matches the memoized state the cached result is returned
    /// without touching the parser; the host guarantees a version uniquely
    /// identifies the document content. Otherwise the source is parsed,
    /// swept for diagnostics and adapted, and the state is replaced
    /// wholesale. On failure the previous state is kept.
    pub fn update(&mut self, source: &str, version: u64) -> Result<&DocumentState, DriverError> {
        if !self.state.as_ref().is_some_and(|s| s.version == version) {
            let root = self.parser.parse(source)?;
            let tree = SyntaxTree::new(root);
            let diagnostics = collect_diagnostics(&tree);
            let ast = Adapter::new(&self.registry).adapt(&tree)?;
            self.state = Some(DocumentState {
                version,
                tree,
                ast,
                diagnostics,
            });
        }
        match self.state.as_ref() {
            Some(state) => Ok(state),
            None => unreachable!("state stored above"),
        }
    }

    /// The most recent successfully processed state, if any.
    pub fn state(&self) -> Option<&DocumentState> {
        self.state.as_ref()
    }

    /// The most recent AST, if any.
    pub fn ast(&self) -> Option<&AstNode> {
        self.state.as_ref().map(|s| &s.ast)
    }

    /// The most recent parse tree, if any.
    pub fn tree(&self) -> Option<&SyntaxTree> {
        self.state.as_ref().map(|s| &s.tree)
    }

    /// Drops the memoized state, forcing the next update to reparse.
    pub fn invalidate(&mut self) {
        self.state = None;
    }
}
