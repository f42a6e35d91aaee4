//! Error types for descriptor parsing, interpretation and mesh construction.

use crate::mesh::VertexId;
use thiserror::Error;

/// Errors raised while parsing a grammar descriptor.
///
/// A malformed descriptor never produces partial output: the parser fails
/// before any rewriting or mesh generation is attempted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The descriptor ended before all three header numbers were read.
    #[error("descriptor header ended after {found} of 3 numbers")]
    MissingHeader { found: usize },

    /// A token in the header position could not be parsed as a number.
    #[error("expected a number in the descriptor header, found {token:?}")]
    InvalidNumber { token: String },

    /// No axiom line appeared before the `@` terminator or end of input.
    #[error("no axiom line found before the end of the descriptor")]
    MissingAxiom,
}

/// Errors raised by the interpreter's branch stack.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// A `]` was encountered with no saved state to restore. Silently
    /// ignoring this would desynchronize every later branch restore, so it
    /// is reported instead.
    #[error("']' without a matching '[' (branch stack empty)")]
    UnmatchedPop,

    /// The branch stack grew past the configured depth limit.
    #[error("branch stack exceeded {limit} saved states")]
    StackOverflow { limit: usize },
}

/// Errors raised when building faces from vertex handles.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OwnershipError {
    /// The face referenced a vertex handle that does not belong to the mesh
    /// it is being created in.
    #[error("face references vertex {vertex:?} outside this mesh ({vertex_count} vertices)")]
    ForeignVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Faces need at least one vertex.
    #[error("a face needs at least one vertex")]
    EmptyFace,
}

/// Top-level error for the full parse → rewrite → interpret pipeline.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GrowthError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    State(#[from] StateError),

    /// Rewriting grows the symbol string multiplicatively per generation;
    /// the pipeline stops once it passes the configured ceiling.
    #[error("rewriting produced {symbols} symbols, over the limit of {limit}")]
    SymbolLimit { symbols: usize, limit: usize },
}
