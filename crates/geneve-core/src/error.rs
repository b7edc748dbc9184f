//! Error types for Geneve

use thiserror::Error;

use crate::constraint::Operator;
use crate::kind::FieldKind;

/// A field's committed value cannot satisfy a newly applied constraint.
///
/// Fatal to the field for the current attempt. Whether the whole record is
/// retried is up to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unsolvable constraints: {field} ({operator}): {reason}")]
pub struct ConflictError {
    /// Dotted path of the field being solved.
    pub field: String,
    /// Operator of the constraint that could not be applied.
    pub operator: Operator,
    /// Human readable explanation.
    pub reason: String,
}

impl ConflictError {
    pub fn new(field: impl Into<String>, operator: Operator, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            reason: reason.into(),
        }
    }
}

/// Main error type for Geneve operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneveError {
    /// Constraints on a field contradict each other
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// No solver registered for the field kind
    #[error("no solver registered for field type '{kind}'")]
    NoSolver { kind: FieldKind },

    /// Solver does not handle the constraint operator
    #[error("solver for field type '{kind}' does not support operator '{operator}'")]
    UnsupportedOperator { kind: FieldKind, operator: Operator },

    /// Type name does not map to any known field kind
    #[error("unknown field type: {0}")]
    UnknownFieldKind(String),

    /// Operator spelling not recognised
    #[error("unknown constraint operator: {0}")]
    UnknownOperator(String),

    /// Dotted path is empty or has an empty segment
    #[error("invalid field path: '{0}'")]
    InvalidPath(String),

    /// No node at the path
    #[error("field not found: {path}")]
    NotFound { path: String },

    /// The path names a branch where a leaf was expected
    #[error("not a leaf field: {path}")]
    NotALeaf { path: String },

    /// A proper prefix of the path already holds a leaf value
    #[error("cannot set {path}: {leaf} already holds a value")]
    LeafInPath { path: String, leaf: String },
}

/// Result type alias for Geneve operations
pub type Result<T> = std::result::Result<T, GeneveError>;
