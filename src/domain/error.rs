//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{CardId, ColumnId, NodeId};

/// Domain errors represent rejected state transitions.
/// A rejected transition never leaves the state half-modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("card not found: {0}")]
    CardNotFound(CardId),

    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    #[error("name must not be empty")]
    EmptyName,

    #[error("cannot move {node} into its own subtree at {target}")]
    CycleDetected { node: NodeId, target: NodeId },

    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    #[error("duplicate column id: {0}")]
    DuplicateColumn(ColumnId),

    #[error("column id must not be empty")]
    EmptyColumnId,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
