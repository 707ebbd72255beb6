//! User intents and their outcomes
//!
//! Every UI gesture maps to one intent. Handling an intent never fails the
//! caller on a bad reference: the intent is either applied or ignored.

use std::fmt;

use tracing::warn;

use crate::domain::{CardId, ColumnId, DomainError, DomainResult, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeIntent {
    /// Add a node under `parent`, or at the root level when `None`
    Add { parent: Option<NodeId>, name: String },
    Rename { id: NodeId, name: String },
    /// Delete a node and its subtree
    Delete { id: NodeId },
    /// Re-parent a node under `target`, or at the root level when `None`
    Move { id: NodeId, target: Option<NodeId> },
    Toggle { id: NodeId },
    /// Lazily load children, then show them
    Expand { id: NodeId },
}

impl fmt::Display for TreeIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = |id: &Option<NodeId>| id.as_ref().map_or("<root>".to_string(), |i| i.to_string());
        match self {
            TreeIntent::Add { parent, name } => write!(f, "add '{}' under {}", name, root(parent)),
            TreeIntent::Rename { id, name } => write!(f, "rename {} to '{}'", id, name),
            TreeIntent::Delete { id } => write!(f, "delete {}", id),
            TreeIntent::Move { id, target } => write!(f, "move {} to {}", id, root(target)),
            TreeIntent::Toggle { id } => write!(f, "toggle {}", id),
            TreeIntent::Expand { id } => write!(f, "expand {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardIntent {
    Add { column: ColumnId, title: String },
    Rename { id: CardId, title: String },
    Delete { id: CardId },
    Move {
        id: CardId,
        to: ColumnId,
        index: Option<usize>,
    },
}

impl fmt::Display for BoardIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardIntent::Add { column, title } => write!(f, "add '{}' to {}", title, column),
            BoardIntent::Rename { id, title } => write!(f, "rename card {} to '{}'", id, title),
            BoardIntent::Delete { id } => write!(f, "delete card {}", id),
            BoardIntent::Move { id, to, index: None } => write!(f, "move card {} to {}", id, to),
            BoardIntent::Move {
                id,
                to,
                index: Some(i),
            } => write!(f, "move card {} to {} at {}", id, to, i),
        }
    }
}

/// Result of handling an intent. `Ignored` leaves the state unchanged.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Applied(T),
    Ignored(DomainError),
}

impl<T> Outcome<T> {
    /// Convert a domain result, logging the reason when the transition was rejected.
    pub fn from_result(action: &str, result: DomainResult<T>) -> Self {
        match result {
            Ok(value) => Outcome::Applied(value),
            Err(reason) => {
                warn!("{} ignored: {}", action, reason);
                Outcome::Ignored(reason)
            }
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Ignored(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Applied(value) => Outcome::Applied(f(value)),
            Outcome::Ignored(reason) => Outcome::Ignored(reason),
        }
    }
}
