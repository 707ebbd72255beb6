//! Domain layer: entities and state-transition engines
//!
//! This layer is independent of external concerns (no I/O, no async, no config loading).

pub mod board;
pub mod entities;
pub mod error;
pub mod forest;

pub use board::Board;
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use forest::{Forest, TreeNode};
