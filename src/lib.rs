//! In-memory engines behind two interactive widgets.
//!
//! - [`domain::Forest`]: arena-backed forest of named nodes with insert, rename,
//!   delete, move and lazy child installation.
//! - [`domain::Board`]: kanban columns and a flat card list with add, rename,
//!   delete and move.
//!
//! [`application::services`] wrap each engine in a state holder with one
//! handler per user intent; the `treeboard` binary drives them from the terminal.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
