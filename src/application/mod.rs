//! Application layer: intent handlers and services
//!
//! This layer turns user intents into domain transitions and depends on I/O boundary traits.

pub mod error;
pub mod intent;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use intent::{BoardIntent, Outcome, TreeIntent};
