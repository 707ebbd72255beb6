//! Infrastructure layer: I/O boundary traits, providers, seed data and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod fixtures;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use traits::{CatalogProvider, ChildProvider, ChildRequest, FetchError};
