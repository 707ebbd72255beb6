//! Application services
//!
//! State holders that own one engine each and expose one handler per user intent.
//! Services depend on I/O boundary traits (ChildProvider)
//! but are themselves concrete structs, not traits.

mod board;
mod tree;

pub use board::BoardService;
pub use tree::TreeService;
