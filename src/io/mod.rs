//! I/O modules for background image resolution.

pub mod resolution_state;
pub mod async_resolver;

// Re-export commonly used types
pub use resolution_state::ResolutionState;
pub use async_resolver::{AsyncResolver, ResolvedImage, SharedLoader};
