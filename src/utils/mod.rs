//! Utility modules for the accordion menu.

pub mod formatting;
pub mod geometry;

// Re-export commonly used functions
pub use formatting::{format_image_summary, format_memory_mb, get_current_memory_mb};
pub use geometry::{background_uv, panel_rect};
