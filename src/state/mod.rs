//! State management modules for the accordion menu.
//!
//! This module contains state-only logic (no UI concerns):
//! - Viewport state (last measured width and font size)
//! - Theme state (theme manager, current theme)
//! - Texture state (uploaded panel backgrounds)

mod viewport;
mod theme_state;
mod textures;

pub use viewport::ViewportState;
pub use theme_state::ThemeState;
pub use textures::{PanelTexture, TextureState};
