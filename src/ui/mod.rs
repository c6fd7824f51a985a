//! UI panel modules.
//!
//! - `panel_manager` - Window layout and interaction routing
//! - `header` - Top bar with file and theme controls
//! - `menu_view` - The accordion menu itself
//! - `status_bar` - Bottom status line

pub mod panel_manager;
pub mod header;
pub mod menu_view;
pub mod status_bar;
