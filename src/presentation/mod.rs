//! Presentation layer for visual styling.
//!
//! Keeps colors and strokes out of the layout and state code.

pub mod panel_style;
