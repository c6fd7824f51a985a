//! Visual styling of menu panels.
//!
//! Maps a panel's image presentation and interaction state onto theme colors.
//! Nothing here affects layout.

use accordion::{adjust_brightness, with_opacity, ImagePresentation, Overlay, ThemeColors};
use egui::{Color32, Stroke};

/// Color of the overlay drawn over the panel background, if any.
pub fn overlay_color(presentation: &ImagePresentation, colors: &ThemeColors) -> Option<Color32> {
    match presentation.overlay {
        Overlay::None => None,
        Overlay::Placeholder(alpha) | Overlay::Solid(alpha) => Some(with_opacity(colors.overlay, alpha)),
    }
}

/// Base fill under the background image.
pub fn panel_fill(colors: &ThemeColors, hovered: bool) -> Color32 {
    if hovered {
        adjust_brightness(colors.panel_background, 1.25)
    } else {
        colors.panel_background
    }
}

/// Outline separating panels; the active panel is outlined in the accent color.
pub fn panel_stroke(colors: &ThemeColors, active: bool) -> Stroke {
    if active {
        Stroke::new(2.0, colors.accent)
    } else {
        Stroke::new(1.0, colors.border)
    }
}

/// Tint applied to the image at the given fade-in opacity.
pub fn image_tint(opacity: f32) -> Color32 {
    with_opacity(Color32::WHITE, opacity)
}
