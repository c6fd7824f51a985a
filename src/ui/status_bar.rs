//! Status bar UI rendering
//!
//! Shows memory use, image resolution progress and the current layout.

use eframe::egui;
use egui::RichText;
use accordion::ThemeColors;
use crate::app::AppState;
use crate::io::AsyncResolver;
use crate::utils::{format_image_summary, format_memory_mb, get_current_memory_mb};

/// Renders the status bar at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `resolver` - Background resolver, for the in-flight count
/// * `colors` - Color palette for the current theme
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, resolver: &AsyncResolver, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format_memory_mb(get_current_memory_mb())).strong());
        ui.label(RichText::new("|").strong());

        let summary = format_image_summary(state.menu.panels().iter().map(|p| p.image_state()));
        ui.label(RichText::new(summary).strong());
        if resolver.is_loading() {
            ui.spinner();
            ui.label(format!("{} in flight", resolver.in_flight()));
        }
        ui.label(format!("({} uploaded)", state.textures.len()));

        ui.label(RichText::new("|").strong());
        let active = state
            .menu
            .panel(state.menu.active_index())
            .map(|p| p.label())
            .unwrap_or("?");
        ui.label(RichText::new(format!("Active: {}", active)).strong());

        if let Some(viewport) = state.viewport.last() {
            ui.label(RichText::new("|").strong());
            ui.label(
                RichText::new(format!(
                    "Width: {:.0}px @ {:.0}px font, {} layout(s)",
                    viewport.width,
                    viewport.root_font_size,
                    state.viewport.resize_count()
                ))
                .strong(),
            );
        }

        let summary = state.menu.summary();
        if summary.overflow {
            ui.label(RichText::new("|").strong());
            ui.label(
                RichText::new(format!("Overflow: panels need {:.0}px", summary.total_width))
                    .strong()
                    .color(colors.warning),
            );
        }
    });
}
