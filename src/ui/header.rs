//! Header panel UI rendering
//!
//! Handles the top bar with the menu file control and theme selector.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a manifest file to open
    OpenManifestRequested(PathBuf),
    /// User picked a different theme
    ThemeSelected(String),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📂 Open Menu…").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Menu Manifests", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenManifestRequested(path));
            }
        }

        ui.separator();

        let source = state
            .manifest_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "Built-in roster".to_string());
        ui.label(source);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current = state.theme.current_theme_name().to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current)
                .show_ui(ui, |ui| {
                    for name in state.theme.theme_manager().list_themes() {
                        if ui.selectable_label(name == current, name).clicked() && name != current {
                            interaction = Some(HeaderInteraction::ThemeSelected(name.to_string()));
                        }
                    }
                });
            ui.label("Theme:");
        });
    });

    interaction
}
