//! Theme persistence and application.

use crate::app::{AppState, SettingsCoordinator};
use accordion::theme::DEFAULT_THEME;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference saved by a previous session.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        SettingsCoordinator::load_setting_or(storage, THEME_KEY, DEFAULT_THEME.to_string())
    }

    /// Saves the current theme preference.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        SettingsCoordinator::save_setting(storage, THEME_KEY, &theme_name);
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so a theme switch takes effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let manager = state.theme.theme_manager();
        let theme = manager.theme_or_default(state.theme.current_theme_name());
        let mut visuals = if theme.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        manager.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
