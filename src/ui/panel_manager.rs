//! Window layout: header, status bar and the menu area.

use crate::app::AppState;
use crate::io::AsyncResolver;
use crate::ui::{header, menu_view, status_bar};
use egui::RichText;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a manifest file
    OpenManifestRequested(std::path::PathBuf),
    /// User chose a theme
    ThemeSelected(String),
    /// A menu panel was clicked
    MenuPanelClicked(usize),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole window, called from `eframe::App::update()`.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        resolver: &AsyncResolver,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state.theme.colors().clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenManifestRequested(path) => {
                        PanelInteraction::OpenManifestRequested(path)
                    }
                    header::HeaderInteraction::ThemeSelected(name) => PanelInteraction::ThemeSelected(name),
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, resolver, &theme_colors);
        });

        if let Some(message) = state.error_message.clone() {
            egui::TopBottomPanel::top("error_panel").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(message).color(theme_colors.error));
                    if ui.small_button("✖").clicked() {
                        state.error_message = None;
                    }
                });
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme_colors.background))
            .show(ctx, |ui| {
                if let Some(menu_view::MenuInteraction::PanelClicked(index)) =
                    menu_view::render_menu(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::MenuPanelClicked(index));
                }
            });

        interaction
    }
}
