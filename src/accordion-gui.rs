//! Accordion Profile Menu
//!
//! An egui application showing a row of collapsed panels, each labeled by a
//! lazily loaded background image, that expands to show a panel's content when
//! it is clicked.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Background image resolution
//! - `state/` - Viewport, theme and texture state
//! - `presentation/` - Visual styling (separated from layout)
//! - `ui/` - Panel rendering and interaction
//! - `utils/` - Formatting and screen geometry helpers
//!
//! Layout, image candidate ordering and panel state live in the `accordion` library.

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod presentation;
mod io;
mod app;
mod state;
mod ui;

use accordion::MenuManifest;
use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use io::AsyncResolver;
use state::ThemeState;
use ui::panel_manager::{PanelInteraction, PanelManager};

const MANIFEST_FILE_NAME: &str = "menu.json";

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let manifest_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(default_manifest_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_title("Accordion Profile Menu"),
        ..Default::default()
    };

    eframe::run_native(
        "Accordion Profile Menu",
        options,
        Box::new(move |cc| Ok(Box::new(AccordionApp::new(cc, manifest_path)?))),
    )
}

/// `<config dir>/accordion/menu.json`, when it exists.
fn default_manifest_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("accordion").join(MANIFEST_FILE_NAME);
    path.is_file().then_some(path)
}

/// The Controller: owns the mounted menu and the background resolver.
struct AccordionApp {
    /// Centralized application state
    state: AppState,
    /// Background image resolution
    resolver: AsyncResolver,
    /// Resolution starts on the first frame, once an egui context is available
    needs_resolution: bool,
}

impl AccordionApp {
    /// Mounts the menu from `manifest_path`, falling back to the built-in roster.
    fn new(
        cc: &eframe::CreationContext,
        manifest_path: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let theme = ThemeState::with_theme(ThemeCoordinator::load_theme_from_storage(cc.storage));

        let (manifest, manifest_path, load_error) = match &manifest_path {
            Some(path) => match MenuManifest::load(path) {
                Ok(manifest) => (manifest, Some(path.clone()), None),
                Err(e) => {
                    log::error!("{:#}; showing the built-in roster", e);
                    (MenuManifest::builtin(), None, Some(format!("Error loading menu: {:#}", e)))
                }
            },
            None => (MenuManifest::builtin(), None, None),
        };

        let resolver = AsyncResolver::new(ApplicationCoordinator::loader_for(manifest_path.as_deref()));
        let mut state = AppState::with_theme(manifest, manifest_path, theme)?;
        state.error_message = load_error;

        Ok(Self {
            state,
            resolver,
            needs_resolution: true,
        })
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenManifestRequested(path) => {
                ApplicationCoordinator::open_manifest(&mut self.state, &mut self.resolver, path, Some(ctx));
            }
            PanelInteraction::ThemeSelected(name) => {
                ApplicationCoordinator::select_theme(&mut self.state, &name);
            }
            PanelInteraction::MenuPanelClicked(index) => {
                ApplicationCoordinator::handle_panel_click(&mut self.state, index);
            }
        }
    }
}

impl eframe::App for AccordionApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
    }

    /// Main update loop:
    /// 1. Start image resolution on the first frame
    /// 2. Apply finished resolutions
    /// 3. Apply theme
    /// 4. Render panels (re-arranging on resize) and handle interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if std::mem::take(&mut self.needs_resolution) {
            ApplicationCoordinator::start_image_resolution(&mut self.state, &mut self.resolver, Some(ctx));
        }

        ApplicationCoordinator::check_resolution_completion(&mut self.state, &mut self.resolver, Some(ctx));

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.resolver) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
