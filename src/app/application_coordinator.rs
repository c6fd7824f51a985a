//! Application-level coordination and workflow management.
//!
//! Handles mounting menus, kicking off image resolution, applying resolution
//! results, and routing panel clicks into the menu.

use crate::app::AppState;
use crate::io::{AsyncResolver, ResolvedImage, SharedLoader};
use crate::state::PanelTexture;
use accordion::{DecodedImage, FsImageLoader, MenuManifest, PanelSet};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Directory candidate image paths are resolved against.
    ///
    /// Manifest-relative when a manifest file is in use, otherwise the working directory.
    pub fn image_root(manifest_path: Option<&Path>) -> PathBuf {
        manifest_path
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Filesystem loader rooted for the given manifest.
    pub fn loader_for(manifest_path: Option<&Path>) -> SharedLoader {
        Arc::new(FsImageLoader::new(Self::image_root(manifest_path)))
    }

    /// Starts background resolution for every panel that has not started yet.
    ///
    /// Returns the number of workers started.
    pub fn start_image_resolution(
        state: &mut AppState,
        resolver: &mut AsyncResolver,
        ctx: Option<&egui::Context>,
    ) -> usize {
        let image_base = state.menu.config().image_base.clone();
        let mut started = 0;
        for index in 0..state.menu.len() {
            let Some(panel) = state.menu.panel_mut(index) else {
                continue;
            };
            if let Some(image_resolver) = panel.begin_image_resolution(&image_base) {
                resolver.start(index, image_resolver, ctx);
                started += 1;
            }
        }
        started
    }

    /// Loads a manifest file and mounts it in place of the current menu.
    ///
    /// On failure the current menu stays mounted and an error message is shown.
    pub fn open_manifest(
        state: &mut AppState,
        resolver: &mut AsyncResolver,
        path: PathBuf,
        ctx: Option<&egui::Context>,
    ) {
        match Self::build_menu(&path) {
            Ok(menu) => {
                log::info!("Mounted menu from {} ({} panels)", path.display(), menu.len());
                resolver.reset(Self::loader_for(Some(&path)));
                state.replace_menu(menu, Some(path));
                Self::start_image_resolution(state, resolver, ctx);
            }
            Err(e) => {
                log::error!("Failed to load menu {}: {:#}", path.display(), e);
                state.error_message = Some(format!("Error loading menu: {:#}", e));
            }
        }
    }

    fn build_menu(path: &Path) -> Result<PanelSet> {
        let manifest = MenuManifest::load(path)?;
        PanelSet::new(manifest.build_panels(), manifest.config)
    }

    /// Applies finished resolutions to panel state and uploads winning images.
    ///
    /// Called once per frame in the update loop. Returns the number of results applied.
    pub fn check_resolution_completion(
        state: &mut AppState,
        resolver: &mut AsyncResolver,
        ctx: Option<&egui::Context>,
    ) -> usize {
        let mut applied = 0;
        for ResolvedImage { panel_index, outcome, image } in resolver.check_completion() {
            let Some(panel) = state.menu.panel_mut(panel_index) else {
                continue;
            };
            if !panel.apply_outcome(outcome) {
                continue;
            }
            applied += 1;

            if let (Some(ctx), Some(image)) = (ctx, image) {
                let texture = Self::upload_texture(ctx, panel_index, &image);
                state.textures.insert(panel_index, texture);
            }
        }
        applied
    }

    fn upload_texture(ctx: &egui::Context, panel_index: usize, image: &DecodedImage) -> PanelTexture {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size, &image.rgba);
        let handle = ctx.load_texture(
            format!("panel-background-{}", panel_index),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        PanelTexture {
            handle,
            size: egui::vec2(image.width() as f32, image.height() as f32),
        }
    }

    /// Handles a click anywhere on a panel: that panel becomes active.
    pub fn handle_panel_click(state: &mut AppState, panel_index: usize) -> bool {
        state.menu.activate(panel_index)
    }

    /// Switches the UI theme.
    pub fn select_theme(state: &mut AppState, theme_name: &str) {
        if !state.theme.set_theme(theme_name) {
            state.error_message = Some(format!("Theme '{}' not found", theme_name));
        }
    }
}
