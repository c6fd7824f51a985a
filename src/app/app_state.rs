//! Centralized application state for the accordion menu.
//!
//! The state is composed of focused components, each keeping its own
//! invariants. The menu itself ([`PanelSet`]) owns the active index; nothing
//! else stores which panel is expanded.

use accordion::{MenuManifest, PanelSet, Viewport};
use anyhow::Result;
use std::path::PathBuf;
use crate::state::{TextureState, ThemeState, ViewportState};

/// Main application state.
pub struct AppState {
    /// The mounted menu and its layout
    pub menu: PanelSet,

    /// Manifest file the menu came from (None for the built-in roster)
    pub manifest_path: Option<PathBuf>,

    /// Last measured menu area
    pub viewport: ViewportState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Uploaded panel backgrounds
    pub textures: TextureState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates state around the built-in roster.
    pub fn new() -> Result<Self> {
        Self::with_theme(MenuManifest::builtin(), None, ThemeState::new())
    }

    /// Creates state for a manifest with a specific theme.
    pub fn with_theme(manifest: MenuManifest, manifest_path: Option<PathBuf>, theme: ThemeState) -> Result<Self> {
        let menu = PanelSet::new(manifest.build_panels(), manifest.config)?;
        Ok(Self {
            menu,
            manifest_path,
            viewport: ViewportState::new(),
            theme,
            textures: TextureState::new(),
            error_message: None,
        })
    }

    // ===== High-Level Coordination Methods =====

    /// Replaces the mounted menu.
    ///
    /// Clears textures and forces a layout pass on the next measured frame.
    pub fn replace_menu(&mut self, menu: PanelSet, manifest_path: Option<PathBuf>) {
        self.menu = menu;
        self.manifest_path = manifest_path;
        self.textures.clear();
        self.viewport.invalidate();
        self.error_message = None;
    }

    /// Arranges the menu if the measured viewport changed since the last pass.
    ///
    /// Returns true if a layout pass ran.
    pub fn sync_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport.observe(viewport) {
            self.menu.arrange(viewport);
            true
        } else {
            false
        }
    }
}
