//! GPU textures for resolved panel backgrounds.

use std::collections::HashMap;

/// A panel background uploaded to the GPU.
pub struct PanelTexture {
    pub handle: egui::TextureHandle,
    /// Source image size in pixels
    pub size: egui::Vec2,
}

/// Textures keyed by panel index.
#[derive(Default)]
pub struct TextureState {
    textures: HashMap<usize, PanelTexture>,
}

impl TextureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, panel_index: usize, texture: PanelTexture) {
        self.textures.insert(panel_index, texture);
    }

    pub fn get(&self, panel_index: usize) -> Option<&PanelTexture> {
        self.textures.get(&panel_index)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Drops every texture (egui frees them with the last handle).
    pub fn clear(&mut self) {
        self.textures.clear();
    }
}
