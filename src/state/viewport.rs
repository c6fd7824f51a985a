//! Viewport tracking.
//!
//! egui has no resize event; instead the menu area is measured every frame
//! and compared with the last measurement. A change in width or root font size
//! counts as a resize.

use accordion::Viewport;

/// Last viewport the menu was arranged for.
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    last: Option<Viewport>,
    resize_count: u64,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a measurement and returns true if it differs from the previous one.
    ///
    /// Widths compare exactly, so even a sub-pixel change re-arranges.
    pub fn observe(&mut self, viewport: Viewport) -> bool {
        let changed = self.last != Some(viewport);
        if changed {
            self.last = Some(viewport);
            self.resize_count += 1;
        }
        changed
    }

    /// Forgets the last measurement so the next frame arranges again.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<Viewport> {
        self.last
    }

    /// Number of layout-triggering measurements so far.
    pub fn resize_count(&self) -> u64 {
        self.resize_count
    }
}
