//! Menu layout and image configuration.
//!
//! All layout constants live in an immutable [`MenuConfig`] handed to the
//! [`PanelSet`](crate::PanelSet) at construction. The config is serde-friendly
//! so it can be embedded in a menu manifest.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// A length expressed either in font-relative or absolute units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// Multiple of the root font size
    Em(f32),
    /// Absolute pixels
    Px(f32),
}

impl Length {
    /// Converts to pixels for the given root font size.
    pub fn to_px(self, root_font_size: f32) -> f32 {
        match self {
            Length::Em(em) => em * root_font_size,
            Length::Px(px) => px,
        }
    }

    fn raw(self) -> f32 {
        match self {
            Length::Em(v) | Length::Px(v) => v,
        }
    }
}

/// How the active panel's width is derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveSizing {
    /// `active_fraction * W`
    #[default]
    Fraction,
    /// Whatever is left after every collapsed panel: `W - (n - 1) * collapsed`
    Remainder,
}

/// What to do when the panels do not fit in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the computed geometry and let the renderer clip it.
    #[default]
    Clip,
    /// Shrink the active panel to the space left by the collapsed panels.
    ShrinkActive,
}

/// Immutable configuration for a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Width of every collapsed (inactive) panel
    pub collapsed_width: Length,
    /// Share of the viewport width claimed by the active panel
    pub active_fraction: f32,
    pub active_sizing: ActiveSizing,
    pub overflow: OverflowPolicy,
    /// Prefix joined in front of every candidate image path
    pub image_base: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            collapsed_width: Length::Em(4.0),
            active_fraction: 0.7,
            active_sizing: ActiveSizing::Fraction,
            overflow: OverflowPolicy::Clip,
            image_base: "assets/images".to_string(),
        }
    }
}

impl MenuConfig {
    /// Checks that the numeric options are usable for layout.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.active_fraction > 0.0 && self.active_fraction <= 1.0,
            "active_fraction must be in (0, 1], got {}",
            self.active_fraction
        );
        let collapsed = self.collapsed_width.raw();
        ensure!(
            collapsed.is_finite() && collapsed > 0.0,
            "collapsed_width must be a positive length, got {:?}",
            self.collapsed_width
        );
        Ok(())
    }

    /// Collapsed width in pixels for the given root font size.
    pub fn collapsed_px(&self, root_font_size: f32) -> f32 {
        self.collapsed_width.to_px(root_font_size)
    }
}
