//! Accordion layout of an ordered set of panels.
//!
//! Panels are positioned from a common right edge. [`PanelSet::arrange`]
//! walks the panels from last to first, placing each one's right edge at the
//! running offset and then advancing the offset by the panel's width. The
//! active panel is wide; every other panel gets the fixed collapsed width.
//!
//! ```text
//!   offset: collapsed+active      collapsed        0
//!   | P0 |<------- P1 (active) ------->| P2 |
//! ```
//!
//! Geometry is a pure function of the panel count, the active index, the
//! viewport and the [`MenuConfig`], so arranging twice gives the same result.

use crate::config::{ActiveSizing, MenuConfig, OverflowPolicy};
use crate::panel::Panel;
use anyhow::{ensure, Result};

/// Viewport measurements a layout pass depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Available width in pixels
    pub width: f32,
    /// Root font size in pixels, used for font-relative lengths
    pub root_font_size: f32,
}

impl Viewport {
    pub fn new(width: f32, root_font_size: f32) -> Self {
        Self { width, root_font_size }
    }
}

/// Horizontal background placement for a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundPosition {
    /// Image centered in the panel
    Center,
    /// Image shifted left by this many pixels (the collapsed "peek")
    Offset(f32),
}

/// Computed placement of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub width: f32,
    /// Distance from the container's right edge to the panel's right edge
    pub right_offset: f32,
    pub active: bool,
    /// Width the panel content is laid out at, regardless of the panel width
    pub content_width: f32,
    pub background: BackgroundPosition,
}

/// Aggregate facts about the latest layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutSummary {
    /// Sum of all panel widths
    pub total_width: f32,
    /// True when the panels need more room than the viewport provides
    pub overflow: bool,
}

/// Computes geometry for `count` panels without touching any state.
///
/// `scroll_offsets[i]` is the collapsed background offset of panel `i`; it
/// must have `count` entries.
pub fn compute_layout(
    scroll_offsets: &[i32],
    active_index: usize,
    viewport: Viewport,
    config: &MenuConfig,
) -> (Vec<PanelGeometry>, LayoutSummary) {
    let count = scroll_offsets.len();
    if count == 0 {
        return (Vec::new(), LayoutSummary::default());
    }

    let collapsed_px = config.collapsed_px(viewport.root_font_size);
    let collapsed_total = collapsed_px * (count - 1) as f32;
    let remainder = viewport.width - collapsed_total;

    let requested = match config.active_sizing {
        ActiveSizing::Fraction => viewport.width * config.active_fraction,
        ActiveSizing::Remainder => remainder,
    };
    let overflow = requested + collapsed_total > viewport.width;
    let active_width = match config.overflow {
        OverflowPolicy::ShrinkActive if overflow => remainder,
        _ => requested,
    }
    .max(0.0);

    let mut geometry = vec![
        PanelGeometry {
            width: collapsed_px,
            right_offset: 0.0,
            active: false,
            content_width: active_width,
            background: BackgroundPosition::Center,
        };
        count
    ];

    let mut offset_from_right = 0.0;
    for index in (0..count).rev() {
        let slot = &mut geometry[index];
        slot.right_offset = offset_from_right;
        if index == active_index {
            slot.active = true;
            slot.width = active_width;
            slot.background = BackgroundPosition::Center;
        } else {
            slot.active = false;
            slot.width = collapsed_px;
            slot.background = BackgroundPosition::Offset(-(scroll_offsets[index] as f32));
        }
        offset_from_right += slot.width;
    }

    let summary = LayoutSummary {
        total_width: offset_from_right,
        overflow,
    };
    (geometry, summary)
}

/// An ordered, fixed collection of panels with exactly one active panel.
#[derive(Debug)]
pub struct PanelSet {
    panels: Vec<Panel>,
    active_index: usize,
    config: MenuConfig,
    /// Viewport of the most recent layout pass
    viewport: Option<Viewport>,
    geometry: Vec<PanelGeometry>,
    summary: LayoutSummary,
}

impl PanelSet {
    /// Mounts the panels in display order. The first panel starts active.
    pub fn new(panels: Vec<Panel>, config: MenuConfig) -> Result<Self> {
        ensure!(!panels.is_empty(), "a menu needs at least one panel");
        config.validate()?;

        Ok(Self {
            panels,
            active_index: 0,
            config,
            viewport: None,
            geometry: Vec::new(),
            summary: LayoutSummary::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn panel_mut(&mut self, index: usize) -> Option<&mut Panel> {
        self.panels.get_mut(index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Width used by the most recent layout pass.
    pub fn container_width(&self) -> Option<f32> {
        self.viewport.map(|v| v.width)
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Geometry from the most recent layout pass, one entry per panel.
    pub fn geometry(&self) -> &[PanelGeometry] {
        &self.geometry
    }

    pub fn summary(&self) -> LayoutSummary {
        self.summary
    }

    /// Recomputes every panel's geometry for the given viewport.
    pub fn arrange(&mut self, viewport: Viewport) -> &[PanelGeometry] {
        let offsets: Vec<i32> = self.panels.iter().map(Panel::scroll_offset).collect();
        let (geometry, summary) = compute_layout(&offsets, self.active_index, viewport, &self.config);

        if summary.overflow && !self.summary.overflow {
            log::warn!(
                "Menu overflows viewport: {} panels need {:.0}px of {:.0}px",
                self.panels.len(),
                summary.total_width,
                viewport.width
            );
        }

        self.viewport = Some(viewport);
        self.geometry = geometry;
        self.summary = summary;
        &self.geometry
    }

    /// Re-arranges using the cached viewport. Does nothing before the first pass.
    pub fn relayout(&mut self) {
        if let Some(viewport) = self.viewport {
            self.arrange(viewport);
        }
    }

    /// Makes `index` the active panel and re-arranges.
    ///
    /// Out-of-range indices are ignored. Returns whether the active index changed;
    /// re-activating the active panel still re-arranges and yields identical geometry.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.panels.len() {
            log::warn!("Ignoring activation of panel {} (menu has {})", index, self.panels.len());
            return false;
        }
        let changed = index != self.active_index;
        self.active_index = index;
        if changed {
            log::debug!("Activated panel {} ({})", index, self.panels[index].label());
        }
        self.relayout();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Length;
    use crate::panel::{ContentHandle, PanelContent};

    fn panels(n: usize) -> Vec<Panel> {
        (0..n)
            .map(|i| {
                Panel::new(
                    format!("p{}", i),
                    format!("Panel {}", i),
                    100 * i as i32,
                    ContentHandle::new(PanelContent::default()),
                    None,
                )
            })
            .collect()
    }

    fn px_config(collapsed: f32) -> MenuConfig {
        MenuConfig {
            collapsed_width: Length::Px(collapsed),
            ..MenuConfig::default()
        }
    }

    #[test]
    fn test_empty_menu_rejected() {
        assert!(PanelSet::new(Vec::new(), MenuConfig::default()).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MenuConfig { active_fraction: 2.0, ..MenuConfig::default() };
        assert!(PanelSet::new(panels(2), config).is_err());
    }

    #[test]
    fn test_right_to_left_accumulation() {
        let mut menu = PanelSet::new(panels(3), MenuConfig::default()).unwrap();
        menu.activate(1);
        let geometry = menu.arrange(Viewport::new(1000.0, 16.0)).to_vec();
        let collapsed = 64.0;

        assert_eq!(geometry[2].right_offset, 0.0);
        assert_eq!(geometry[2].width, collapsed);
        assert_eq!(geometry[1].right_offset, collapsed);
        assert_eq!(geometry[1].width, 700.0);
        assert_eq!(geometry[0].right_offset, collapsed + 700.0);
        assert_eq!(geometry[0].width, collapsed);
        assert_eq!(menu.container_width(), Some(1000.0));
    }

    #[test]
    fn test_backgrounds_peek_when_collapsed() {
        let mut menu = PanelSet::new(panels(3), MenuConfig::default()).unwrap();
        let geometry = menu.arrange(Viewport::new(1000.0, 16.0)).to_vec();
        assert_eq!(geometry[0].background, BackgroundPosition::Center);
        assert_eq!(geometry[1].background, BackgroundPosition::Offset(-100.0));
        assert_eq!(geometry[2].background, BackgroundPosition::Offset(-200.0));
        assert!(geometry.iter().all(|g| g.content_width == 700.0));
    }

    #[test]
    fn test_collapsed_width_tracks_font_size() {
        let mut menu = PanelSet::new(panels(2), MenuConfig::default()).unwrap();
        let small = menu.arrange(Viewport::new(1000.0, 10.0))[1].width;
        let large = menu.arrange(Viewport::new(1000.0, 20.0))[1].width;
        assert_eq!(small, 40.0);
        assert_eq!(large, 80.0);
    }

    #[test]
    fn test_arrange_is_idempotent() {
        let mut menu = PanelSet::new(panels(4), MenuConfig::default()).unwrap();
        menu.activate(2);
        let viewport = Viewport::new(1280.0, 14.0);
        let first = menu.arrange(viewport).to_vec();
        let second = menu.arrange(viewport).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reactivating_active_panel_is_noop() {
        let mut menu = PanelSet::new(panels(3), MenuConfig::default()).unwrap();
        menu.arrange(Viewport::new(900.0, 16.0));
        menu.activate(1);
        let before = menu.geometry().to_vec();

        assert!(!menu.activate(1));
        assert_eq!(menu.active_index(), 1);
        assert_eq!(menu.geometry(), before.as_slice());
    }

    #[test]
    fn test_out_of_range_activation_ignored() {
        let mut menu = PanelSet::new(panels(3), MenuConfig::default()).unwrap();
        assert!(!menu.activate(3));
        assert_eq!(menu.active_index(), 0);
    }

    #[test]
    fn test_activate_before_first_arrange_defers_layout() {
        let mut menu = PanelSet::new(panels(3), MenuConfig::default()).unwrap();
        assert!(menu.activate(2));
        assert!(menu.geometry().is_empty());
        menu.arrange(Viewport::new(1000.0, 16.0));
        assert!(menu.geometry()[2].active);
    }

    #[test]
    fn test_remainder_sizing_fills_viewport() {
        let config = MenuConfig {
            active_sizing: ActiveSizing::Remainder,
            ..px_config(50.0)
        };
        let mut menu = PanelSet::new(panels(3), config).unwrap();
        let geometry = menu.arrange(Viewport::new(1000.0, 16.0)).to_vec();
        assert_eq!(geometry[0].width, 900.0);
        assert_eq!(menu.summary().total_width, 1000.0);
        assert!(!menu.summary().overflow);
    }

    #[test]
    fn test_overflow_clip_keeps_requested_width() {
        let mut menu = PanelSet::new(panels(10), px_config(64.0)).unwrap();
        let geometry = menu.arrange(Viewport::new(400.0, 16.0)).to_vec();
        assert_eq!(geometry[0].width, 280.0);
        assert!(menu.summary().overflow);
        assert_eq!(menu.summary().total_width, 280.0 + 9.0 * 64.0);
    }

    #[test]
    fn test_overflow_shrink_active() {
        let config = MenuConfig {
            overflow: OverflowPolicy::ShrinkActive,
            ..px_config(64.0)
        };
        let mut menu = PanelSet::new(panels(4), config.clone()).unwrap();
        let geometry = menu.arrange(Viewport::new(400.0, 16.0)).to_vec();
        assert_eq!(geometry[0].width, 400.0 - 3.0 * 64.0);

        // Collapsed panels alone exceed the viewport: active collapses to zero
        let mut menu = PanelSet::new(panels(10), config).unwrap();
        let geometry = menu.arrange(Viewport::new(400.0, 16.0)).to_vec();
        assert_eq!(geometry[0].width, 0.0);
    }

    #[test]
    fn test_single_panel_menu() {
        let mut menu = PanelSet::new(panels(1), MenuConfig::default()).unwrap();
        let geometry = menu.arrange(Viewport::new(1000.0, 16.0)).to_vec();
        assert_eq!(geometry.len(), 1);
        assert!(geometry[0].active);
        assert_eq!(geometry[0].right_offset, 0.0);
        assert_eq!(geometry[0].width, 700.0);
    }
}
