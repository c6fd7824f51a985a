//! Menu manifest: the fixed list of panels supplied at startup.
//!
//! A manifest is a JSON document:
//!
//! ```json
//! {
//!   "config": { "collapsed_width": { "em": 4.0 }, "image_base": "assets/images" },
//!   "panels": [
//!     { "label": "Sam", "image_id": "sam", "scroll_offset": 600,
//!       "preferred_extension": ".png",
//!       "content": { "heading": "Sam", "paragraphs": ["..."] } }
//!   ]
//! }
//! ```

use crate::config::MenuConfig;
use crate::panel::{ContentHandle, Panel, PanelContent};
use anyhow::{ensure, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One panel entry of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub label: String,
    pub image_id: String,
    #[serde(default)]
    pub scroll_offset: i32,
    #[serde(default)]
    pub preferred_extension: Option<String>,
    #[serde(default)]
    pub content: PanelContent,
}

impl PanelSpec {
    /// Builds the panel, handing it its own content region.
    pub fn into_panel(self) -> Panel {
        Panel::new(
            self.image_id,
            self.label,
            self.scroll_offset,
            ContentHandle::new(self.content),
            self.preferred_extension,
        )
    }
}

/// Ordered panels plus the layout configuration they are shown with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuManifest {
    #[serde(default)]
    pub config: MenuConfig,
    pub panels: Vec<PanelSpec>,
}

static BUILTIN: Lazy<MenuManifest> = Lazy::new(|| {
    let roster: [(&str, &str, i32, &str); 6] = [
        ("The Bizleys", "bizleys", 420, "The whole family, all in one place."),
        ("Sam", "sam", 600, "Sam keeps the lights on and the kettle warm."),
        ("Claire", "Claire", 500, "Claire plans the adventures."),
        ("Matt", "Matt", 480, "Matt fixes what Sam breaks."),
        ("Abigail", "Abigail", 360, "Abigail paints and draws."),
        ("Kyran", "Kyran", 520, "Kyran is always outside."),
    ];

    MenuManifest {
        config: MenuConfig::default(),
        panels: roster
            .iter()
            .map(|(label, image_id, offset, blurb)| PanelSpec {
                label: label.to_string(),
                image_id: image_id.to_string(),
                scroll_offset: *offset,
                preferred_extension: Some(".png".to_string()),
                content: PanelContent {
                    heading: label.to_string(),
                    paragraphs: vec![blurb.to_string()],
                },
            })
            .collect(),
    }
});

impl MenuManifest {
    /// The roster shown when no manifest file is supplied.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parses and validates a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: MenuManifest = serde_json::from_str(text).context("parsing menu manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reads a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading menu manifest {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Checks the manifest can be mounted as a menu.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.panels.is_empty(), "manifest lists no panels");
        for (index, spec) in self.panels.iter().enumerate() {
            ensure!(
                !spec.image_id.trim().is_empty(),
                "panel {} ({:?}) has an empty image_id",
                index,
                spec.label
            );
        }
        self.config.validate()
    }

    /// Builds the panels in display order.
    pub fn build_panels(&self) -> Vec<Panel> {
        self.panels.iter().cloned().map(PanelSpec::into_panel).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Length;

    #[test]
    fn test_builtin_roster() {
        let manifest = MenuManifest::builtin();
        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.panels.len(), 6);
        assert_eq!(manifest.panels[2].image_id, "Claire");
        assert_eq!(manifest.panels[2].scroll_offset, 500);
    }

    #[test]
    fn test_minimal_json() {
        let manifest = MenuManifest::from_json(
            r#"{"panels": [{"label": "Sam", "image_id": "sam"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.config, MenuConfig::default());
        assert_eq!(manifest.panels[0].scroll_offset, 0);
        assert_eq!(manifest.panels[0].preferred_extension, None);
    }

    #[test]
    fn test_config_embedded() {
        let manifest = MenuManifest::from_json(
            r#"{"config": {"collapsed_width": {"px": 32.0}},
                "panels": [{"label": "Sam", "image_id": "sam", "scroll_offset": 12}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.config.collapsed_width, Length::Px(32.0));
    }

    #[test]
    fn test_rejects_empty_panels() {
        assert!(MenuManifest::from_json(r#"{"panels": []}"#).is_err());
    }

    #[test]
    fn test_rejects_blank_image_id() {
        let err = MenuManifest::from_json(r#"{"panels": [{"label": "Sam", "image_id": " "}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("image_id"));
    }

    #[test]
    fn test_build_panels_keeps_order() {
        let panels = MenuManifest::builtin().build_panels();
        let labels: Vec<&str> = panels.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["The Bizleys", "Sam", "Claire", "Matt", "Abigail", "Kyran"]);
        assert_eq!(panels[0].id(), "bizleys");
    }
}
