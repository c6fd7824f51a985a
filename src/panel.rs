//! A single selectable menu panel.
//!
//! A [`Panel`] pairs a pre-existing content region with a background image.
//! The content is owned elsewhere and only referenced through a
//! [`ContentHandle`], which is fixed at construction. The image side is a
//! small state machine driven only by resolution outcomes:
//!
//! ```text
//! Unresolved -> Loading -> Loaded(url)
//!                      \-> Failed
//! ```

use crate::candidates::CandidateUrls;
use crate::resolver::{ImageResolver, ResolveOutcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Static content shown inside a panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelContent {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// Shared reference to a panel's content region.
///
/// Cloning the handle never copies the content.
#[derive(Debug, Clone)]
pub struct ContentHandle(Arc<PanelContent>);

impl ContentHandle {
    pub fn new(content: PanelContent) -> Self {
        Self(Arc::new(content))
    }

    pub fn content(&self) -> &PanelContent {
        &self.0
    }

    /// Returns true if both handles refer to the same content region.
    pub fn same_region(&self, other: &ContentHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Background image status of a panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageState {
    #[default]
    Unresolved,
    Loading,
    Loaded(String),
    Failed,
}

/// Overlay drawn on top of the panel background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    None,
    /// Semi-transparent placeholder while candidates are tried
    Placeholder(f32),
    /// Opaque fill once every candidate failed
    Solid(f32),
}

/// How the background should currently be presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePresentation {
    /// Opacity of the image layer, 0 until an image has loaded
    pub image_opacity: f32,
    pub overlay: Overlay,
}

const PLACEHOLDER_ALPHA: f32 = 0.5;
const FAILED_ALPHA: f32 = 1.0;

/// One selectable region of the menu.
#[derive(Debug, Clone)]
pub struct Panel {
    id: String,
    label: String,
    scroll_offset: i32,
    preferred_extension: Option<String>,
    content: ContentHandle,
    image_state: ImageState,
}

impl Panel {
    /// Creates a panel around an existing content region.
    ///
    /// # Arguments
    /// * `id` - Image identifier used to derive candidate paths
    /// * `label` - Human readable name
    /// * `scroll_offset` - Horizontal background offset in pixels shown while collapsed
    /// * `content` - The content region this panel displays
    /// * `preferred_extension` - Extension tried before the fallback sweep
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        scroll_offset: i32,
        content: ContentHandle,
        preferred_extension: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            scroll_offset,
            preferred_extension,
            content,
            image_state: ImageState::Unresolved,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    pub fn preferred_extension(&self) -> Option<&str> {
        self.preferred_extension.as_deref()
    }

    pub fn content(&self) -> &ContentHandle {
        &self.content
    }

    pub fn image_state(&self) -> &ImageState {
        &self.image_state
    }

    /// Starts image resolution, moving `Unresolved` to `Loading`.
    ///
    /// Returns `None` if resolution has already been started for this panel.
    pub fn begin_image_resolution(&mut self, image_base: &str) -> Option<ImageResolver> {
        if self.image_state != ImageState::Unresolved {
            return None;
        }
        self.image_state = ImageState::Loading;
        let candidates = CandidateUrls::new(image_base, &self.id, self.preferred_extension.as_deref());
        Some(ImageResolver::new(candidates))
    }

    /// Applies a terminal resolution outcome.
    ///
    /// Only a `Loading` panel accepts an outcome; returns whether the state changed.
    pub fn apply_outcome(&mut self, outcome: ResolveOutcome) -> bool {
        if self.image_state != ImageState::Loading {
            return false;
        }
        self.image_state = match outcome {
            ResolveOutcome::Resolved(url) => ImageState::Loaded(url),
            ResolveOutcome::Exhausted => ImageState::Failed,
        };
        true
    }

    /// Current presentation of the background layer.
    pub fn presentation(&self) -> ImagePresentation {
        match self.image_state {
            ImageState::Unresolved | ImageState::Loading => ImagePresentation {
                image_opacity: 0.0,
                overlay: Overlay::Placeholder(PLACEHOLDER_ALPHA),
            },
            ImageState::Loaded(_) => ImagePresentation {
                image_opacity: 1.0,
                overlay: Overlay::None,
            },
            ImageState::Failed => ImagePresentation {
                image_opacity: 0.0,
                overlay: Overlay::Solid(FAILED_ALPHA),
            },
        }
    }
}
