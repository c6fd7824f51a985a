pub mod config;
pub mod candidates;
pub mod resolver;
pub mod loader;
pub mod panel;
pub mod panel_set;
pub mod manifest;
pub mod theme;

// Export layout configuration
pub use config::{ActiveSizing, Length, MenuConfig, OverflowPolicy};

// Export image resolution
pub use candidates::{CandidateUrls, FALLBACK_EXTENSIONS};
pub use resolver::{Attempt, ImageResolver, Resolution, ResolveOutcome};
pub use loader::{DecodedImage, FsImageLoader, ImageLoader, MemoryImageLoader};

// Export panels and layout
pub use panel::{ContentHandle, ImagePresentation, ImageState, Overlay, Panel, PanelContent};
pub use panel_set::{
    compute_layout, BackgroundPosition, LayoutSummary, PanelGeometry, PanelSet, Viewport,
};

// Export startup input
pub use manifest::{MenuManifest, PanelSpec};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_opacity};
