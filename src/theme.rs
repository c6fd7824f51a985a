//! Color themes for the accordion menu.
//!
//! Each theme covers the window chrome, panel labels, the accent used to mark
//! the active panel, and the overlays drawn while a background image is
//! loading or after it failed.
//!
//! # Examples
//!
//! ```
//! use accordion::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let slate = manager.get_theme("Slate").unwrap();
//! println!("Slate accent: {:?}", slate.colors.accent);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    pub text: Color32,
    pub text_dim: Color32,
    /// Text drawn over panel backgrounds
    pub label: Color32,

    /// Marks the active panel
    pub accent: Color32,
    pub hover: Color32,
    pub border: Color32,

    /// Base color of the placeholder and failure overlays; alpha comes from the panel
    pub overlay: Color32,
    pub error: Color32,
    pub warning: Color32,
}

/// A named theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    /// Served for unknown names
    fallback: Theme,
}

pub const DEFAULT_THEME: &str = "Dark";

impl ThemeManager {
    /// Creates a manager holding every built-in theme
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [dark_theme(), light_theme(), slate_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Sorted theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.accent;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.accent;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark chrome, white labels".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(24, 24, 24),
            panel_background: Color32::from_rgb(32, 32, 32),
            extreme_background: Color32::from_rgb(12, 12, 12),
            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(150, 150, 150),
            label: Color32::WHITE,
            accent: Color32::from_rgb(230, 170, 60),
            hover: Color32::from_rgb(60, 60, 60),
            border: Color32::from_rgb(90, 90, 90),
            overlay: Color32::BLACK,
            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light chrome with a dark overlay".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(250, 248, 244),
            panel_background: Color32::from_rgb(244, 241, 235),
            extreme_background: Color32::WHITE,
            text: Color32::from_rgb(30, 30, 30),
            text_dim: Color32::from_rgb(110, 110, 110),
            label: Color32::WHITE,
            accent: Color32::from_rgb(180, 90, 40),
            hover: Color32::from_rgb(225, 220, 210),
            border: Color32::from_rgb(170, 165, 155),
            overlay: Color32::from_rgb(20, 20, 20),
            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(200, 120, 20),
        },
    }
}

fn slate_theme() -> Theme {
    Theme {
        name: "Slate".to_string(),
        description: "Blue-grey chrome".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#1e2430"),
            panel_background: hex_to_color32("#252c3a"),
            extreme_background: hex_to_color32("#161b24"),
            text: hex_to_color32("#d8dee9"),
            text_dim: hex_to_color32("#7b8598"),
            label: hex_to_color32("#eceff4"),
            accent: hex_to_color32("#88c0d0"),
            hover: hex_to_color32("#3b4252"),
            border: hex_to_color32("#4c566a"),
            overlay: hex_to_color32("#0f131a"),
            error: hex_to_color32("#bf616a"),
            warning: hex_to_color32("#ebcb8b"),
        },
    }
}

/// Converts a hex color string (like "#1e2430") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::BLACK
    }
}

/// Scales a color's brightness (1.0 = unchanged)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgba_unmultiplied(r, g, b, color.a())
}

/// Returns `color` at the given opacity (0.0 to 1.0)
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
