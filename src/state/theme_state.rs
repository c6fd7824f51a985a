//! Theme and styling state management.

use accordion::theme::{ThemeColors, DEFAULT_THEME};
use accordion::ThemeManager;

/// Theme registry plus the user's current choice.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a theme state with the default theme.
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }

    /// Creates a theme state with a specific theme; unknown names fall back to the default.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            log::warn!("Unknown theme {:?}, using {}", theme_name, DEFAULT_THEME);
            DEFAULT_THEME.to_string()
        };
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Palette of the current theme.
    pub fn colors(&self) -> &ThemeColors {
        &self.theme_manager.theme_or_default(&self.current_theme_name).colors
    }

    /// Switches themes; returns false for an unknown name.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.theme_manager.get_theme(theme_name).is_none() {
            return false;
        }
        self.current_theme_name = theme_name.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let state = ThemeState::with_theme("Neon".to_string());
        assert_eq!(state.current_theme_name(), DEFAULT_THEME);
    }

    #[test]
    fn test_set_theme() {
        let mut state = ThemeState::new();
        assert!(state.set_theme("Slate"));
        assert!(!state.set_theme("Neon"));
        assert_eq!(state.current_theme_name(), "Slate");
    }
}
