//! # Theme
//!
//! Flat, unvalidated style defaults. Any string is accepted for colors, fonts
//! and lengths; a bad CSS value simply renders the way the client decides.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BODY_FONT: &str =
    "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub spacing: ThemeSpacing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSpacing {
    pub section: String,
    pub element: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::classic()
    }
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: "Georgia, serif".to_string(),
            body: DEFAULT_BODY_FONT.to_string(),
        }
    }
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        SpacingPreset::Normal.spacing()
    }
}

impl ThemeColors {
    fn palette(primary: &str, secondary: &str, background: &str, text: &str, accent: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            background: background.to_string(),
            text: text.to_string(),
            accent: accent.to_string(),
        }
    }

    pub fn classic() -> Self {
        Self::palette("#000000", "#666666", "#ffffff", "#333333", "#0066cc")
    }

    pub fn modern_blue() -> Self {
        Self::palette("#1a73e8", "#5f6368", "#ffffff", "#202124", "#1967d2")
    }

    pub fn warm_earth() -> Self {
        Self::palette("#8b4513", "#a0522d", "#faf8f5", "#3e2723", "#d2691e")
    }

    pub fn dark_mode() -> Self {
        Self::palette("#bb86fc", "#03dac6", "#121212", "#e1e1e1", "#cf6679")
    }

    pub const PRESET_NAMES: [&'static str; 4] = ["Classic", "Modern Blue", "Warm Earth", "Dark Mode"];

    /// Look up a color preset by name, ignoring case, spaces, `-` and `_`
    pub fn preset(name: &str) -> Option<Self> {
        match normalize(name).as_str() {
            "classic" => Some(Self::classic()),
            "modernblue" => Some(Self::modern_blue()),
            "warmearth" => Some(Self::warm_earth()),
            "darkmode" => Some(Self::dark_mode()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingPreset {
    Compact,
    Normal,
    Comfortable,
    Spacious,
}

impl SpacingPreset {
    pub const ALL: [SpacingPreset; 4] = [
        SpacingPreset::Compact,
        SpacingPreset::Normal,
        SpacingPreset::Comfortable,
        SpacingPreset::Spacious,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpacingPreset::Compact => "Compact",
            SpacingPreset::Normal => "Normal",
            SpacingPreset::Comfortable => "Comfortable",
            SpacingPreset::Spacious => "Spacious",
        }
    }

    pub fn spacing(&self) -> ThemeSpacing {
        let (section, element) = match self {
            SpacingPreset::Compact => ("24px", "12px"),
            SpacingPreset::Normal => ("32px", "16px"),
            SpacingPreset::Comfortable => ("48px", "24px"),
            SpacingPreset::Spacious => ("64px", "32px"),
        };
        ThemeSpacing {
            section: section.to_string(),
            element: element.to_string(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|preset| normalize(preset.label()) == wanted)
    }
}

impl Theme {
    /// Default fonts and spacing with a named color preset
    pub fn with_preset(name: &str) -> Option<Self> {
        ThemeColors::preset(name).map(|colors| Self {
            colors,
            ..Self::default()
        })
    }

    pub fn with_spacing(mut self, preset: SpacingPreset) -> Self {
        self.spacing = preset.spacing();
        self
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        let theme = Theme::default();
        assert_eq!(theme.colors.primary, "#000000");
        assert_eq!(theme.colors.accent, "#0066cc");
        assert_eq!(theme.fonts.heading, "Georgia, serif");
        assert_eq!(theme.spacing.section, "32px");
        assert_eq!(theme.spacing.element, "16px");
    }

    #[test]
    fn test_preset_lookup_is_forgiving() {
        assert_eq!(ThemeColors::preset("Dark Mode"), Some(ThemeColors::dark_mode()));
        assert_eq!(ThemeColors::preset("dark-mode"), Some(ThemeColors::dark_mode()));
        assert_eq!(ThemeColors::preset("MODERN_BLUE"), Some(ThemeColors::modern_blue()));
        assert_eq!(ThemeColors::preset("neon"), None);

        for name in ThemeColors::PRESET_NAMES {
            assert!(ThemeColors::preset(name).is_some(), "{} should resolve", name);
        }
    }

    #[test]
    fn test_spacing_presets() {
        let theme = Theme::default().with_spacing(SpacingPreset::Spacious);
        assert_eq!(theme.spacing.section, "64px");
        assert_eq!(theme.spacing.element, "32px");
        assert_eq!(SpacingPreset::from_name("comfortable"), Some(SpacingPreset::Comfortable));
    }

    #[test]
    fn test_partial_theme_json_fills_defaults() {
        let theme: Theme = serde_json::from_str(r#"{"colors": {"primary": "red"}}"#).unwrap();
        assert_eq!(theme.colors.primary, "red");
        assert_eq!(theme.colors.secondary, "#666666");
        assert_eq!(theme.fonts, ThemeFonts::default());
    }

    #[test]
    fn test_any_string_is_accepted() {
        let theme: Theme =
            serde_json::from_str(r#"{"spacing": {"section": "banana", "element": ""}}"#).unwrap();
        assert_eq!(theme.spacing.section, "banana");
    }
}
