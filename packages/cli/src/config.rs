use anyhow::{anyhow, Result};
use newsletter_converter::{LayoutName, LayoutPreset};
use newsletter_model::{SpacingPreset, Theme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "newsletter.config.json";

/// Newsletter configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Newsletter JSON to read
    pub input: String,

    /// Where exports are written
    pub out_dir: String,

    /// Converter layout preset
    pub layout: LayoutName,

    /// Named color preset, e.g. "Modern Blue"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_preset: Option<String>,

    /// Named spacing preset, e.g. "Comfortable"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_preset: Option<String>,

    /// Full theme; wins over both presets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    /// Template storage directory
    pub templates_dir: String,

    /// Undo levels kept by the editor, 0 for unlimited
    pub history_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: "sample-newsletter.json".to_string(),
            out_dir: "dist".to_string(),
            layout: LayoutName::default(),
            theme_preset: None,
            spacing_preset: None,
            theme: None,
            templates_dir: ".newsletter".to_string(),
            history_depth: 100,
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| anyhow!("Invalid {}: {}", DEFAULT_CONFIG_NAME, e))?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn input_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.input)
    }

    pub fn out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn templates_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.templates_dir)
    }

    pub fn layout_preset(&self) -> LayoutPreset {
        LayoutPreset::named(self.layout)
    }

    /// Theme from the explicit override, or from the named presets
    pub fn theme(&self) -> Result<Theme> {
        if let Some(theme) = &self.theme {
            return Ok(theme.clone());
        }

        let mut theme = match &self.theme_preset {
            Some(name) => Theme::with_preset(name)
                .ok_or_else(|| anyhow!("Unknown theme preset: {}", name))?,
            None => Theme::default(),
        };
        if let Some(name) = &self.spacing_preset {
            let spacing = SpacingPreset::from_name(name)
                .ok_or_else(|| anyhow!("Unknown spacing preset: {}", name))?;
            theme = theme.with_spacing(spacing);
        }
        Ok(theme)
    }
}
