//! Configuration system
//!
//! [`Config`] gives any serde type TOML/RON file loading. [`UiStyle`] carries the
//! sizes, colours and timings the widgets read at draw time.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::{color, Color};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        let config = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        log::info!("Loaded configuration from {path}");
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Visual style shared by all widgets.
///
/// Every field has a default, so a config file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiStyle {
    /// Border inset of the shared panel bitmap, in source pixels
    pub panel_border: u32,

    /// Side length of a checkbox
    pub checkbox_size: f32,
    /// Gap between a checkbox and its label
    pub checkbox_label_gap: f32,
    /// Glyph drawn inside a checked checkbox
    pub checkmark: String,
    /// Offset of the checkmark from the checkbox center
    pub checkmark_offset: (f32, f32),

    /// Height of a single-line text input
    pub text_input_height: f32,
    /// Height of one line of text
    pub line_height: f32,
    /// Horizontal padding before the text of an input
    pub text_padding: f32,
    /// Height of the label row above a labeled text input
    pub label_height: f32,
    /// Number of draw calls between caret blink toggles
    pub blink_period: u32,

    /// Height of a large button
    pub button_height: f32,

    /// Checkbox tint while focused or hovered
    pub checkbox_active: Color,
    /// Checkbox tint otherwise
    pub checkbox_inactive: Color,
    /// Checkmark colour
    pub checkmark_color: Color,
    /// Checkmark colour on a readonly checkbox
    pub checkmark_readonly: Color,
    /// Text input tint while focused
    pub input_focused: Color,
    /// Text input tint otherwise
    pub input_unfocused: Color,
    /// Text colour
    pub text_color: Color,
    /// Placeholder text colour
    pub placeholder_color: Color,
    /// Button background while hovered
    pub button_hover: Color,
    /// Button background otherwise
    pub button_idle: Color,
}

impl Default for UiStyle {
    fn default() -> Self {
        Self {
            panel_border: 6,
            checkbox_size: 24.0,
            checkbox_label_gap: 2.0,
            checkmark: "✓".to_string(),
            checkmark_offset: (2.0, 4.0),
            text_input_height: 36.0,
            line_height: 20.0,
            text_padding: 8.0,
            label_height: 24.0,
            blink_period: 20,
            button_height: 50.0,
            checkbox_active: color::WHITE,
            checkbox_inactive: color::fade(color::WHITE, 0.3),
            checkmark_color: color::WHITE,
            checkmark_readonly: color::fade(color::WHITE, 0.3),
            input_focused: color::WHITE,
            input_unfocused: color::fade(color::WHITE, 0.7),
            text_color: color::WHITE,
            placeholder_color: color::GRAY,
            button_hover: color::rgb8(73, 94, 171),
            button_idle: color::fade(color::rgb8(63, 82, 151), 0.7),
        }
    }
}

impl Config for UiStyle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let style: UiStyle = toml::from_str("blink_period = 10\ncheckbox_size = 30.0\n").unwrap();
        assert_eq!(style.blink_period, 10);
        assert_eq!(style.checkbox_size, 30.0);
        assert_eq!(style.panel_border, 6);
        assert_eq!(style.checkmark, "✓");
    }

    #[test]
    fn test_ron_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!("ui_kit_style_{}.ron", std::process::id()));
        let path = path.to_str().unwrap();

        let mut style = UiStyle::default();
        style.text_padding = 12.0;
        style.save_to_file(path).unwrap();

        let loaded = UiStyle::load_from_file(path).unwrap();
        assert_eq!(loaded, style);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unsupported_extension() {
        let err = UiStyle::default().save_to_file("style.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
