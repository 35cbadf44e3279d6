// Keypressed Settings Module
// Which keys are tracked and how they are projected onto a direction

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::warn;
use strum::IntoEnumIterator;

use crate::arrows::Layout;
use crate::event::Keyboard;
use crate::parser::{KeyCategory, OneOf};

/// User settings for the tracker
///
/// These settings are loaded from a TOML file (default: ~/.config/keypressed/settings.toml):
///
/// ```toml
/// [keys]
/// categories = ["character", "modifier", "navigation"]
/// uppercase = true
///
/// [direction]
/// layout = "wasd"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Classifier categories, tried in this order
    categories: Vec<KeyCategory>,

    /// Upper-case character keys
    uppercase: bool,

    /// Layout used for direction queries
    layout: Layout,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    keys: Option<KeysSettings>,

    #[serde(default)]
    direction: Option<DirectionSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct KeysSettings {
    #[serde(default)]
    categories: Option<Vec<String>>,

    #[serde(default)]
    uppercase: Option<toml::Value>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct DirectionSettings {
    #[serde(default)]
    layout: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// All nine categories, original case, arrow layout
    pub fn new() -> Self {
        Self {
            categories: KeyCategory::iter().collect(),
            uppercase: false,
            layout: Layout::Arrows,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(keys) = toml_settings.keys {
            if let Some(names) = keys.categories {
                settings.categories = parse_categories(&names)?;
            }
            if let Some(value) = keys.uppercase {
                settings.uppercase = parse_bool_value(&value)?;
            }
        }

        if let Some(direction) = toml_settings.direction {
            if let Some(name) = direction.layout {
                settings.layout = Layout::from_str(&name).map_err(|_| {
                    SettingsError::InvalidValue(format!("Unknown layout '{}'", name))
                })?;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keypressed").join("settings.toml"))
    }

    /// Load from default location (~/.config/keypressed/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    pub fn categories(&self) -> &[KeyCategory] {
        &self.categories
    }

    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Build the classifier these settings describe
    pub fn parser(&self) -> OneOf {
        let categories = self.categories.iter().copied();
        if self.uppercase {
            OneOf::from_categories_upper(categories)
        } else {
            OneOf::from_categories(categories)
        }
    }

    /// Build an empty tracker using [`Settings::parser`]
    pub fn keyboard(&self) -> Keyboard<OneOf> {
        Keyboard::with_parser(self.parser())
    }
}

/// Parse category names, keeping the first occurrence of duplicates
fn parse_categories(names: &[String]) -> Result<Vec<KeyCategory>, SettingsError> {
    let mut categories = Vec::with_capacity(names.len());
    for name in names {
        let category = KeyCategory::from_str(name)
            .map_err(|_| SettingsError::InvalidValue(format!("Unknown key category '{}'", name)))?;
        if categories.contains(&category) {
            warn!("Key category '{}' listed more than once", name);
            continue;
        }
        categories.push(category);
    }
    if categories.is_empty() {
        warn!("No key categories configured, no keys will be tracked");
    }
    Ok(categories)
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Keypressed Settings
# Place this file at: ~/.config/keypressed/settings.toml

[keys]
# Classifier categories, tried in order. Keys outside these are ignored.
# Valid values: "character", "modifier", "whitespace", "navigation",
# "editing", "function", "ui", "phone", "media"
categories = ["character", "modifier", "whitespace", "navigation", "editing", "function", "ui", "phone", "media"]

# Report character keys in upper case ("a" and "A" become the same key)
uppercase = false

[direction]
# Keys used for direction queries: "arrows" or "wasd"
layout = "arrows"
"#
}
