//! Centralized theme and styling values for the editor
//!
//! Defaults come from [`crate::constants`]. A theme can be overridden with a
//! JSON file, see [`Theme::discover`].

use crate::constants;
use crate::error::{EditorError, Result};
use egui::Color32;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable naming an explicit theme file
pub const THEME_ENV_VAR: &str = "NODEWIRE_THEME";

/// Color palette for the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    // Node colors
    #[serde(with = "color32_serde")]
    pub node_body: Color32,
    #[serde(with = "color32_serde")]
    pub terminal_idle: Color32,
    #[serde(with = "color32_serde")]
    pub terminal_active: Color32,

    // Connection colors
    #[serde(with = "color32_serde")]
    pub connection: Color32,

    // Canvas colors
    #[serde(with = "color32_serde")]
    pub background: Color32,
    #[serde(with = "color32_serde")]
    pub frame: Color32,
    #[serde(with = "color32_serde")]
    pub button_label: Color32,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            node_body: rgba(constants::node::BODY_COLOR),
            terminal_idle: rgba(constants::node::TERMINAL_COLOR),
            terminal_active: rgba(constants::node::ACTIVE_TERMINAL_COLOR),
            connection: rgba(constants::node::ACTIVE_TERMINAL_COLOR),
            background: rgba(constants::canvas::BACKGROUND_COLOR),
            frame: rgba(constants::canvas::FRAME_COLOR),
            button_label: Color32::WHITE,
        }
    }
}

/// Stroke widths for the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub connection_stroke_width: f32,
    pub frame_stroke_width: f32,
    pub frame_corner_radius: f32,
    pub button_font_size: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            connection_stroke_width: constants::connection::STROKE_WIDTH,
            frame_stroke_width: constants::canvas::FRAME_STROKE_WIDTH,
            frame_corner_radius: 2.5,
            button_font_size: 18.0,
        }
    }
}

/// Complete theme containing all styling values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: Colors,
    pub dimensions: Dimensions,
}

impl Theme {
    /// Parse a theme from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a theme from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EditorError::ThemeLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&content).map_err(|e| EditorError::ThemeLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Find and load the user's theme file.
    ///
    /// `$NODEWIRE_THEME` wins; otherwise `<config dir>/nodewire/theme.json`
    /// is used when it exists. Returns `Ok(None)` when there is nothing to load.
    pub fn discover() -> Result<Option<(PathBuf, Self)>> {
        let path = match std::env::var_os(THEME_ENV_VAR) {
            Some(explicit) => PathBuf::from(explicit),
            None => match default_theme_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    debug!("No theme file found, using built-in theme");
                    return Ok(None);
                }
            },
        };

        let theme = Self::from_json_file(&path)?;
        info!("Loaded theme from {}", path.display());
        Ok(Some((path, theme)))
    }
}

/// Location of the per-user theme file
pub fn default_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nodewire").join("theme.json"))
}

fn rgba([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

static GLOBAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Install the process-wide theme. Only the first call has an effect;
/// returns `false` if a theme was already in place.
pub fn install(theme: Theme) -> bool {
    GLOBAL_THEME.set(theme).is_ok()
}

/// Get the global theme, falling back to the defaults
pub fn theme() -> &'static Theme {
    GLOBAL_THEME.get_or_init(Theme::default)
}

/// Convenience functions for commonly used values
pub fn colors() -> &'static Colors {
    &theme().colors
}

pub fn dimensions() -> &'static Dimensions {
    &theme().dimensions
}

// Serde helper module for Color32
mod color32_serde {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        color.to_srgba_unmultiplied().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [r, g, b, a] = <[u8; 4]>::deserialize(deserializer)?;
        Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
    }
}
