//! User settings - interaction thresholds and render styling.
//!
//! Settings live in a JSON file under the platform config directory. Every
//! field has a default, so a partial file (or `{}`) is valid.

use crate::constants::{
    MARKER_FILL_COLOR, MARKER_RADIUS, MARKER_STROKE_COLOR, MARKER_STROKE_WIDTH,
    MIN_RECTANGLE_SIZE, PROXIMITY_THRESHOLD, RECT_FILL_COLOR, RECT_STROKE_COLOR,
    RECT_STROKE_WIDTH, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Straight-alpha RGBA color, serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

/// Colors and stroke widths used by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub rect_fill: Rgba,
    pub rect_stroke: Rgba,
    pub rect_stroke_width: f32,
    pub marker_radius: f32,
    pub marker_fill: Rgba,
    pub marker_stroke: Rgba,
    pub marker_stroke_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            rect_fill: Rgba(RECT_FILL_COLOR),
            rect_stroke: Rgba(RECT_STROKE_COLOR),
            rect_stroke_width: RECT_STROKE_WIDTH,
            marker_radius: MARKER_RADIUS,
            marker_fill: Rgba(MARKER_FILL_COLOR),
            marker_stroke: Rgba(MARKER_STROKE_COLOR),
            marker_stroke_width: MARKER_STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-axis distance under which the pointer is "on" a corner
    pub proximity_threshold: f32,
    /// Smallest width and height a new rectangle may have
    pub min_rectangle_size: f32,
    pub style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proximity_threshold: PROXIMITY_THRESHOLD,
            min_rectangle_size: MIN_RECTANGLE_SIZE,
            style: RenderStyle::default(),
        }
    }
}

impl Settings {
    /// Read and validate settings from `path`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`Settings::load`], falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate and write as pretty JSON, creating the parent directory.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "Settings saved");
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        positive("proximity_threshold", self.proximity_threshold)?;
        positive("min_rectangle_size", self.min_rectangle_size)?;
        positive("style.marker_radius", self.style.marker_radius)?;
        non_negative("style.rect_stroke_width", self.style.rect_stroke_width)?;
        non_negative("style.marker_stroke_width", self.style.marker_stroke_width)?;
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be a positive number, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")))
    }
}

/// `<config dir>/annoboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
