//! Configuration file support for airscriber.
//!
//! Settings are loaded from `~/.config/airscriber/config.toml`. They cover the
//! capture device, the hand tracker process, stroke styling, the status bar
//! and where saved drawings go.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::{ColorSpec, FacingMode, StatusPosition};
pub use types::{
    CameraConfig, DrawingConfig, OutputConfig, StatusBarStyle, TrackingConfig, UiConfig,
};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [camera]
/// device = "/dev/video0"
/// width = 640
/// height = 480
///
/// [tracking]
/// command = ["python3", "-m", "airscriber_tracker"]
/// min_detection_confidence = 0.7
///
/// [drawing]
/// hand_color = "green"
/// stroke_width = 3.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Capture device settings
    #[serde(default)]
    pub camera: CameraConfig,

    /// Hand tracker process settings
    #[serde(default)]
    pub tracking: TrackingConfig,

    /// Stroke and marker styling
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Status bar preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Save location for drawings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    ///
    /// Validated ranges:
    /// - `camera.width`: 160 - 3840, `camera.height`: 120 - 2160
    /// - `tracking.max_num_hands`: exactly 1
    /// - `tracking.model_complexity`: 0 - 1
    /// - `tracking.*_confidence`: 0.0 - 1.0
    /// - `tracking.channel_capacity`: 1 - 1024
    /// - `drawing.stroke_width`: 1.0 - 20.0
    /// - `drawing.marker_radius`: 1.0 - 50.0
    pub fn validate_and_clamp(&mut self) {
        if !(160..=3840).contains(&self.camera.width) {
            log::warn!(
                "Invalid camera width {}, clamping to 160-3840 range",
                self.camera.width
            );
            self.camera.width = self.camera.width.clamp(160, 3840);
        }

        if !(120..=2160).contains(&self.camera.height) {
            log::warn!(
                "Invalid camera height {}, clamping to 120-2160 range",
                self.camera.height
            );
            self.camera.height = self.camera.height.clamp(120, 2160);
        }

        if self.tracking.max_num_hands != 1 {
            log::warn!(
                "max_num_hands = {} is not supported, tracking a single hand",
                self.tracking.max_num_hands
            );
            self.tracking.max_num_hands = 1;
        }

        if self.tracking.model_complexity > 1 {
            log::warn!(
                "Invalid model_complexity {}, clamping to 1",
                self.tracking.model_complexity
            );
            self.tracking.model_complexity = 1;
        }

        if !(0.0..=1.0).contains(&self.tracking.min_detection_confidence) {
            log::warn!(
                "Invalid min_detection_confidence {:.2}, clamping to 0.0-1.0 range",
                self.tracking.min_detection_confidence
            );
            self.tracking.min_detection_confidence =
                self.tracking.min_detection_confidence.clamp(0.0, 1.0);
        }

        if !(0.0..=1.0).contains(&self.tracking.min_tracking_confidence) {
            log::warn!(
                "Invalid min_tracking_confidence {:.2}, clamping to 0.0-1.0 range",
                self.tracking.min_tracking_confidence
            );
            self.tracking.min_tracking_confidence =
                self.tracking.min_tracking_confidence.clamp(0.0, 1.0);
        }

        if !(1..=1024).contains(&self.tracking.channel_capacity) {
            log::warn!(
                "Invalid channel_capacity {}, clamping to 1-1024 range",
                self.tracking.channel_capacity
            );
            self.tracking.channel_capacity = self.tracking.channel_capacity.clamp(1, 1024);
        }

        if self.tracking.command.is_empty() {
            log::warn!("Empty tracker command, falling back to the default tracker");
            self.tracking.command = TrackingConfig::default().command;
        }

        if !(1.0..=20.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(1.0, 20.0);
        }

        if !(1.0..=50.0).contains(&self.drawing.marker_radius) {
            log::warn!(
                "Invalid marker_radius {:.1}, clamping to 1.0-50.0 range",
                self.drawing.marker_radius
            );
            self.drawing.marker_radius = self.drawing.marker_radius.clamp(1.0, 50.0);
        }

        let style = &mut self.ui.status_bar_style;
        for i in 0..4 {
            style.bg_color[i] = style.bg_color[i].clamp(0.0, 1.0);
            style.text_color[i] = style.text_color[i].clamp(0.0, 1.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("airscriber");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. Loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the bundled `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
