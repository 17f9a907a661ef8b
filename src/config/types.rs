//! Configuration type definitions.

use super::enums::{ColorSpec, FacingMode, StatusPosition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Capture device settings.
///
/// The canvas is sized to the capture resolution so normalized landmarks map
/// onto it by plain scaling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CameraConfig {
    /// Video device node handed to the tracker
    #[serde(default = "default_device")]
    pub device: PathBuf,

    /// Capture width in pixels (valid range: 160 - 3840)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Capture height in pixels (valid range: 120 - 2160)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Which camera to prefer (user = front-facing)
    #[serde(default = "default_facing_mode")]
    pub facing_mode: FacingMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: default_device(),
            width: default_width(),
            height: default_height(),
            facing_mode: default_facing_mode(),
        }
    }
}

/// Hand tracker process settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TrackingConfig {
    /// Tracker command line (program followed by its arguments). Capture and
    /// model options are appended as flags.
    #[serde(default = "default_tracker_command")]
    pub command: Vec<String>,

    /// Maximum hands reported per frame. Only single-hand tracking is supported.
    #[serde(default = "default_max_num_hands")]
    pub max_num_hands: u32,

    /// Landmark model complexity (0 = lite, 1 = full)
    #[serde(default = "default_model_complexity")]
    pub model_complexity: u32,

    /// Minimum confidence for initial hand detection (0.0 - 1.0)
    #[serde(default = "default_min_detection_confidence")]
    pub min_detection_confidence: f64,

    /// Minimum confidence for frame-to-frame tracking (0.0 - 1.0)
    #[serde(default = "default_min_tracking_confidence")]
    pub min_tracking_confidence: f64,

    /// Pending results buffered between the tracker and the drawing loop
    /// (valid range: 1 - 1024)
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            command: default_tracker_command(),
            max_num_hands: default_max_num_hands(),
            model_complexity: default_model_complexity(),
            min_detection_confidence: default_min_detection_confidence(),
            min_tracking_confidence: default_min_tracking_confidence(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

/// Drawing-related settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Whether drawing input is accepted at startup
    #[serde(default = "default_start_enabled")]
    pub start_enabled: bool,

    /// Stroke color for hand-driven drawing
    #[serde(default = "default_hand_color")]
    pub hand_color: ColorSpec,

    /// Stroke color for mouse-driven drawing
    #[serde(default = "default_mouse_color")]
    pub mouse_color: ColorSpec,

    /// Fill color of the fingertip marker
    #[serde(default = "default_marker_color")]
    pub marker_color: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Fingertip marker radius in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            start_enabled: default_start_enabled(),
            hand_color: default_hand_color(),
            mouse_color: default_mouse_color(),
            marker_color: default_marker_color(),
            stroke_width: default_stroke_width(),
            marker_radius: default_marker_radius(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Paint the status line onto exported images
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_style: StatusBarStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
        }
    }
}

/// Where saved drawings go.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Directory for saved PNG files (`~/` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_device() -> PathBuf {
    PathBuf::from("/dev/video0")
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_facing_mode() -> FacingMode {
    FacingMode::User
}

fn default_tracker_command() -> Vec<String> {
    vec![
        "python3".to_string(),
        "-m".to_string(),
        "airscriber_tracker".to_string(),
    ]
}

fn default_max_num_hands() -> u32 {
    1
}

fn default_model_complexity() -> u32 {
    1
}

fn default_min_detection_confidence() -> f64 {
    0.7
}

fn default_min_tracking_confidence() -> f64 {
    0.5
}

fn default_channel_capacity() -> usize {
    32
}

fn default_start_enabled() -> bool {
    true
}

fn default_hand_color() -> ColorSpec {
    ColorSpec::Rgb([0, 255, 0])
}

fn default_mouse_color() -> ColorSpec {
    ColorSpec::Rgb([0, 153, 255])
}

fn default_marker_color() -> ColorSpec {
    ColorSpec::Rgb([255, 0, 0])
}

fn default_stroke_width() -> f64 {
    3.0
}

fn default_marker_radius() -> f64 {
    8.0
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

fn default_status_font_size() -> f64 {
    16.0
}

fn default_status_padding() -> f64 {
    12.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.7]
}

fn default_status_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_save_directory() -> String {
    "~/Pictures/Airscriber".to_string()
}

fn default_filename_template() -> String {
    "airscriber_%Y-%m-%d_%H%M%S".to_string()
}
