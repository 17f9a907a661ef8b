//! Data types for camera capture and hand tracking.

use crate::config::{CameraConfig, FacingMode, TrackingConfig};
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Constraints requested from the capture device.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConstraints {
    pub device: PathBuf,
    pub width: u32,
    pub height: u32,
    pub facing_mode: FacingMode,
}

impl From<&CameraConfig> for CameraConstraints {
    fn from(config: &CameraConfig) -> Self {
        Self {
            device: config.device.clone(),
            width: config.width,
            height: config.height,
            facing_mode: config.facing_mode,
        }
    }
}

/// An opened capture device, ready to be handed to the detector.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraStream {
    pub device: PathBuf,
    pub width: u32,
    pub height: u32,
    pub facing_mode: FacingMode,
}

/// Model options passed to the landmark detector.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorOptions {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

impl From<&TrackingConfig> for DetectorOptions {
    fn from(config: &TrackingConfig) -> Self {
        Self {
            max_num_hands: config.max_num_hands,
            model_complexity: config.model_complexity,
            min_detection_confidence: config.min_detection_confidence,
            min_tracking_confidence: config.min_tracking_confidence,
        }
    }
}

/// Errors that can occur while starting or running hand tracking.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("No capture device at {0}")]
    DeviceUnavailable(String),

    #[error("Failed to launch hand tracker: {0}")]
    DetectorSpawn(#[source] std::io::Error),

    #[error("Hand tracker returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("Hand tracker failed: {0}")]
    TrackerFailed(String),

    #[error("Camera I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a start request.
#[derive(Debug)]
pub enum StartOutcome {
    /// Camera opened and detector running.
    Started,
    /// Tracking was already running; nothing changed.
    AlreadyStarted,
    /// Start failed; the session is back in its pre-start state.
    Failed(TrackingError),
}

impl StartOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, StartOutcome::Started)
    }
}

/// Keeps a running detector alive. Dropping the handle stops forwarding.
#[derive(Debug)]
pub struct DetectorHandle {
    task: Option<JoinHandle<()>>,
}

impl DetectorHandle {
    /// Wraps the task forwarding detector results.
    pub fn new(task: JoinHandle<()>) -> Self {
        Self { task: Some(task) }
    }

    /// A handle with no background task, for detectors driven elsewhere.
    pub fn detached() -> Self {
        Self { task: None }
    }
}

impl Drop for DetectorHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
