use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::input::InputEvent;
use crate::notification;
use crate::tracking::{
    camera::DeviceCamera,
    detector::ProcessDetector,
    types::{CameraConstraints, CameraStream, DetectorHandle, DetectorOptions, TrackingError},
};

/// Abstraction over opening the capture device.
#[async_trait]
pub trait CameraSource: Send + Sync {
    async fn open(&self, constraints: &CameraConstraints) -> Result<CameraStream, TrackingError>;
}

/// Abstraction over the hand-landmark inference engine.
///
/// Once started, the detector sends one [`InputEvent::Hand`] per processed
/// frame, in capture order, until the returned handle is dropped. If it
/// stops on its own it sends [`InputEvent::TrackerStopped`] last.
#[async_trait]
pub trait LandmarkDetector: Send + Sync {
    async fn start(
        &self,
        stream: CameraStream,
        options: &DetectorOptions,
        results: mpsc::Sender<InputEvent>,
    ) -> Result<DetectorHandle, TrackingError>;
}

/// Abstraction over the user-facing alert raised when tracking cannot start.
///
/// Returns once the alert has been delivered (or delivery has failed).
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn alert(&self, summary: &str, body: &str);
}

/// Bundle of collaborators used by the tracking session. Each component can
/// be mocked in tests.
#[derive(Clone)]
pub struct TrackingDependencies {
    pub camera: Arc<dyn CameraSource>,
    pub detector: Arc<dyn LandmarkDetector>,
    pub alert: Arc<dyn AlertSink>,
}

impl TrackingDependencies {
    /// Device camera, tracker process and desktop alert, as configured.
    pub fn from_config(config: &Config) -> Self {
        Self {
            camera: Arc::new(DeviceCamera),
            detector: Arc::new(ProcessDetector::new(config.tracking.command.clone())),
            alert: Arc::new(DesktopAlert),
        }
    }
}

struct DesktopAlert;

#[async_trait]
impl AlertSink for DesktopAlert {
    async fn alert(&self, summary: &str, body: &str) {
        match notification::send_alert(summary, body, "camera-web").await {
            Ok(id) => log::debug!("Camera alert shown (notification {})", id),
            Err(e) => log::warn!("Failed to show camera alert: {}", e),
        }
    }
}
