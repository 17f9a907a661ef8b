use tokio::sync::mpsc;

use super::dependencies::TrackingDependencies;
use super::types::{
    CameraConstraints, DetectorHandle, DetectorOptions, StartOutcome, TrackingError,
};
use crate::input::InputEvent;
use crate::status::StatusLine;

const ALERT_SUMMARY: &str = "Airscriber";
const ALERT_BODY: &str = "Camera access failed. Please check your permissions and try again.";
const STOPPED_MESSAGE: &str = "Hand tracking stopped. Send 'start' to resume.";

/// Camera and detector lifecycle behind the start control.
pub struct TrackingSession {
    dependencies: TrackingDependencies,
    constraints: CameraConstraints,
    options: DetectorOptions,
    detector: Option<DetectorHandle>,
}

impl TrackingSession {
    pub fn new(
        dependencies: TrackingDependencies,
        constraints: CameraConstraints,
        options: DetectorOptions,
    ) -> Self {
        Self {
            dependencies,
            constraints,
            options,
            detector: None,
        }
    }

    /// True once a start request has succeeded. A detector that exits later
    /// does not reset this.
    pub fn is_started(&self) -> bool {
        self.detector.is_some()
    }

    /// Requests the camera and launches the detector, reporting progress
    /// through `status`.
    ///
    /// On failure the session stays unstarted and a single alert is raised;
    /// a later call is a fresh attempt.
    pub async fn start(
        &mut self,
        status: &mut StatusLine,
        results: mpsc::Sender<InputEvent>,
    ) -> StartOutcome {
        if self.is_started() {
            status.update("Camera already started");
            return StartOutcome::AlreadyStarted;
        }

        status.update("Requesting camera access...");

        let stream = match self.dependencies.camera.open(&self.constraints).await {
            Ok(stream) => stream,
            Err(e) => return self.fail(status, e).await,
        };

        status.update("Camera accessed successfully. Initializing hand tracking...");

        match self
            .dependencies
            .detector
            .start(stream, &self.options, results)
            .await
        {
            Ok(handle) => {
                self.detector = Some(handle);
                status.update("Hand tracking active! Point with your index finger to draw.");
                StartOutcome::Started
            }
            Err(e) => self.fail(status, e).await,
        }
    }

    /// Stops forwarding detector results.
    pub fn stop(&mut self) {
        if self.detector.take().is_some() {
            log::info!("Hand tracking stopped");
        }
    }

    /// Handles the detector ending on its own. The session returns to its
    /// pre-start state; a failure is reported like a failed start.
    pub async fn tracker_stopped(&mut self, status: &mut StatusLine, failure: Option<String>) {
        if self.detector.take().is_none() {
            log::debug!("Ignoring stop from a detector that is no longer running");
            return;
        }

        match failure {
            Some(reason) => {
                self.fail(status, TrackingError::TrackerFailed(reason)).await;
            }
            None => status.update(STOPPED_MESSAGE),
        }
    }

    async fn fail(&self, status: &mut StatusLine, error: TrackingError) -> StartOutcome {
        log::error!("Hand tracking unavailable: {}", error);
        status.update("Camera access failed. Please check permissions.");
        self.dependencies.alert.alert(ALERT_SUMMARY, ALERT_BODY).await;
        StartOutcome::Failed(error)
    }
}
