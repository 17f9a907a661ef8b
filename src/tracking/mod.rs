//! Camera and hand-tracker lifecycle.
//!
//! This module owns the start control: it opens the capture device, launches
//! the landmark detector and forwards every detector result into the drawing
//! loop's event channel. Both collaborators sit behind traits so they can be
//! mocked in tests.

pub mod camera;
pub mod dependencies;
pub mod detector;
pub mod types;

mod session;

pub use dependencies::{AlertSink, CameraSource, LandmarkDetector, TrackingDependencies};
pub use session::TrackingSession;
pub use types::{
    CameraConstraints, CameraStream, DetectorHandle, DetectorOptions, StartOutcome, TrackingError,
};
