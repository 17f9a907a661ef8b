//! Capture device access.

use async_trait::async_trait;
use std::io::ErrorKind;

use super::dependencies::CameraSource;
use super::types::{CameraConstraints, CameraStream, TrackingError};

/// Video device node opened directly from the filesystem.
///
/// Opening the node is the permission check: the frames themselves are read
/// by the tracker process.
pub struct DeviceCamera;

#[async_trait]
impl CameraSource for DeviceCamera {
    async fn open(&self, constraints: &CameraConstraints) -> Result<CameraStream, TrackingError> {
        log::debug!(
            "Opening {} ({}x{}, facing {})",
            constraints.device.display(),
            constraints.width,
            constraints.height,
            constraints.facing_mode.as_str()
        );

        match tokio::fs::OpenOptions::new()
            .read(true)
            .open(&constraints.device)
            .await
        {
            Ok(_) => Ok(CameraStream {
                device: constraints.device.clone(),
                width: constraints.width,
                height: constraints.height,
                facing_mode: constraints.facing_mode,
            }),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(TrackingError::PermissionDenied)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(TrackingError::DeviceUnavailable(
                constraints.device.display().to_string(),
            )),
            Err(e) => Err(TrackingError::Io(e)),
        }
    }
}
