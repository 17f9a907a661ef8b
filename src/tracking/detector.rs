//! Hand-landmark detector running as an external tracker process.
//!
//! The tracker opens the camera itself, runs the landmark model on every
//! frame and prints one JSON object per processed frame:
//!
//! ```json
//! {"hands":[{"handedness":"Right","score":0.98,"landmarks":[{"x":0.51,"y":0.42,"z":-0.03}]}]}
//! ```
//!
//! (`landmarks` holds all 21 points.) A frame without a visible hand has an
//! empty `hands` list. Only the first hand is used.

use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tokio::sync::mpsc;

use super::dependencies::LandmarkDetector;
use super::types::{CameraStream, DetectorHandle, DetectorOptions, TrackingError};
use crate::gesture::HandLandmarks;
use crate::input::InputEvent;

#[derive(Deserialize, Debug)]
struct HandJson {
    #[serde(default)]
    handedness: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    landmarks: HandLandmarks,
}

#[derive(Deserialize, Debug)]
struct DetectionJson {
    #[serde(default)]
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

/// Parses one line of tracker output into the hand for that frame.
///
/// Returns `Ok(None)` when no hand was detected.
pub fn parse_detection(line: &str) -> Result<Option<HandLandmarks>, TrackingError> {
    let detection: DetectionJson = serde_json::from_str(line)
        .map_err(|e| TrackingError::InvalidResponse(format!("{e}: {line}")))?;

    if let Some(error) = detection.error {
        return Err(TrackingError::TrackerFailed(error));
    }

    Ok(detection.hands.into_iter().next().map(|hand| {
        log::trace!(
            "Hand detected ({}, score {:.2})",
            hand.handedness.as_deref().unwrap_or("unknown"),
            hand.score.unwrap_or_default()
        );
        hand.landmarks
    }))
}

/// Launches the configured tracker command and streams its results.
pub struct ProcessDetector {
    command: Vec<String>,
}

impl ProcessDetector {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    fn build_command(
        &self,
        stream: &CameraStream,
        options: &DetectorOptions,
    ) -> Result<Command, TrackingError> {
        let (program, args) = self.command.split_first().ok_or_else(|| {
            TrackingError::DetectorSpawn(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "tracker command is empty",
            ))
        })?;

        let mut command = Command::new(program);
        command
            .args(args)
            .arg("--device")
            .arg(&stream.device)
            .arg("--width")
            .arg(stream.width.to_string())
            .arg("--height")
            .arg(stream.height.to_string())
            .arg("--facing")
            .arg(stream.facing_mode.as_str())
            .arg("--max-num-hands")
            .arg(options.max_num_hands.to_string())
            .arg("--model-complexity")
            .arg(options.model_complexity.to_string())
            .arg("--min-detection-confidence")
            .arg(options.min_detection_confidence.to_string())
            .arg("--min-tracking-confidence")
            .arg(options.min_tracking_confidence.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        Ok(command)
    }
}

#[async_trait]
impl LandmarkDetector for ProcessDetector {
    async fn start(
        &self,
        stream: CameraStream,
        options: &DetectorOptions,
        results: mpsc::Sender<InputEvent>,
    ) -> Result<DetectorHandle, TrackingError> {
        let mut command = self.build_command(&stream, options)?;
        log::info!("Launching hand tracker: {}", self.command.join(" "));

        let mut child = command.spawn().map_err(TrackingError::DetectorSpawn)?;
        let stdout = child.stdout.take().ok_or_else(|| {
            TrackingError::InvalidResponse("tracker stdout is not available".to_string())
        })?;

        let task = tokio::spawn(forward_results(child, stdout, results));
        Ok(DetectorHandle::new(task))
    }
}

/// Forwards tracker output line by line until the tracker exits or the
/// drawing loop goes away. `send` waits for room, so no result is dropped.
///
/// When the tracker ends on its own, a final [`InputEvent::TrackerStopped`]
/// carries the failure: an `error` the tracker reported, a failed exit, or
/// an exit before the first frame.
async fn forward_results(
    mut child: Child,
    stdout: ChildStdout,
    results: mpsc::Sender<InputEvent>,
) {
    let mut lines = BufReader::new(stdout).lines();
    let mut frames = 0u64;
    let mut failure: Option<String> = None;

    let tracker_ended = loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_detection(&line) {
                    Ok(hand) => {
                        frames += 1;
                        if results.send(InputEvent::Hand(hand)).await.is_err() {
                            log::debug!("Drawing loop closed, stopping hand tracker");
                            break false;
                        }
                    }
                    Err(TrackingError::TrackerFailed(reason)) => {
                        log::warn!("Hand tracker reported: {}", reason);
                        failure = Some(reason);
                    }
                    Err(e) => log::warn!("Skipping tracker output: {}", e),
                }
            }
            Ok(None) => break true,
            Err(e) => {
                failure.get_or_insert_with(|| format!("failed to read tracker output: {e}"));
                break true;
            }
        }
    };

    if !tracker_ended {
        let _ = child.start_kill();
    }
    let exit = child.wait().await;
    match &exit {
        Ok(status) => log::info!("Hand tracker exited ({}) after {} frames", status, frames),
        Err(e) => log::warn!("Failed to reap hand tracker: {}", e),
    }

    if !tracker_ended {
        return;
    }

    let failure = failure.or_else(|| match exit {
        Ok(status) if !status.success() => Some(format!("tracker exited with {status}")),
        Ok(_) if frames == 0 => Some("tracker exited before the first frame".to_string()),
        Ok(_) => None,
        Err(e) => Some(format!("failed to wait for tracker: {e}")),
    });
    let _ = results.send(InputEvent::TrackerStopped(failure)).await;
}
