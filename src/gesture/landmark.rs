//! Normalized hand landmarks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of landmarks per detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// Landmark indices of the 21-point hand model.
#[allow(dead_code)]
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// A single landmark in image-relative coordinates.
///
/// `x` and `y` are normalized to the frame (0.0 to 1.0), with `y` growing
/// downward. `z` is relative depth and may be omitted by the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Errors raised when building a hand from untrusted landmark lists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("expected {LANDMARK_COUNT} landmarks, got {0}")]
    WrongCount(usize),
}

/// The full landmark set of one detected hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Returns the landmark at `idx` (see [`index`]).
    pub fn get(&self, idx: usize) -> Landmark {
        self.points[idx]
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Index fingertip scaled to a surface of `width` x `height` pixels.
    pub fn index_tip_position(&self, width: u32, height: u32) -> (f64, f64) {
        let tip = self.points[index::INDEX_TIP];
        (tip.x * width as f64, tip.y * height as f64)
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarks {
    type Error = LandmarkError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        let count = points.len();
        let points: [Landmark; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongCount(count))?;
        Ok(Self { points })
    }
}

impl From<HandLandmarks> for Vec<Landmark> {
    fn from(hand: HandLandmarks) -> Self {
        hand.points.to_vec()
    }
}
