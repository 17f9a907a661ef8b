//! Hand landmark types and gesture classification.
//!
//! The landmark layout follows the 21-point hand model produced by the
//! external tracker. Classification is a pure function over one hand.

pub mod classifier;
pub mod landmark;

pub use classifier::is_pointing;
pub use landmark::{HandLandmarks, LANDMARK_COUNT, Landmark, LandmarkError};
