pub mod calculator;
pub mod calibration;
pub mod common_gestures;
pub mod condition;
pub mod error;
pub mod geometry;
pub mod hand;
pub mod hand_pose;
pub mod hand_shape;
pub mod orientation;
pub mod presets;
pub mod recording;
pub mod shape;
pub mod tracker;

#[cfg(test)]
mod test_support;

pub use calculator::FingerShapeCalculator;
pub use calibration::{CalibrationStore, FingerShapeConfiguration};
pub use error::{GestureError, Result};
pub use hand::{FingerId, Hand, Handedness, Joint, JointId, Pose};
pub use shape::{FingerShape, FingerShapeType, FingerShapeTypes};
pub use tracker::{HandProvider, HandTracker, UpdateSuccessFlags, UpdateType};
