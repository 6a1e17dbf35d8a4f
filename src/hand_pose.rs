use crate::calculator::FingerShapeCalculator;
use crate::hand::Hand;
use crate::hand_shape::HandShape;
use crate::orientation::{HandRelativeOrientation, XrOrigin};

/// A hand shape held in a particular orientation.
#[derive(Debug, Clone, Default)]
pub struct HandPose {
    pub hand_shape: Option<HandShape>,
    pub relative_orientation: HandRelativeOrientation,
}

impl HandPose {
    pub fn new(hand_shape: HandShape, relative_orientation: HandRelativeOrientation) -> Self {
        Self {
            hand_shape: Some(hand_shape),
            relative_orientation,
        }
    }

    /// Passes when the hand is tracked, a shape is set and met, and every
    /// orientation condition holds. A pose without a shape never passes.
    pub fn check_conditions(
        &self,
        hand: &Hand,
        calculator: &mut FingerShapeCalculator,
        environment: &dyn XrOrigin,
    ) -> bool {
        let shape = match &self.hand_shape {
            Some(shape) => shape,
            None => return false,
        };
        hand.is_tracked()
            && shape.check_conditions(hand, calculator)
            && self
                .relative_orientation
                .check_conditions(&hand.root_pose(), hand.handedness(), environment)
    }
}
