use crate::calculator::FingerShapeCalculator;
use crate::geometry::clamp01;
use crate::hand::{FingerId, Hand};
use crate::shape::{FingerShapeType, FingerShapeTypes};
use log::*;
use std::cell::Cell;

/// A desired value for one shape type, with an asymmetric tolerance band.
/// All three values are kept within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerShapeTarget {
    shape_type: FingerShapeType,
    desired: f32,
    upper_tolerance: f32,
    lower_tolerance: f32,
}

impl FingerShapeTarget {
    pub fn new(shape_type: FingerShapeType, desired: f32, tolerance: f32) -> Self {
        Self::with_tolerances(shape_type, desired, tolerance, tolerance)
    }

    pub fn with_tolerances(
        shape_type: FingerShapeType,
        desired: f32,
        upper_tolerance: f32,
        lower_tolerance: f32,
    ) -> Self {
        Self {
            shape_type,
            desired: clamp01(desired),
            upper_tolerance: clamp01(upper_tolerance),
            lower_tolerance: clamp01(lower_tolerance),
        }
    }

    pub fn shape_type(&self) -> FingerShapeType {
        self.shape_type
    }

    pub fn desired(&self) -> f32 {
        self.desired
    }

    pub fn upper_tolerance(&self) -> f32 {
        self.upper_tolerance
    }

    pub fn lower_tolerance(&self) -> f32 {
        self.lower_tolerance
    }

    pub fn set_shape_type(&mut self, shape_type: FingerShapeType) {
        self.shape_type = shape_type;
    }

    pub fn set_desired(&mut self, desired: f32) {
        self.desired = clamp01(desired);
    }

    pub fn set_upper_tolerance(&mut self, tolerance: f32) {
        self.upper_tolerance = clamp01(tolerance);
    }

    pub fn set_lower_tolerance(&mut self, tolerance: f32) {
        self.lower_tolerance = clamp01(tolerance);
    }

    pub fn accepts(&self, value: f32) -> bool {
        value >= self.desired - self.lower_tolerance && value <= self.desired + self.upper_tolerance
    }
}

/// Targets that one finger must meet at the same time.
///
/// Targets are checked in order and checking stops at the first miss, so
/// the most discriminating target belongs first.
#[derive(Debug, Clone)]
pub struct FingerShapeCondition {
    finger: FingerId,
    targets: Vec<FingerShapeTarget>,
    // None until first use and after every change to `targets`
    types_needed: Cell<Option<FingerShapeTypes>>,
}

impl FingerShapeCondition {
    pub fn new(finger: FingerId, targets: Vec<FingerShapeTarget>) -> Self {
        Self {
            finger,
            targets,
            types_needed: Cell::new(None),
        }
    }

    pub fn finger(&self) -> FingerId {
        self.finger
    }

    pub fn set_finger(&mut self, finger: FingerId) {
        self.finger = finger;
    }

    pub fn targets(&self) -> &[FingerShapeTarget] {
        &self.targets
    }

    pub fn set_targets(&mut self, targets: Vec<FingerShapeTarget>) {
        self.targets = targets;
        self.types_needed.set(None);
    }

    pub fn push_target(&mut self, target: FingerShapeTarget) {
        self.targets.push(target);
        self.types_needed.set(None);
    }

    /// Union of the shape types the targets refer to.
    pub fn types_needed(&self) -> FingerShapeTypes {
        if let Some(types) = self.types_needed.get() {
            return types;
        }
        let types = self
            .targets
            .iter()
            .fold(FingerShapeTypes::NONE, |types, target| {
                types | target.shape_type.as_flag()
            });
        self.types_needed.set(Some(types));
        types
    }

    pub fn check_condition(&self, hand: &Hand, calculator: &mut FingerShapeCalculator) -> bool {
        let types_needed = self.types_needed();
        if types_needed.is_empty() {
            return true;
        }

        let shape = calculator.calculate(hand, self.finger, types_needed);
        for target in &self.targets {
            let passed = match shape.value(target.shape_type) {
                Some(value) => target.accepts(value),
                None => false,
            };
            if !passed {
                trace!(
                    "{} {} target {} missed",
                    hand.handedness().as_str(),
                    self.finger.as_str(),
                    target.shape_type.as_str()
                );
                return false;
            }
        }
        true
    }
}
