//! Per-hand gesture values reported directly by the tracking platform.

use crate::hand::{Handedness, Pose};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonGesture {
    AimPose,
    AimActivateValue,
    GraspValue,
    GripPose,
    PinchPose,
    PinchValue,
    PokePose,
}

/// One update's worth of platform gesture values. `None` marks a value the
/// platform could not produce this update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureSample {
    pub aim_pose: Option<Pose>,
    pub aim_activate_value: Option<f32>,
    pub grasp_value: Option<f32>,
    pub grip_pose: Option<Pose>,
    pub pinch_pose: Option<Pose>,
    pub pinch_value: Option<f32>,
    pub poke_pose: Option<Pose>,
}

// Stores a new value and reports whether observers would see a change.
fn update_slot<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    let changed = slot.as_ref() != Some(&value);
    *slot = Some(value);
    changed
}

fn invalidate_slot<T>(slot: &mut Option<T>) -> bool {
    slot.take().is_some()
}

fn apply_slot<T: PartialEq>(slot: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(value) => update_slot(slot, value),
        None => invalidate_slot(slot),
    }
}

/// Latest common gesture values for one hand.
#[derive(Debug, Clone)]
pub struct CommonHandGestures {
    handedness: Handedness,
    aim_pose: Option<Pose>,
    aim_activate_value: Option<f32>,
    grasp_value: Option<f32>,
    grip_pose: Option<Pose>,
    pinch_pose: Option<Pose>,
    pinch_value: Option<f32>,
    poke_pose: Option<Pose>,
}

impl CommonHandGestures {
    pub fn new(handedness: Handedness) -> Self {
        Self {
            handedness,
            aim_pose: None,
            aim_activate_value: None,
            grasp_value: None,
            grip_pose: None,
            pinch_pose: None,
            pinch_value: None,
            poke_pose: None,
        }
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn try_get_aim_pose(&self) -> Option<Pose> {
        self.aim_pose
    }

    pub fn try_get_aim_activate_value(&self) -> Option<f32> {
        self.aim_activate_value
    }

    pub fn try_get_grasp_value(&self) -> Option<f32> {
        self.grasp_value
    }

    pub fn try_get_grip_pose(&self) -> Option<Pose> {
        self.grip_pose
    }

    pub fn try_get_pinch_pose(&self) -> Option<Pose> {
        self.pinch_pose
    }

    pub fn try_get_pinch_value(&self) -> Option<f32> {
        self.pinch_value
    }

    pub fn try_get_poke_pose(&self) -> Option<Pose> {
        self.poke_pose
    }

    /// Each update returns true if the value was previously invalid or differs.
    pub fn update_aim_pose(&mut self, pose: Pose) -> bool {
        update_slot(&mut self.aim_pose, pose)
    }

    pub fn update_aim_activate_value(&mut self, value: f32) -> bool {
        update_slot(&mut self.aim_activate_value, value)
    }

    pub fn update_grasp_value(&mut self, value: f32) -> bool {
        update_slot(&mut self.grasp_value, value)
    }

    pub fn update_grip_pose(&mut self, pose: Pose) -> bool {
        update_slot(&mut self.grip_pose, pose)
    }

    pub fn update_pinch_pose(&mut self, pose: Pose) -> bool {
        update_slot(&mut self.pinch_pose, pose)
    }

    pub fn update_pinch_value(&mut self, value: f32) -> bool {
        update_slot(&mut self.pinch_value, value)
    }

    pub fn update_poke_pose(&mut self, pose: Pose) -> bool {
        update_slot(&mut self.poke_pose, pose)
    }

    /// Each invalidate returns true if the value was valid before.
    pub fn invalidate_aim_pose(&mut self) -> bool {
        invalidate_slot(&mut self.aim_pose)
    }

    pub fn invalidate_aim_activate_value(&mut self) -> bool {
        invalidate_slot(&mut self.aim_activate_value)
    }

    pub fn invalidate_grasp_value(&mut self) -> bool {
        invalidate_slot(&mut self.grasp_value)
    }

    pub fn invalidate_grip_pose(&mut self) -> bool {
        invalidate_slot(&mut self.grip_pose)
    }

    pub fn invalidate_pinch_pose(&mut self) -> bool {
        invalidate_slot(&mut self.pinch_pose)
    }

    pub fn invalidate_pinch_value(&mut self) -> bool {
        invalidate_slot(&mut self.pinch_value)
    }

    pub fn invalidate_poke_pose(&mut self) -> bool {
        invalidate_slot(&mut self.poke_pose)
    }

    pub fn invalidate_all(&mut self) -> Vec<CommonGesture> {
        self.apply(&GestureSample::default())
    }

    /// Applies a whole sample and lists the gestures whose value changed.
    pub fn apply(&mut self, sample: &GestureSample) -> Vec<CommonGesture> {
        let mut changed = Vec::new();
        if apply_slot(&mut self.aim_pose, sample.aim_pose) {
            changed.push(CommonGesture::AimPose);
        }
        if apply_slot(&mut self.aim_activate_value, sample.aim_activate_value) {
            changed.push(CommonGesture::AimActivateValue);
        }
        if apply_slot(&mut self.grasp_value, sample.grasp_value) {
            changed.push(CommonGesture::GraspValue);
        }
        if apply_slot(&mut self.grip_pose, sample.grip_pose) {
            changed.push(CommonGesture::GripPose);
        }
        if apply_slot(&mut self.pinch_pose, sample.pinch_pose) {
            changed.push(CommonGesture::PinchPose);
        }
        if apply_slot(&mut self.pinch_value, sample.pinch_value) {
            changed.push(CommonGesture::PinchValue);
        }
        if apply_slot(&mut self.poke_pose, sample.poke_pose) {
            changed.push(CommonGesture::PokePose);
        }
        changed
    }
}
