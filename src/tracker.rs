//! Drives per-update hand data from a platform provider into the
//! gesture evaluation state.

use crate::calculator::FingerShapeCalculator;
use crate::calibration::{CalibrationStore, FingerShapeConfiguration};
use crate::common_gestures::{CommonGesture, CommonHandGestures, GestureSample};
use crate::hand::{FingerId, Hand, Handedness, Joint, Pose, JOINT_COUNT};
use crate::hand_pose::HandPose;
use crate::hand_shape::HandShape;
use crate::orientation::XrOrigin;
use log::*;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Which parts of which hand the provider managed to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateSuccessFlags(u8);

impl UpdateSuccessFlags {
    pub const NONE: UpdateSuccessFlags = UpdateSuccessFlags(0);
    pub const LEFT_HAND_ROOT_POSE: UpdateSuccessFlags = UpdateSuccessFlags(1 << 0);
    pub const LEFT_HAND_JOINTS: UpdateSuccessFlags = UpdateSuccessFlags(1 << 1);
    pub const RIGHT_HAND_ROOT_POSE: UpdateSuccessFlags = UpdateSuccessFlags(1 << 2);
    pub const RIGHT_HAND_JOINTS: UpdateSuccessFlags = UpdateSuccessFlags(1 << 3);
    pub const ALL: UpdateSuccessFlags = UpdateSuccessFlags(0b1111);

    pub fn contains(self, other: UpdateSuccessFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn root_pose(handedness: Handedness) -> UpdateSuccessFlags {
        match handedness {
            Handedness::Left => Self::LEFT_HAND_ROOT_POSE,
            Handedness::Right => Self::RIGHT_HAND_ROOT_POSE,
        }
    }

    pub fn joints(handedness: Handedness) -> UpdateSuccessFlags {
        match handedness {
            Handedness::Left => Self::LEFT_HAND_JOINTS,
            Handedness::Right => Self::RIGHT_HAND_JOINTS,
        }
    }

    /// Both flags a hand needs to count as tracked.
    pub fn tracked_mask(handedness: Handedness) -> UpdateSuccessFlags {
        Self::root_pose(handedness) | Self::joints(handedness)
    }
}

impl BitOr for UpdateSuccessFlags {
    type Output = UpdateSuccessFlags;

    fn bitor(self, rhs: UpdateSuccessFlags) -> UpdateSuccessFlags {
        UpdateSuccessFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for UpdateSuccessFlags {
    fn bitor_assign(&mut self, rhs: UpdateSuccessFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for UpdateSuccessFlags {
    type Output = UpdateSuccessFlags;

    fn bitand(self, rhs: UpdateSuccessFlags) -> UpdateSuccessFlags {
        UpdateSuccessFlags(self.0 & rhs.0)
    }
}

/// When in the host's frame the update happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateType {
    Dynamic,
    BeforeRender,
}

/// Platform side of hand tracking.
pub trait HandProvider {
    /// Which joints this platform can ever report. Defaults to all of them.
    fn hand_layout(&self) -> [bool; JOINT_COUNT] {
        [true; JOINT_COUNT]
    }

    /// Calibration captured on this platform's hardware.
    fn finger_shape_configuration(&self, finger: FingerId) -> FingerShapeConfiguration {
        FingerShapeConfiguration::reference(finger)
    }

    /// Writes the latest root poses and joints in place.
    fn try_update_hands(
        &mut self,
        update_type: UpdateType,
        left_root_pose: &mut Pose,
        left_joints: &mut [Joint; JOINT_COUNT],
        right_root_pose: &mut Pose,
        right_joints: &mut [Joint; JOINT_COUNT],
    ) -> UpdateSuccessFlags;

    /// Platform gesture values for the last update, if the platform has any.
    fn try_get_common_gestures(&mut self, _handedness: Handedness) -> Option<GestureSample> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingChange {
    Acquired(Handedness),
    Lost(Handedness),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub flags: UpdateSuccessFlags,
    pub update_type: UpdateType,
    pub tracking_changes: Vec<TrackingChange>,
    pub gesture_changes: Vec<(Handedness, CommonGesture)>,
}

pub struct HandTracker<P: HandProvider> {
    provider: P,
    hands: [Hand; 2],
    gestures: [CommonHandGestures; 2],
    calculator: FingerShapeCalculator,
    running: bool,
}

impl<P: HandProvider> HandTracker<P> {
    /// Seeds calibration defaults from the provider.
    pub fn new(provider: P) -> Self {
        let mut calibration = CalibrationStore::new();
        for finger in FingerId::all() {
            calibration.set_default(*finger, provider.finger_shape_configuration(*finger));
        }
        Self::with_calibration(provider, calibration)
    }

    /// Uses `calibration` as given, ignoring the provider's values.
    pub fn with_calibration(provider: P, calibration: CalibrationStore) -> Self {
        let layout = provider.hand_layout();
        let mut hands = [Hand::new(Handedness::Left), Hand::new(Handedness::Right)];
        for hand in hands.iter_mut() {
            for (joint, in_layout) in hand.joints_mut().iter_mut().zip(layout.iter()) {
                if !in_layout {
                    joint.mark_never_valid();
                }
            }
        }
        Self {
            provider,
            hands,
            gestures: [
                CommonHandGestures::new(Handedness::Left),
                CommonHandGestures::new(Handedness::Right),
            ],
            calculator: FingerShapeCalculator::new(calibration),
            running: true,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn hand(&self, handedness: Handedness) -> &Hand {
        &self.hands[handedness.index()]
    }

    pub fn left_hand(&self) -> &Hand {
        self.hand(Handedness::Left)
    }

    pub fn right_hand(&self) -> &Hand {
        self.hand(Handedness::Right)
    }

    pub fn common_gestures(&self, handedness: Handedness) -> &CommonHandGestures {
        &self.gestures[handedness.index()]
    }

    pub fn calculator(&self) -> &FingerShapeCalculator {
        &self.calculator
    }

    pub fn calculator_mut(&mut self) -> &mut FingerShapeCalculator {
        &mut self.calculator
    }

    /// Pulls one update from the provider. Shape values cached during the
    /// previous update are dropped before this returns.
    pub fn try_update_hands(&mut self, update_type: UpdateType) -> UpdateOutcome {
        let mut outcome = UpdateOutcome {
            flags: UpdateSuccessFlags::NONE,
            update_type,
            tracking_changes: vec![],
            gesture_changes: vec![],
        };
        if !self.running {
            return outcome;
        }

        let (left, right) = self.hands.split_at_mut(1);
        let (left, right) = (&mut left[0], &mut right[0]);
        let mut left_root = left.root_pose();
        let mut right_root = right.root_pose();
        outcome.flags = self.provider.try_update_hands(
            update_type,
            &mut left_root,
            left.joints_mut(),
            &mut right_root,
            right.joints_mut(),
        );
        left.set_root_pose(left_root);
        right.set_root_pose(right_root);

        for handedness in &[Handedness::Left, Handedness::Right] {
            let handedness = *handedness;
            let hand = &mut self.hands[handedness.index()];
            let was_tracked = hand.is_tracked();
            let tracked = outcome
                .flags
                .contains(UpdateSuccessFlags::tracked_mask(handedness));
            hand.set_tracked(tracked);
            if !was_tracked && tracked {
                info!("{} hand tracking acquired", handedness.as_str());
                outcome.tracking_changes.push(TrackingChange::Acquired(handedness));
            } else if was_tracked && !tracked {
                info!("{} hand tracking lost", handedness.as_str());
                outcome.tracking_changes.push(TrackingChange::Lost(handedness));
            }

            self.calculator.clear_cache(handedness);

            if let Some(sample) = self.provider.try_get_common_gestures(handedness) {
                let changed = self.gestures[handedness.index()].apply(&sample);
                outcome
                    .gesture_changes
                    .extend(changed.into_iter().map(|gesture| (handedness, gesture)));
            }
        }
        outcome
    }

    pub fn check_hand_shape(&mut self, shape: &HandShape, handedness: Handedness) -> bool {
        shape.check_conditions(&self.hands[handedness.index()], &mut self.calculator)
    }

    pub fn check_hand_pose(
        &mut self,
        pose: &HandPose,
        handedness: Handedness,
        environment: &dyn XrOrigin,
    ) -> bool {
        pose.check_conditions(
            &self.hands[handedness.index()],
            &mut self.calculator,
            environment,
        )
    }
}
