//! Hand orientation relative to the user and to an arbitrary target.
//!
//! Root poses are expressed in the tracking origin's space. Reference
//! directions are built in world space from the origin, head and target
//! transforms, then rotated into origin space before comparison.

use crate::geometry::{check_direction_alignment, clamp, AlignmentCondition};
use crate::hand::{Handedness, Pose};
use log::*;
use nalgebra as na;

pub const MINIMUM_ANGLE_TOLERANCE: f32 = 0.1;
pub const MAXIMUM_ANGLE_TOLERANCE: f32 = 180.0;

/// Axes of the hand, following the OpenXR hand joint convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandAxis {
    PalmDirection,
    ThumbExtendedDirection,
    FingersExtendedDirection,
}

impl HandAxis {
    /// Direction of this axis in origin space.
    pub fn direction(
        self,
        root_rotation: &na::UnitQuaternion<f32>,
        handedness: Handedness,
    ) -> na::Vector3<f32> {
        let local = match self {
            HandAxis::PalmDirection => na::Vector3::new(0.0, -1.0, 0.0),
            HandAxis::ThumbExtendedDirection => na::Vector3::new(handedness.multiplier(), 0.0, 0.0),
            HandAxis::FingersExtendedDirection => na::Vector3::new(0.0, 0.0, 1.0),
        };
        root_rotation * local
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRelativeDirection {
    OriginUp,
    HandToHead,
    NoseDirection,
    ChinDirection,
    EarDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRelativeDirection {
    HandToTarget,
    TargetForward,
    TargetUp,
    TargetRight,
}

/// Where the tracking origin and the user's head are in world space.
pub trait XrOrigin {
    fn origin_transform(&self) -> Option<na::Isometry3<f32>>;
    fn head_transform(&self) -> Option<na::Isometry3<f32>>;
}

/// Origin and head transforms supplied directly by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaticOrigin {
    pub origin: Option<na::Isometry3<f32>>,
    pub head: Option<na::Isometry3<f32>>,
}

impl StaticOrigin {
    pub fn new(origin: na::Isometry3<f32>, head: na::Isometry3<f32>) -> Self {
        Self {
            origin: Some(origin),
            head: Some(head),
        }
    }
}

impl XrOrigin for StaticOrigin {
    fn origin_transform(&self) -> Option<na::Isometry3<f32>> {
        self.origin
    }

    fn head_transform(&self) -> Option<na::Isometry3<f32>> {
        self.head
    }
}

fn clamp_tolerance(degrees: f32) -> f32 {
    clamp(degrees, MINIMUM_ANGLE_TOLERANCE, MAXIMUM_ANGLE_TOLERANCE)
}

/// Compares a hand axis to a direction derived from the user's origin or head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserCondition {
    pub hand_axis: HandAxis,
    pub alignment: AlignmentCondition,
    pub reference_direction: UserRelativeDirection,
    angle_tolerance: f32,
    pub ignore_position_y: bool,
}

impl UserCondition {
    pub fn new(
        hand_axis: HandAxis,
        alignment: AlignmentCondition,
        reference_direction: UserRelativeDirection,
        angle_tolerance: f32,
    ) -> Self {
        Self {
            hand_axis,
            alignment,
            reference_direction,
            angle_tolerance: clamp_tolerance(angle_tolerance),
            ignore_position_y: false,
        }
    }

    pub fn ignoring_position_y(mut self) -> Self {
        self.ignore_position_y = true;
        self
    }

    pub fn angle_tolerance(&self) -> f32 {
        self.angle_tolerance
    }

    pub fn set_angle_tolerance(&mut self, degrees: f32) {
        self.angle_tolerance = clamp_tolerance(degrees);
    }

    pub fn check_condition(
        &self,
        root_pose: &Pose,
        handedness: Handedness,
        origin: &na::Isometry3<f32>,
        head: &na::Isometry3<f32>,
    ) -> bool {
        let hand_direction = self.hand_axis.direction(&root_pose.rotation, handedness);
        let world_direction = match self.reference_direction {
            UserRelativeDirection::OriginUp => origin.rotation * na::Vector3::y(),
            UserRelativeDirection::HandToHead => {
                head.translation.vector - origin.transform_point(&root_pose.position).coords
            }
            UserRelativeDirection::NoseDirection => head.rotation * na::Vector3::z(),
            UserRelativeDirection::ChinDirection => {
                head.rotation * na::Vector3::new(0.0, -1.0, 0.0)
            }
            UserRelativeDirection::EarDirection => {
                head.rotation * na::Vector3::new(-handedness.multiplier(), 0.0, 0.0)
            }
        };
        let reference = origin.rotation.inverse() * world_direction;
        check_direction_alignment(
            self.alignment,
            self.angle_tolerance,
            self.ignore_position_y,
            &hand_direction,
            &reference,
        )
    }
}

/// Compares a hand axis to a direction derived from a target transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetCondition {
    pub hand_axis: HandAxis,
    pub alignment: AlignmentCondition,
    pub reference_direction: TargetRelativeDirection,
    angle_tolerance: f32,
    pub ignore_position_y: bool,
}

impl TargetCondition {
    pub fn new(
        hand_axis: HandAxis,
        alignment: AlignmentCondition,
        reference_direction: TargetRelativeDirection,
        angle_tolerance: f32,
    ) -> Self {
        Self {
            hand_axis,
            alignment,
            reference_direction,
            angle_tolerance: clamp_tolerance(angle_tolerance),
            ignore_position_y: false,
        }
    }

    pub fn ignoring_position_y(mut self) -> Self {
        self.ignore_position_y = true;
        self
    }

    pub fn angle_tolerance(&self) -> f32 {
        self.angle_tolerance
    }

    pub fn set_angle_tolerance(&mut self, degrees: f32) {
        self.angle_tolerance = clamp_tolerance(degrees);
    }

    pub fn check_condition(
        &self,
        root_pose: &Pose,
        handedness: Handedness,
        origin: &na::Isometry3<f32>,
        target: &na::Isometry3<f32>,
    ) -> bool {
        let hand_direction = self.hand_axis.direction(&root_pose.rotation, handedness);
        let world_direction = match self.reference_direction {
            TargetRelativeDirection::HandToTarget => {
                target.translation.vector - origin.transform_point(&root_pose.position).coords
            }
            TargetRelativeDirection::TargetForward => target.rotation * na::Vector3::z(),
            TargetRelativeDirection::TargetUp => target.rotation * na::Vector3::y(),
            TargetRelativeDirection::TargetRight => target.rotation * na::Vector3::x(),
        };
        let reference = origin.rotation.inverse() * world_direction;
        check_direction_alignment(
            self.alignment,
            self.angle_tolerance,
            self.ignore_position_y,
            &hand_direction,
            &reference,
        )
    }
}

/// User- and target-relative orientation conditions. Every condition in
/// both lists must hold; target conditions are skipped while no target is
/// bound.
#[derive(Debug, Clone, Default)]
pub struct HandRelativeOrientation {
    pub user_conditions: Vec<UserCondition>,
    pub target_conditions: Vec<TargetCondition>,
    pub target: Option<na::Isometry3<f32>>,
}

impl HandRelativeOrientation {
    pub fn new(
        user_conditions: Vec<UserCondition>,
        target_conditions: Vec<TargetCondition>,
    ) -> Self {
        Self {
            user_conditions,
            target_conditions,
            target: None,
        }
    }

    pub fn set_target(&mut self, target: Option<na::Isometry3<f32>>) {
        self.target = target;
    }

    pub fn check_conditions(
        &self,
        root_pose: &Pose,
        handedness: Handedness,
        environment: &dyn XrOrigin,
    ) -> bool {
        let (origin, head) = match (environment.origin_transform(), environment.head_transform()) {
            (Some(origin), Some(head)) => (origin, head),
            _ => {
                trace!("Origin or head transform unavailable");
                return false;
            }
        };

        let user_passed = self
            .user_conditions
            .iter()
            .all(|condition| condition.check_condition(root_pose, handedness, &origin, &head));
        if !user_passed {
            return false;
        }

        match &self.target {
            None => true,
            Some(target) => self
                .target_conditions
                .iter()
                .all(|condition| condition.check_condition(root_pose, handedness, &origin, target)),
        }
    }
}
