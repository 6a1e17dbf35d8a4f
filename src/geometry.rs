//! Vector and quaternion helpers shared by the shape and orientation checks.

use nalgebra as na;

/// How a hand axis must relate to a reference direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentCondition {
    AlignsWith,
    PerpendicularTo,
    OppositeTo,
}

/// Angle in degrees at `position1` between the segments towards
/// `position0` and `position2`.
///
/// A joint bent backwards past straight reports exactly 180 degrees. The
/// bend direction is taken from the local x axis of `rotation1`: the joint
/// flexes towards the palm when `right · (-to0 × to2)` is non-negative.
pub fn angle_between(
    position0: &na::Point3<f32>,
    position1: &na::Point3<f32>,
    rotation1: &na::UnitQuaternion<f32>,
    position2: &na::Point3<f32>,
) -> f32 {
    let to0 = (position0 - position1).normalize();
    let to2 = (position2 - position1).normalize();
    let right = rotation1 * na::Vector3::x();

    if right.dot(&(-to0).cross(&to2)) < 0.0 {
        return 180.0;
    }

    to0.dot(&to2).max(-1.0).min(1.0).acos().to_degrees()
}

/// Expresses a world point in the frame given by `origin` and the inverse
/// of that frame's rotation.
pub fn localize_to_frame(
    origin: &na::Point3<f32>,
    origin_rotation_inverse: &na::UnitQuaternion<f32>,
    point: &na::Point3<f32>,
) -> na::Vector3<f32> {
    origin_rotation_inverse * (point - origin)
}

/// Compares two directions with an angular tolerance in degrees.
///
/// With `ignore_position_y` the vertical component of both directions is
/// dropped before they are normalized.
pub fn check_direction_alignment(
    condition: AlignmentCondition,
    tolerance_degrees: f32,
    ignore_position_y: bool,
    hand_axis_direction: &na::Vector3<f32>,
    reference_direction: &na::Vector3<f32>,
) -> bool {
    let mut hand = *hand_axis_direction;
    let mut reference = *reference_direction;
    if ignore_position_y {
        hand.y = 0.0;
        reference.y = 0.0;
    }

    let dot = hand.normalize().dot(&reference.normalize());
    match condition {
        AlignmentCondition::AlignsWith => dot > tolerance_degrees.to_radians().cos(),
        AlignmentCondition::PerpendicularTo => {
            let limit = clamp(90.0 - tolerance_degrees, 0.0, 90.0);
            dot.abs() < limit.to_radians().cos()
        }
        AlignmentCondition::OppositeTo => dot < -tolerance_degrees.to_radians().cos(),
    }
}

pub(crate) fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

pub(crate) fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Angle in degrees between two free vectors.
pub(crate) fn degrees_between(a: &na::Vector3<f32>, b: &na::Vector3<f32>) -> f32 {
    let cos = a.dot(b) / (a.norm() * b.norm());
    clamp(cos, -1.0, 1.0).acos().to_degrees()
}
