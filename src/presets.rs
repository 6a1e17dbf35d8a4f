//! A handful of common static gestures built from the public API.

use crate::condition::{FingerShapeCondition, FingerShapeTarget};
use crate::geometry::AlignmentCondition;
use crate::hand::FingerId;
use crate::hand_pose::HandPose;
use crate::hand_shape::HandShape;
use crate::orientation::{HandAxis, HandRelativeOrientation, UserCondition, UserRelativeDirection};
use crate::shape::FingerShapeType;

const CURLED: f32 = 1.0;
const EXTENDED: f32 = 0.0;

fn full_curl(finger: FingerId, desired: f32, tolerance: f32) -> FingerShapeCondition {
    FingerShapeCondition::new(
        finger,
        vec![FingerShapeTarget::new(FingerShapeType::FullCurl, desired, tolerance)],
    )
}

fn curled_fingers() -> Vec<FingerShapeCondition> {
    vec![
        FingerShapeCondition::new(
            FingerId::Index,
            vec![
                FingerShapeTarget::new(FingerShapeType::FullCurl, CURLED, 0.25),
                FingerShapeTarget::new(FingerShapeType::BaseCurl, CURLED, 0.4),
            ],
        ),
        full_curl(FingerId::Middle, CURLED, 0.25),
        full_curl(FingerId::Ring, CURLED, 0.3),
        full_curl(FingerId::Little, CURLED, 0.3),
    ]
}

pub fn fist() -> HandShape {
    let mut conditions = vec![FingerShapeCondition::new(
        FingerId::Thumb,
        vec![FingerShapeTarget::with_tolerances(
            FingerShapeType::FullCurl,
            CURLED,
            0.0,
            0.5,
        )],
    )];
    conditions.extend(curled_fingers());
    HandShape::new("fist", conditions)
}

pub fn thumbs_up() -> HandShape {
    let mut conditions = vec![full_curl(FingerId::Thumb, EXTENDED, 0.35)];
    conditions.extend(curled_fingers());
    HandShape::new("thumbs up", conditions)
}

pub fn point() -> HandShape {
    HandShape::new(
        "point",
        vec![
            full_curl(FingerId::Index, EXTENDED, 0.25),
            full_curl(FingerId::Middle, CURLED, 0.3),
            full_curl(FingerId::Ring, CURLED, 0.3),
            full_curl(FingerId::Little, CURLED, 0.35),
        ],
    )
}

pub fn open_palm() -> HandShape {
    HandShape::new(
        "open palm",
        vec![
            full_curl(FingerId::Thumb, EXTENDED, 0.4),
            full_curl(FingerId::Index, EXTENDED, 0.2),
            full_curl(FingerId::Middle, EXTENDED, 0.2),
            full_curl(FingerId::Ring, EXTENDED, 0.2),
            full_curl(FingerId::Little, EXTENDED, 0.25),
        ],
    )
}

/// Thumbs up with the thumb pointing at the sky.
pub fn thumbs_up_pose() -> HandPose {
    HandPose::new(
        thumbs_up(),
        HandRelativeOrientation::new(
            vec![UserCondition::new(
                HandAxis::ThumbExtendedDirection,
                AlignmentCondition::AlignsWith,
                UserRelativeDirection::OriginUp,
                45.0,
            )],
            vec![],
        ),
    )
}

/// Open palm held up, facing the user's head.
pub fn open_palm_facing_user_pose() -> HandPose {
    HandPose::new(
        open_palm(),
        HandRelativeOrientation::new(
            vec![
                UserCondition::new(
                    HandAxis::PalmDirection,
                    AlignmentCondition::AlignsWith,
                    UserRelativeDirection::HandToHead,
                    50.0,
                ),
                UserCondition::new(
                    HandAxis::FingersExtendedDirection,
                    AlignmentCondition::AlignsWith,
                    UserRelativeDirection::OriginUp,
                    45.0,
                ),
            ],
            vec![],
        ),
    )
}

pub fn all_shapes() -> Vec<HandShape> {
    vec![fist(), thumbs_up(), point(), open_palm()]
}

pub fn all_poses() -> Vec<(&'static str, HandPose)> {
    vec![
        ("thumbs up pose", thumbs_up_pose()),
        ("open palm facing user", open_palm_facing_user_pose()),
    ]
}
