//! Synthetic hands for unit tests.
//!
//! Every finger is a chain of equal segments starting at its metacarpal and
//! running along +z, flexing towards -y (the palm side). All joint rotations
//! are identity so the local x axis is the flexion axis.

use crate::hand::{FingerId, Hand, Handedness, Joint, JointId, Pose};
use nalgebra as na;

pub const SEGMENT: f32 = 0.03;

#[derive(Debug, Clone, Copy, Default)]
pub struct FingerPlan {
    /// Downward pitch of the first segment, degrees.
    pub base_pitch: f32,
    /// Flexion at the second, third and fourth joint of the chain, degrees.
    pub bends: [f32; 3],
    /// Rotation of the whole chain about +y, degrees.
    pub yaw: f32,
}

pub struct HandBuilder {
    handedness: Handedness,
    plans: [FingerPlan; 5],
    root: Pose,
}

impl HandBuilder {
    pub fn new(handedness: Handedness) -> Self {
        Self {
            handedness,
            plans: [FingerPlan::default(); 5],
            root: Pose::identity(),
        }
    }

    pub fn bends(mut self, finger: FingerId, bends: [f32; 3]) -> Self {
        self.plans[finger.index()].bends = bends;
        self
    }

    pub fn base_pitch(mut self, finger: FingerId, degrees: f32) -> Self {
        self.plans[finger.index()].base_pitch = degrees;
        self
    }

    pub fn yaw(mut self, finger: FingerId, degrees: f32) -> Self {
        self.plans[finger.index()].yaw = degrees;
        self
    }

    pub fn root(mut self, root: Pose) -> Self {
        self.root = root;
        self
    }

    pub fn build(self) -> Hand {
        let mut hand = Hand::new(self.handedness);
        hand.set_tracked(true);
        hand.set_root_pose(self.root);
        set_position(&mut hand, JointId::Wrist, na::Point3::origin());
        set_position(&mut hand, JointId::Palm, na::Point3::new(0.0, 0.0, 0.04));

        let lateral = self.handedness.multiplier();
        for finger in FingerId::all() {
            let plan = self.plans[finger.index()];
            let offset = match finger {
                FingerId::Thumb => 0.05,
                FingerId::Index => 0.03,
                FingerId::Middle => 0.01,
                FingerId::Ring => -0.01,
                FingerId::Little => -0.03,
            };
            let joint_count = finger.back_joint().index() - finger.front_joint().index() + 1;
            let mut position = na::Point3::new(offset * lateral, 0.0, 0.0);
            let mut pitch = plan.base_pitch;
            for step in 0..joint_count {
                let id = JointId::from_index(finger.front_joint().index() + step).unwrap();
                set_position(&mut hand, id, position);
                if step > 0 && step <= plan.bends.len() {
                    pitch += plan.bends[step - 1];
                }
                position += direction(pitch, plan.yaw) * SEGMENT;
            }
        }
        hand
    }
}

fn direction(pitch_degrees: f32, yaw_degrees: f32) -> na::Vector3<f32> {
    let pitch = pitch_degrees.to_radians();
    let yaw = yaw_degrees.to_radians();
    na::Vector3::new(
        yaw.sin() * pitch.cos(),
        -pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}

pub fn set_position(hand: &mut Hand, id: JointId, position: na::Point3<f32>) {
    let handedness = hand.handedness();
    *hand.joint_mut(id) = Joint::with_pose(
        id,
        handedness,
        Pose::new(position, na::UnitQuaternion::identity()),
    );
}

pub fn open_hand(handedness: Handedness) -> Hand {
    HandBuilder::new(handedness).build()
}

pub fn fist(handedness: Handedness) -> Hand {
    let mut builder = HandBuilder::new(handedness).base_pitch(FingerId::Thumb, 40.0);
    for finger in &[FingerId::Index, FingerId::Middle, FingerId::Ring, FingerId::Little] {
        builder = builder.bends(*finger, [90.0, 90.0, 70.0]);
    }
    builder.bends(FingerId::Thumb, [50.0, 60.0, 0.0]).build()
}
