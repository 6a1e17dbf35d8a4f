use crate::error::{GestureError, Result};
use nalgebra as na;
use std::convert::TryFrom;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Which hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn index(self) -> usize {
        match self {
            Handedness::Left => 0,
            Handedness::Right => 1,
        }
    }

    /// Mirrors lateral axes: +1 for the left hand, -1 for the right.
    pub fn multiplier(self) -> f32 {
        match self {
            Handedness::Left => 1.0,
            Handedness::Right => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
        }
    }
}

/// The 26 tracked joints of a hand, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JointId {
    Wrist,
    Palm,
    ThumbMetacarpal,
    ThumbProximal,
    ThumbDistal,
    ThumbTip,
    IndexMetacarpal,
    IndexProximal,
    IndexIntermediate,
    IndexDistal,
    IndexTip,
    MiddleMetacarpal,
    MiddleProximal,
    MiddleIntermediate,
    MiddleDistal,
    MiddleTip,
    RingMetacarpal,
    RingProximal,
    RingIntermediate,
    RingDistal,
    RingTip,
    LittleMetacarpal,
    LittleProximal,
    LittleIntermediate,
    LittleDistal,
    LittleTip,
}

pub const JOINT_COUNT: usize = 26;

const ALL_JOINTS: [JointId; JOINT_COUNT] = [
    JointId::Wrist,
    JointId::Palm,
    JointId::ThumbMetacarpal,
    JointId::ThumbProximal,
    JointId::ThumbDistal,
    JointId::ThumbTip,
    JointId::IndexMetacarpal,
    JointId::IndexProximal,
    JointId::IndexIntermediate,
    JointId::IndexDistal,
    JointId::IndexTip,
    JointId::MiddleMetacarpal,
    JointId::MiddleProximal,
    JointId::MiddleIntermediate,
    JointId::MiddleDistal,
    JointId::MiddleTip,
    JointId::RingMetacarpal,
    JointId::RingProximal,
    JointId::RingIntermediate,
    JointId::RingDistal,
    JointId::RingTip,
    JointId::LittleMetacarpal,
    JointId::LittleProximal,
    JointId::LittleIntermediate,
    JointId::LittleDistal,
    JointId::LittleTip,
];

impl JointId {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<JointId> {
        ALL_JOINTS
            .get(index)
            .copied()
            .ok_or(GestureError::InvalidJoint(index))
    }

    pub fn all() -> &'static [JointId; JOINT_COUNT] {
        &ALL_JOINTS
    }

    /// Joint `steps` positions further along the layout.
    pub(crate) fn offset(self, steps: usize) -> Result<JointId> {
        JointId::from_index(self.index() + steps)
    }

    /// Name used in recordings.
    pub fn as_str(self) -> &'static str {
        match self {
            JointId::Wrist => "wrist",
            JointId::Palm => "palm",
            JointId::ThumbMetacarpal => "thumb-metacarpal",
            JointId::ThumbProximal => "thumb-proximal",
            JointId::ThumbDistal => "thumb-distal",
            JointId::ThumbTip => "thumb-tip",
            JointId::IndexMetacarpal => "index-metacarpal",
            JointId::IndexProximal => "index-proximal",
            JointId::IndexIntermediate => "index-intermediate",
            JointId::IndexDistal => "index-distal",
            JointId::IndexTip => "index-tip",
            JointId::MiddleMetacarpal => "middle-metacarpal",
            JointId::MiddleProximal => "middle-proximal",
            JointId::MiddleIntermediate => "middle-intermediate",
            JointId::MiddleDistal => "middle-distal",
            JointId::MiddleTip => "middle-tip",
            JointId::RingMetacarpal => "ring-metacarpal",
            JointId::RingProximal => "ring-proximal",
            JointId::RingIntermediate => "ring-intermediate",
            JointId::RingDistal => "ring-distal",
            JointId::RingTip => "ring-tip",
            JointId::LittleMetacarpal => "little-metacarpal",
            JointId::LittleProximal => "little-proximal",
            JointId::LittleIntermediate => "little-intermediate",
            JointId::LittleDistal => "little-distal",
            JointId::LittleTip => "little-tip",
        }
    }

    pub fn from_name(name: &str) -> Result<JointId> {
        ALL_JOINTS
            .iter()
            .find(|joint| joint.as_str() == name)
            .copied()
            .ok_or_else(|| GestureError::UnknownJointName(name.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FingerId {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

pub const FINGER_COUNT: usize = 5;

const ALL_FINGERS: [FingerId; FINGER_COUNT] = [
    FingerId::Thumb,
    FingerId::Index,
    FingerId::Middle,
    FingerId::Ring,
    FingerId::Little,
];

impl FingerId {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> &'static [FingerId; FINGER_COUNT] {
        &ALL_FINGERS
    }

    /// The joint closest to the wrist.
    pub fn front_joint(self) -> JointId {
        match self {
            FingerId::Thumb => JointId::ThumbMetacarpal,
            FingerId::Index => JointId::IndexMetacarpal,
            FingerId::Middle => JointId::MiddleMetacarpal,
            FingerId::Ring => JointId::RingMetacarpal,
            FingerId::Little => JointId::LittleMetacarpal,
        }
    }

    /// The fingertip.
    pub fn back_joint(self) -> JointId {
        match self {
            FingerId::Thumb => JointId::ThumbTip,
            FingerId::Index => JointId::IndexTip,
            FingerId::Middle => JointId::MiddleTip,
            FingerId::Ring => JointId::RingTip,
            FingerId::Little => JointId::LittleTip,
        }
    }

    /// The neighbouring finger towards the little finger.
    pub fn next(self) -> Option<FingerId> {
        ALL_FINGERS.get(self.index() + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FingerId::Thumb => "thumb",
            FingerId::Index => "index",
            FingerId::Middle => "middle",
            FingerId::Ring => "ring",
            FingerId::Little => "little",
        }
    }
}

impl TryFrom<u8> for FingerId {
    type Error = GestureError;

    fn try_from(value: u8) -> Result<Self> {
        ALL_FINGERS
            .get(value as usize)
            .copied()
            .ok_or(GestureError::InvalidFinger(value))
    }
}

/// Position and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: na::Point3<f32>,
    pub rotation: na::UnitQuaternion<f32>,
}

impl Pose {
    pub fn new(position: na::Point3<f32>, rotation: na::UnitQuaternion<f32>) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self {
            position: na::Point3::origin(),
            rotation: na::UnitQuaternion::identity(),
        }
    }

    pub fn to_isometry(&self) -> na::Isometry3<f32> {
        na::Isometry3::from_parts(self.position.coords.into(), self.rotation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::identity()
    }
}

impl From<na::Isometry3<f32>> for Pose {
    fn from(isometry: na::Isometry3<f32>) -> Self {
        Pose {
            position: isometry.translation.vector.into(),
            rotation: isometry.rotation,
        }
    }
}

/// Which fields of a [`Joint`] hold valid data this update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JointTrackingState(u8);

impl JointTrackingState {
    pub const NONE: JointTrackingState = JointTrackingState(0);
    pub const RADIUS: JointTrackingState = JointTrackingState(1 << 0);
    pub const POSE: JointTrackingState = JointTrackingState(1 << 1);
    pub const LINEAR_VELOCITY: JointTrackingState = JointTrackingState(1 << 2);
    pub const ANGULAR_VELOCITY: JointTrackingState = JointTrackingState(1 << 3);
    pub const HIGH_FIDELITY_POSE: JointTrackingState = JointTrackingState(1 << 4);
    pub const WILL_NEVER_BE_VALID: JointTrackingState = JointTrackingState(1 << 5);

    pub fn contains(self, other: JointTrackingState) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: JointTrackingState) -> bool {
        self.0 & other.0 != 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for JointTrackingState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        JointTrackingState(self.0 | rhs.0)
    }
}

impl BitOrAssign for JointTrackingState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for JointTrackingState {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        JointTrackingState(self.0 & rhs.0)
    }
}

/// One tracked landmark. Every field is guarded by its tracking-state bit;
/// the accessors return `None` when the bit is unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    id: JointId,
    handedness: Handedness,
    pose: Pose,
    radius: f32,
    linear_velocity: na::Vector3<f32>,
    angular_velocity: na::Vector3<f32>,
    tracking_state: JointTrackingState,
}

impl Joint {
    pub fn new(id: JointId, handedness: Handedness) -> Self {
        Self {
            id,
            handedness,
            pose: Pose::identity(),
            radius: 0.0,
            linear_velocity: na::Vector3::zeros(),
            angular_velocity: na::Vector3::zeros(),
            tracking_state: JointTrackingState::NONE,
        }
    }

    /// Joint with a valid pose and nothing else.
    pub fn with_pose(id: JointId, handedness: Handedness, pose: Pose) -> Self {
        let mut joint = Joint::new(id, handedness);
        joint.set_pose(pose);
        joint
    }

    pub fn id(&self) -> JointId {
        self.id
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn tracking_state(&self) -> JointTrackingState {
        self.tracking_state
    }

    pub fn pose(&self) -> Option<Pose> {
        if self.tracking_state.contains(JointTrackingState::POSE) {
            Some(self.pose)
        } else {
            None
        }
    }

    pub fn radius(&self) -> Option<f32> {
        if self.tracking_state.contains(JointTrackingState::RADIUS) {
            Some(self.radius)
        } else {
            None
        }
    }

    pub fn linear_velocity(&self) -> Option<na::Vector3<f32>> {
        if self
            .tracking_state
            .contains(JointTrackingState::LINEAR_VELOCITY)
        {
            Some(self.linear_velocity)
        } else {
            None
        }
    }

    pub fn angular_velocity(&self) -> Option<na::Vector3<f32>> {
        if self
            .tracking_state
            .contains(JointTrackingState::ANGULAR_VELOCITY)
        {
            Some(self.angular_velocity)
        } else {
            None
        }
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.tracking_state |= JointTrackingState::POSE;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.tracking_state |= JointTrackingState::RADIUS;
    }

    pub fn set_linear_velocity(&mut self, velocity: na::Vector3<f32>) {
        self.linear_velocity = velocity;
        self.tracking_state |= JointTrackingState::LINEAR_VELOCITY;
    }

    pub fn set_angular_velocity(&mut self, velocity: na::Vector3<f32>) {
        self.angular_velocity = velocity;
        self.tracking_state |= JointTrackingState::ANGULAR_VELOCITY;
    }

    /// Drops every valid field, keeping only the never-valid marker.
    pub fn invalidate(&mut self) {
        let never = self.tracking_state & JointTrackingState::WILL_NEVER_BE_VALID;
        *self = Joint::new(self.id, self.handedness);
        self.tracking_state = never;
    }

    pub(crate) fn mark_never_valid(&mut self) {
        self.invalidate();
        self.tracking_state = JointTrackingState::WILL_NEVER_BE_VALID;
    }
}

/// One hand: root pose, tracked flag and the full joint array.
#[derive(Debug, Clone)]
pub struct Hand {
    handedness: Handedness,
    root_pose: Pose,
    joints: [Joint; JOINT_COUNT],
    tracked: bool,
}

impl Hand {
    pub fn new(handedness: Handedness) -> Self {
        let mut joints = [Joint::new(JointId::Wrist, handedness); JOINT_COUNT];
        for (joint, id) in joints.iter_mut().zip(ALL_JOINTS.iter()) {
            *joint = Joint::new(*id, handedness);
        }
        Self {
            handedness,
            root_pose: Pose::identity(),
            joints,
            tracked: false,
        }
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn joint(&self, id: JointId) -> &Joint {
        &self.joints[id.index()]
    }

    pub fn joint_mut(&mut self, id: JointId) -> &mut Joint {
        &mut self.joints[id.index()]
    }

    pub fn joints(&self) -> &[Joint; JOINT_COUNT] {
        &self.joints
    }

    pub fn joints_mut(&mut self) -> &mut [Joint; JOINT_COUNT] {
        &mut self.joints
    }

    /// Pose of a joint, if it is valid this update.
    pub fn joint_pose(&self, id: JointId) -> Option<Pose> {
        self.joint(id).pose()
    }

    pub fn root_pose(&self) -> Pose {
        self.root_pose
    }

    pub fn set_root_pose(&mut self, pose: Pose) {
        self.root_pose = pose;
    }

    pub fn root_pose_mut(&mut self) -> &mut Pose {
        &mut self.root_pose
    }

    pub fn is_tracked(&self) -> bool {
        self.tracked
    }

    pub fn set_tracked(&mut self, tracked: bool) {
        self.tracked = tracked;
    }
}
