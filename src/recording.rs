//! Recorded hand frames, stored as JSON lines.
//!
//! Each line holds one frame:
//!
//! ```json
//! {"left": {"tracked": true,
//!           "root": {"position": {"x": 0.0, "y": 1.0, "z": 0.3},
//!                    "rotation": {"x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0}},
//!           "joints": {"index-tip": {"matrix": [[1, 0, 0, 0.1], [0, 1, 0, 1.0], [0, 0, 1, 0.4]],
//!                                    "radius": 0.008}}},
//!  "head": {"position": {"x": 0.0, "y": 1.6, "z": 0.0},
//!           "rotation": {"x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0}}}
//! ```
//!
//! Poses are either a position with a quaternion or a row-major 3x4
//! transform as reported by OpenVR.

use crate::common_gestures::GestureSample;
use crate::error::{GestureError, Result};
use crate::hand::{Handedness, Joint, JointId, JointTrackingState, Pose, JOINT_COUNT};
use crate::orientation::StaticOrigin;
use crate::tracker::{HandProvider, UpdateSuccessFlags, UpdateType};
use log::*;
use nalgebra as na;
use serde::Deserialize;
use std::collections::{HashMap, VecDeque};
use std::io::BufRead;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(untagged)]
pub enum PoseRecord {
    Components { position: Vector, rotation: Quaternion },
    Matrix { matrix: [[f32; 4]; 3] },
}

impl PoseRecord {
    pub fn to_pose(&self) -> Pose {
        match self {
            PoseRecord::Components { position, rotation } => Pose::new(
                na::Point3::new(position.x, position.y, position.z),
                na::UnitQuaternion::from_quaternion(na::Quaternion::new(
                    rotation.w, rotation.x, rotation.y, rotation.z,
                )),
            ),
            PoseRecord::Matrix { matrix } => Pose::new(matrix.to_position(), matrix.to_rotation()),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct JointRecord {
    #[serde(flatten)]
    pub pose: PoseRecord,
    #[serde(default)]
    pub radius: Option<f32>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct HandRecord {
    #[serde(default = "default_tracked")]
    pub tracked: bool,
    #[serde(default)]
    pub root: Option<PoseRecord>,
    #[serde(default)]
    pub joints: HashMap<String, JointRecord>,
    #[serde(default)]
    pub pinch_value: Option<f32>,
    #[serde(default)]
    pub grasp_value: Option<f32>,
    #[serde(default)]
    pub aim_activate_value: Option<f32>,
}

fn default_tracked() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FrameRecord {
    #[serde(default)]
    pub left: Option<HandRecord>,
    #[serde(default)]
    pub right: Option<HandRecord>,
    #[serde(default)]
    pub origin: Option<PoseRecord>,
    #[serde(default)]
    pub head: Option<PoseRecord>,
}

impl FrameRecord {
    pub fn deserialize(data: &[u8]) -> Result<FrameRecord> {
        Ok(serde_json::from_slice::<FrameRecord>(data)?)
    }
}

/// Joint transforms in OpenVR's row-major 3x4 layout.
pub trait MatrixPose {
    fn to_position(&self) -> na::Point3<f32>;
    fn to_rotation(&self) -> na::UnitQuaternion<f32>;
}

impl MatrixPose for [[f32; 4]; 3] {
    fn to_position(&self) -> na::Point3<f32> {
        na::Point3::new(self[0][3], self[1][3], self[2][3])
    }

    /// Rotation from the upper 3x3 block.
    ///
    /// # Reference
    ///
    /// based on [Valve implementation on github](
    /// https://github.com/ValveSoftware/openvr/blob/60eb187801956ad277f1cae6680e3a410ee0873b/samples/unity_teleport_sample/Assets/SteamVR/Scripts/SteamVR_Utils.cs#L142)
    #[allow(clippy::many_single_char_names)]
    fn to_rotation(&self) -> na::UnitQuaternion<f32> {
        let m = self;
        let w = 0_f32.max(1. + m[0][0] + m[1][1] + m[2][2]).sqrt() / 2.0;
        let i = 0_f32.max(1. + m[0][0] - m[1][1] - m[2][2]).sqrt() / 2.0;
        let j = 0_f32.max(1. - m[0][0] + m[1][1] - m[2][2]).sqrt() / 2.0;
        let k = 0_f32.max(1. - m[0][0] - m[1][1] + m[2][2]).sqrt() / 2.0;
        let i = i.copysign(m[2][1] - m[1][2]);
        let j = j.copysign(m[0][2] - m[2][0]);
        let k = k.copysign(m[1][0] - m[0][1]);
        na::UnitQuaternion::from_quaternion(na::Quaternion::new(w, i, j, k))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordedHand {
    pub root: Option<Pose>,
    pub joints: Vec<(JointId, Pose, Option<f32>)>,
    pub gestures: GestureSample,
}

impl RecordedHand {
    fn from_record(record: &HandRecord) -> Result<Option<RecordedHand>> {
        if !record.tracked {
            return Ok(None);
        }
        let mut joints = Vec::with_capacity(record.joints.len());
        for (name, joint) in &record.joints {
            joints.push((JointId::from_name(name)?, joint.pose.to_pose(), joint.radius));
        }
        joints.sort_by_key(|(id, _, _)| *id);
        Ok(Some(RecordedHand {
            root: record.root.as_ref().map(PoseRecord::to_pose),
            joints,
            gestures: GestureSample {
                pinch_value: record.pinch_value,
                grasp_value: record.grasp_value,
                aim_activate_value: record.aim_activate_value,
                ..GestureSample::default()
            },
        }))
    }

    fn write_joints(&self, joints: &mut [Joint; JOINT_COUNT]) -> bool {
        for joint in joints.iter_mut() {
            joint.invalidate();
        }
        let mut any = false;
        for (id, pose, radius) in &self.joints {
            let joint = &mut joints[id.index()];
            if joint
                .tracking_state()
                .contains(JointTrackingState::WILL_NEVER_BE_VALID)
            {
                continue;
            }
            joint.set_pose(*pose);
            if let Some(radius) = radius {
                joint.set_radius(*radius);
            }
            any = true;
        }
        any
    }
}

/// One decoded frame.
#[derive(Debug, Clone, Default)]
pub struct RecordedFrame {
    pub hands: [Option<RecordedHand>; 2],
    pub origin: Option<Pose>,
    pub head: Option<Pose>,
}

impl RecordedFrame {
    pub fn from_record(record: &FrameRecord) -> Result<Self> {
        let left = match &record.left {
            Some(hand) => RecordedHand::from_record(hand)?,
            None => None,
        };
        let right = match &record.right {
            Some(hand) => RecordedHand::from_record(hand)?,
            None => None,
        };
        Ok(Self {
            hands: [left, right],
            origin: record.origin.as_ref().map(PoseRecord::to_pose),
            head: record.head.as_ref().map(PoseRecord::to_pose),
        })
    }
}

/// Replays a recording one frame per update.
#[derive(Debug, Clone, Default)]
pub struct RecordedHandProvider {
    frames: VecDeque<RecordedFrame>,
    current: Option<RecordedFrame>,
}

impl RecordedHandProvider {
    pub fn new(frames: Vec<RecordedFrame>) -> Self {
        Self {
            frames: frames.into(),
            current: None,
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Blank lines are skipped. Line numbers in errors start at 1.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut frames = vec![];
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = FrameRecord::deserialize(line.as_bytes()).map_err(|error| {
                GestureError::MalformedFrame {
                    line: index + 1,
                    reason: error.to_string(),
                }
            })?;
            frames.push(RecordedFrame::from_record(&record)?);
        }
        debug!("Loaded {} recorded frames", frames.len());
        Ok(Self::new(frames))
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }

    /// Origin and head of the frame last handed out. Frames without an
    /// origin use the identity, frames without a head have none.
    pub fn environment(&self) -> StaticOrigin {
        match &self.current {
            Some(frame) => StaticOrigin {
                origin: Some(frame.origin.unwrap_or_default().to_isometry()),
                head: frame.head.map(|head| head.to_isometry()),
            },
            None => StaticOrigin::default(),
        }
    }
}

impl HandProvider for RecordedHandProvider {
    fn try_update_hands(
        &mut self,
        _update_type: UpdateType,
        left_root_pose: &mut Pose,
        left_joints: &mut [Joint; JOINT_COUNT],
        right_root_pose: &mut Pose,
        right_joints: &mut [Joint; JOINT_COUNT],
    ) -> UpdateSuccessFlags {
        self.current = self.frames.pop_front();
        let frame = match &self.current {
            Some(frame) => frame,
            None => return UpdateSuccessFlags::NONE,
        };

        let mut flags = UpdateSuccessFlags::NONE;
        let targets = [
            (Handedness::Left, left_root_pose, left_joints),
            (Handedness::Right, right_root_pose, right_joints),
        ];
        for (handedness, root_pose, joints) in targets {
            let hand = match &frame.hands[handedness.index()] {
                Some(hand) => hand,
                None => {
                    for joint in joints.iter_mut() {
                        joint.invalidate();
                    }
                    continue;
                }
            };
            if let Some(root) = hand.root {
                *root_pose = root;
                flags |= UpdateSuccessFlags::root_pose(handedness);
            }
            if hand.write_joints(joints) {
                flags |= UpdateSuccessFlags::joints(handedness);
            }
        }
        flags
    }

    fn try_get_common_gestures(&mut self, handedness: Handedness) -> Option<GestureSample> {
        self.current
            .as_ref()
            .map(|frame| match &frame.hands[handedness.index()] {
                Some(hand) => hand.gestures,
                None => GestureSample::default(),
            })
    }
}
