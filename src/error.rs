use thiserror::Error;

#[derive(Error, Debug)]
pub enum GestureError {
    #[error("finger index {0} is out of range")]
    InvalidFinger(u8),
    #[error("joint index {0} is out of range")]
    InvalidJoint(usize),
    #[error("unknown joint name {0:?}")]
    UnknownJointName(String),
    #[error("finger shape type {0} is invalid for a finger shape target")]
    InvalidShapeType(u8),
    #[error("malformed recording frame on line {line}: {reason}")]
    MalformedFrame { line: usize, reason: String },
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("json error")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GestureError>;
