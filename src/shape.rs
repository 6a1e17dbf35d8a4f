use crate::error::{GestureError, Result};
use std::convert::TryFrom;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// One normalized finger measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerShapeType {
    FullCurl,
    BaseCurl,
    TipCurl,
    Pinch,
    Spread,
}

// Bit layout of `FingerShapeTypes`. Kept independent from the declaration
// order of `FingerShapeType`.
static SHAPE_TYPE_BITS: [(FingerShapeType, u8); 5] = [
    (FingerShapeType::FullCurl, 1 << 0),
    (FingerShapeType::BaseCurl, 1 << 1),
    (FingerShapeType::TipCurl, 1 << 2),
    (FingerShapeType::Pinch, 1 << 3),
    (FingerShapeType::Spread, 1 << 4),
];

impl FingerShapeType {
    pub fn all() -> [FingerShapeType; 5] {
        [
            FingerShapeType::FullCurl,
            FingerShapeType::BaseCurl,
            FingerShapeType::TipCurl,
            FingerShapeType::Pinch,
            FingerShapeType::Spread,
        ]
    }

    pub fn as_flag(self) -> FingerShapeTypes {
        let bit = SHAPE_TYPE_BITS
            .iter()
            .find(|(shape_type, _)| *shape_type == self)
            .map(|(_, bit)| *bit)
            .unwrap_or(0);
        FingerShapeTypes(bit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FingerShapeType::FullCurl => "full curl",
            FingerShapeType::BaseCurl => "base curl",
            FingerShapeType::TipCurl => "tip curl",
            FingerShapeType::Pinch => "pinch",
            FingerShapeType::Spread => "spread",
        }
    }
}

impl TryFrom<u8> for FingerShapeType {
    type Error = GestureError;

    fn try_from(value: u8) -> Result<Self> {
        FingerShapeType::all()
            .get(value as usize)
            .copied()
            .ok_or(GestureError::InvalidShapeType(value))
    }
}

/// Set of [`FingerShapeType`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FingerShapeTypes(u8);

impl FingerShapeTypes {
    pub const NONE: FingerShapeTypes = FingerShapeTypes(0);
    pub const FULL_CURL: FingerShapeTypes = FingerShapeTypes(1 << 0);
    pub const BASE_CURL: FingerShapeTypes = FingerShapeTypes(1 << 1);
    pub const TIP_CURL: FingerShapeTypes = FingerShapeTypes(1 << 2);
    pub const PINCH: FingerShapeTypes = FingerShapeTypes(1 << 3);
    pub const SPREAD: FingerShapeTypes = FingerShapeTypes(1 << 4);
    pub const ALL: FingerShapeTypes = FingerShapeTypes((1 << 5) - 1);

    pub fn contains(self, other: FingerShapeTypes) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn has(self, shape_type: FingerShapeType) -> bool {
        self.contains(shape_type.as_flag())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Individual types in this set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = FingerShapeType> {
        SHAPE_TYPE_BITS
            .iter()
            .filter(move |(_, bit)| self.0 & bit != 0)
            .map(|(shape_type, _)| *shape_type)
    }
}

impl From<FingerShapeType> for FingerShapeTypes {
    fn from(shape_type: FingerShapeType) -> Self {
        shape_type.as_flag()
    }
}

impl BitOr for FingerShapeTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        FingerShapeTypes(self.0 | rhs.0)
    }
}

impl BitOrAssign for FingerShapeTypes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FingerShapeTypes {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        FingerShapeTypes(self.0 & rhs.0)
    }
}

impl Not for FingerShapeTypes {
    type Output = Self;

    fn not(self) -> Self {
        FingerShapeTypes(!self.0 & FingerShapeTypes::ALL.0)
    }
}

/// Calculated values for one finger. A value is only meaningful when its
/// type is in [`FingerShape::types`]; the accessors return `None` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FingerShape {
    pub(crate) types: FingerShapeTypes,
    pub(crate) full_curl: f32,
    pub(crate) base_curl: f32,
    pub(crate) tip_curl: f32,
    pub(crate) pinch: f32,
    pub(crate) spread: f32,
}

impl FingerShape {
    pub fn types(&self) -> FingerShapeTypes {
        self.types
    }

    pub fn full_curl(&self) -> Option<f32> {
        self.guarded(FingerShapeTypes::FULL_CURL, self.full_curl)
    }

    pub fn base_curl(&self) -> Option<f32> {
        self.guarded(FingerShapeTypes::BASE_CURL, self.base_curl)
    }

    pub fn tip_curl(&self) -> Option<f32> {
        self.guarded(FingerShapeTypes::TIP_CURL, self.tip_curl)
    }

    pub fn pinch(&self) -> Option<f32> {
        self.guarded(FingerShapeTypes::PINCH, self.pinch)
    }

    pub fn spread(&self) -> Option<f32> {
        self.guarded(FingerShapeTypes::SPREAD, self.spread)
    }

    pub fn value(&self, shape_type: FingerShapeType) -> Option<f32> {
        match shape_type {
            FingerShapeType::FullCurl => self.full_curl(),
            FingerShapeType::BaseCurl => self.base_curl(),
            FingerShapeType::TipCurl => self.tip_curl(),
            FingerShapeType::Pinch => self.pinch(),
            FingerShapeType::Spread => self.spread(),
        }
    }

    pub(crate) fn store(&mut self, shape_type: FingerShapeType, value: f32) {
        match shape_type {
            FingerShapeType::FullCurl => self.full_curl = value,
            FingerShapeType::BaseCurl => self.base_curl = value,
            FingerShapeType::TipCurl => self.tip_curl = value,
            FingerShapeType::Pinch => self.pinch = value,
            FingerShapeType::Spread => self.spread = value,
        }
        self.types |= shape_type.as_flag();
    }

    pub(crate) fn clear(&mut self) {
        self.types = FingerShapeTypes::NONE;
    }

    fn guarded(&self, flag: FingerShapeTypes, value: f32) -> Option<f32> {
        if self.types.contains(flag) {
            Some(value)
        } else {
            None
        }
    }
}
