//! Caller-supplied tile prototypes and their per-face color signatures.

use serde::{Deserialize, Serialize};

use super::types::{ColorCode, Direction};

/// How many quarter-turn variants a base tile expands into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationClass {
    #[default]
    None,
    Two,
    Four,
}

impl RotationClass {
    pub fn variant_count(self) -> u32 {
        match self {
            Self::None => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }
}

/// Ordered color sequences along each of the four faces.
///
/// Two faces match only when their sequences are equal element by element,
/// so an empty sequence matches nothing but another empty sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeSignature {
    #[serde(default)]
    pub left: Vec<ColorCode>,
    #[serde(default)]
    pub right: Vec<ColorCode>,
    #[serde(default)]
    pub forward: Vec<ColorCode>,
    #[serde(default)]
    pub back: Vec<ColorCode>,
}

impl EdgeSignature {
    /// Same sequence on all four faces.
    pub fn uniform(colors: &[ColorCode]) -> Self {
        Self {
            left: colors.to_vec(),
            right: colors.to_vec(),
            forward: colors.to_vec(),
            back: colors.to_vec(),
        }
    }

    pub fn face(&self, direction: Direction) -> &[ColorCode] {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Forward => &self.forward,
            Direction::Back => &self.back,
        }
    }

    /// One clockwise quarter turn: forward moves to right, right to back,
    /// back to left and left to forward.
    pub fn rotated(&self) -> Self {
        Self {
            right: self.forward.clone(),
            back: self.right.clone(),
            left: self.back.clone(),
            forward: self.left.clone(),
        }
    }
}

/// Immutable description of one placeable tile prototype.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    pub id: String,
    pub weight: u32,
    #[serde(default)]
    pub rotation: RotationClass,
    pub edges: EdgeSignature,
}

impl TileDefinition {
    pub fn new(
        id: impl Into<String>,
        weight: u32,
        rotation: RotationClass,
        edges: EdgeSignature,
    ) -> Self {
        Self { id: id.into(), weight, rotation, edges }
    }
}
