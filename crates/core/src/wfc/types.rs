//! Grid-space primitives shared by every stage of the solver.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A discrete color code sampled along one face of a tile.
pub type ColorCode = u32;

/// Grid coordinate. Field order makes the derived `Ord` row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: usize,
    pub x: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { y, x }
    }

    /// Neighbor one step away. Callers only step from interior cells, so the
    /// result never underflows.
    pub(crate) fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => Self { y: self.y, x: self.x - 1 },
            Direction::Right => Self { y: self.y, x: self.x + 1 },
            Direction::Forward => Self { y: self.y + 1, x: self.x },
            Direction::Back => Self { y: self.y - 1, x: self.x },
        }
    }

    pub(crate) fn neighbors(self) -> [Self; 4] {
        Direction::ALL.map(|direction| self.step(direction))
    }
}

/// Horizontal face of a tile. Right is +x, Forward is +y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Forward,
    Back,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Forward, Direction::Back];

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Forward => Self::Back,
            Self::Back => Self::Forward,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Forward => 2,
            Self::Back => 3,
        }
    }
}

/// Quarter-turn rotation carried by a tile variant for the visualizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// One further clockwise quarter turn.
    pub fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

impl Serialize for Rotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Rotation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let degrees = u16::deserialize(deserializer)?;
        Self::from_degrees(degrees).ok_or_else(|| {
            de::Error::custom(format!("rotation must be 0, 90, 180 or 270, got {degrees}"))
        })
    }
}
