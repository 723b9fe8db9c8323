//! Built-in tile sets with hand-written edge signatures.

use crate::wfc::{ColorCode, EdgeSignature, RotationClass, TileDefinition};

pub mod keys {
    pub const GRASS: &str = "grass";
    pub const ROAD_END: &str = "road_end";
    pub const ROAD_STRAIGHT: &str = "road_straight";
    pub const ROAD_CORNER: &str = "road_corner";
    pub const ROAD_TEE: &str = "road_tee";
    pub const ROAD_CROSSING: &str = "road_crossing";

    pub const TERRACE_SLOPE: &str = "terrace_slope";
    pub const TERRACE_LEDGE: &str = "terrace_ledge";
    pub const TERRACE_STEP: &str = "terrace_step";
}

const GRASS_EDGE: [ColorCode; 3] = [0, 0, 0];
const ROAD_EDGE: [ColorCode; 3] = [0, 1, 0];

const LOW_FACE: [ColorCode; 2] = [0, 0];
const HIGH_FACE: [ColorCode; 2] = [1, 1];
const RISING_FACE: [ColorCode; 2] = [0, 1];

/// Faces given in left, right, forward, back order; `true` marks a road.
fn road_edges(left: bool, right: bool, forward: bool, back: bool) -> EdgeSignature {
    let face = |road: bool| if road { ROAD_EDGE.to_vec() } else { GRASS_EDGE.to_vec() };
    EdgeSignature { left: face(left), right: face(right), forward: face(forward), back: face(back) }
}

/// Grass with a road network. Every road/grass combination of the four faces
/// exists after rotation, so propagation never runs into a contradiction.
pub fn road_tileset() -> Vec<TileDefinition> {
    vec![
        TileDefinition::new(
            keys::GRASS,
            40,
            RotationClass::None,
            road_edges(false, false, false, false),
        ),
        TileDefinition::new(
            keys::ROAD_END,
            4,
            RotationClass::Four,
            road_edges(false, false, true, false),
        ),
        TileDefinition::new(
            keys::ROAD_STRAIGHT,
            12,
            RotationClass::Two,
            road_edges(true, true, false, false),
        ),
        TileDefinition::new(
            keys::ROAD_CORNER,
            8,
            RotationClass::Four,
            road_edges(false, true, true, false),
        ),
        TileDefinition::new(
            keys::ROAD_TEE,
            4,
            RotationClass::Four,
            road_edges(true, true, true, false),
        ),
        TileDefinition::new(
            keys::ROAD_CROSSING,
            2,
            RotationClass::None,
            road_edges(true, true, true, true),
        ),
    ]
}

/// Terraced hillside. Faces are sampled at two points, `0` on low ground and
/// `1` on high ground, so a rising face only meets a face rising the same way.
/// Tiles that fit every neighbor pairwise still leave some cells with no tile
/// at all, so most runs repair contradictions and some need a fresh attempt.
pub fn terrace_tileset() -> Vec<TileDefinition> {
    vec![
        TileDefinition::new(
            keys::TERRACE_SLOPE,
            4,
            RotationClass::Two,
            EdgeSignature {
                left: LOW_FACE.to_vec(),
                right: LOW_FACE.to_vec(),
                forward: RISING_FACE.to_vec(),
                back: RISING_FACE.to_vec(),
            },
        ),
        TileDefinition::new(
            keys::TERRACE_LEDGE,
            6,
            RotationClass::Two,
            EdgeSignature {
                left: LOW_FACE.to_vec(),
                right: HIGH_FACE.to_vec(),
                forward: HIGH_FACE.to_vec(),
                back: RISING_FACE.to_vec(),
            },
        ),
        TileDefinition::new(
            keys::TERRACE_STEP,
            6,
            RotationClass::None,
            EdgeSignature {
                left: HIGH_FACE.to_vec(),
                right: LOW_FACE.to_vec(),
                forward: HIGH_FACE.to_vec(),
                back: LOW_FACE.to_vec(),
            },
        ),
    ]
}
