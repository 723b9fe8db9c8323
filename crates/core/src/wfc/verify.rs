//! Post-hoc consistency checks over an emitted placement list.

use std::collections::BTreeMap;

use super::catalog::{TileCatalog, TileVariant};
use super::compat::can_append;
use super::model::GenerationReport;
use super::tile::TileDefinition;
use super::types::{Direction, Pos, Rotation};

/// A pair of emitted neighbors whose touching faces disagree, or a placement
/// that does not correspond to any catalog variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutViolation {
    Mismatch { pos: Pos, direction: Direction },
    UnknownTile { pos: Pos, tile_id: String },
    OnBorder { pos: Pos },
}

/// Checks every placement against its right and forward neighbors and that
/// nothing sits on the grid border.
pub fn find_layout_violation(
    base_tiles: &[TileDefinition],
    report: &GenerationReport,
) -> Option<LayoutViolation> {
    let catalog = TileCatalog::build(base_tiles);
    let mut placed: BTreeMap<Pos, &TileVariant> = BTreeMap::new();
    for placement in &report.placements {
        let pos = placement.position;
        if pos.x == 0 || pos.y == 0 || pos.x + 1 >= report.width || pos.y + 1 >= report.height {
            return Some(LayoutViolation::OnBorder { pos });
        }
        let Some(variant) = find_variant(&catalog, &placement.tile_id, placement.rotation) else {
            return Some(LayoutViolation::UnknownTile { pos, tile_id: placement.tile_id.clone() });
        };
        placed.insert(pos, variant);
    }

    for (&pos, &variant) in &placed {
        for direction in [Direction::Right, Direction::Forward] {
            if let Some(&neighbor) = placed.get(&pos.step(direction))
                && !can_append(Some(variant), neighbor, direction)
            {
                return Some(LayoutViolation::Mismatch { pos, direction });
            }
        }
    }
    None
}

fn find_variant<'a>(
    catalog: &'a TileCatalog,
    tile_id: &str,
    rotation: Rotation,
) -> Option<&'a TileVariant> {
    catalog.variants().iter().find(|variant| variant.id == tile_id && variant.rotation == rotation)
}
