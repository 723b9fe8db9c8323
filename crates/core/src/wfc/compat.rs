//! Edge compatibility between neighboring tiles.

use super::catalog::{TileCatalog, TileVariant, VariantId};
use super::types::Direction;

/// Whether `candidate` may sit on the `direction` side of `existing`.
///
/// The touching faces are compared as ordered sequences: `existing`'s face in
/// `direction` against `candidate`'s opposite face. An absent `existing` tile
/// never constrains anything.
pub fn can_append(
    existing: Option<&TileVariant>,
    candidate: &TileVariant,
    direction: Direction,
) -> bool {
    let Some(existing) = existing else {
        return true;
    };
    existing.face(direction) == candidate.face(direction.opposite())
}

/// `can_append` evaluated once for every ordered pair of variants and every
/// direction, so propagation never compares color sequences directly.
#[derive(Clone, Debug)]
pub struct AdjacencyTable {
    variant_count: usize,
    allowed: Vec<bool>,
}

impl AdjacencyTable {
    pub fn build(catalog: &TileCatalog) -> Self {
        let variant_count = catalog.len();
        let mut allowed = vec![false; Direction::ALL.len() * variant_count * variant_count];
        for direction in Direction::ALL {
            for (a, existing) in catalog.variants().iter().enumerate() {
                for (b, candidate) in catalog.variants().iter().enumerate() {
                    let slot = Self::slot(variant_count, direction, a, b);
                    allowed[slot] = can_append(Some(existing), candidate, direction);
                }
            }
        }
        Self { variant_count, allowed }
    }

    pub fn allows(&self, existing: VariantId, candidate: VariantId, direction: Direction) -> bool {
        self.allowed[Self::slot(self.variant_count, direction, existing.0, candidate.0)]
    }

    /// True when at least one of `neighbors` fits on the `direction` side of `tile`.
    pub fn has_partner(
        &self,
        tile: VariantId,
        neighbors: &[VariantId],
        direction: Direction,
    ) -> bool {
        neighbors.iter().any(|&neighbor| self.allows(tile, neighbor, direction))
    }

    fn slot(variant_count: usize, direction: Direction, a: usize, b: usize) -> usize {
        (direction.index() * variant_count + a) * variant_count + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wfc::tile::{EdgeSignature, RotationClass, TileDefinition};

    fn catalog() -> TileCatalog {
        TileCatalog::build(&[
            TileDefinition::new("grass", 1, RotationClass::None, EdgeSignature::uniform(&[0, 0])),
            TileDefinition::new(
                "shore",
                1,
                RotationClass::Four,
                EdgeSignature {
                    left: vec![0, 0],
                    right: vec![5, 5],
                    forward: vec![0, 5],
                    back: vec![0, 5],
                },
            ),
            TileDefinition::new("short", 1, RotationClass::None, EdgeSignature::uniform(&[0])),
            TileDefinition::new("void", 1, RotationClass::None, EdgeSignature::uniform(&[])),
        ])
    }

    #[test]
    fn absent_neighbor_accepts_anything() {
        let catalog = catalog();
        for variant in catalog.variants() {
            for direction in Direction::ALL {
                assert!(can_append(None, variant, direction));
            }
        }
    }

    #[test]
    fn compares_facing_sequences() {
        let catalog = catalog();
        let grass = catalog.get(VariantId(0));
        let shore = catalog.get(VariantId(1));
        assert!(can_append(Some(grass), grass, Direction::Right));
        assert!(can_append(Some(grass), shore, Direction::Right));
        assert!(!can_append(Some(grass), shore, Direction::Left));
        assert!(can_append(Some(shore), grass, Direction::Left));
    }

    #[test]
    fn length_mismatch_is_incompatible() {
        let catalog = catalog();
        let grass = catalog.get(VariantId(0));
        let short = catalog.get(VariantId(5));
        assert_eq!(short.id, "short");
        assert!(!can_append(Some(grass), short, Direction::Forward));
    }

    #[test]
    fn empty_faces_only_match_empty_faces() {
        let catalog = catalog();
        let void = catalog.get(VariantId(6));
        assert_eq!(void.id, "void");
        assert!(can_append(Some(void), void, Direction::Back));
        assert!(!can_append(Some(void), catalog.get(VariantId(0)), Direction::Back));
    }

    #[test]
    fn forward_check_agrees_with_mirrored_reverse_check() {
        let catalog = catalog();
        for a in catalog.variants() {
            for b in catalog.variants() {
                for direction in Direction::ALL {
                    assert_eq!(
                        can_append(Some(a), b, direction),
                        can_append(Some(b), a, direction.opposite()),
                        "{} -> {} towards {direction:?}",
                        a.id,
                        b.id
                    );
                }
            }
        }
    }

    #[test]
    fn table_matches_direct_comparison() {
        let catalog = catalog();
        let table = AdjacencyTable::build(&catalog);
        for a in catalog.all_ids() {
            for b in catalog.all_ids() {
                for direction in Direction::ALL {
                    assert_eq!(
                        table.allows(a, b, direction),
                        can_append(Some(catalog.get(a)), catalog.get(b), direction)
                    );
                }
            }
        }
        assert!(table.has_partner(VariantId(0), &catalog.all_ids(), Direction::Left));
        assert!(!table.has_partner(VariantId(6), &[VariantId(0), VariantId(5)], Direction::Left));
    }
}
