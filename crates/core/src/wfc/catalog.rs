//! Rotation expansion of base tiles into the flat variant catalog the solver works over.

use super::tile::{EdgeSignature, RotationClass, TileDefinition};
use super::types::{ColorCode, Direction, Rotation};

/// Index of a variant inside its [`TileCatalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantId(pub usize);

/// A base tile turned by zero to three quarter turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileVariant {
    pub id: String,
    /// Position of the originating tile in the caller's base list.
    pub base_index: usize,
    pub rotation: Rotation,
    pub weight: u32,
    pub edges: EdgeSignature,
}

impl TileVariant {
    pub fn face(&self, direction: Direction) -> &[ColorCode] {
        self.edges.face(direction)
    }

    /// This variant turned one further quarter turn. Composes with the
    /// current rotation instead of starting over from the base tile.
    pub fn rotated(&self) -> Self {
        Self {
            id: self.id.clone(),
            base_index: self.base_index,
            rotation: self.rotation.next(),
            weight: self.weight,
            edges: self.edges.rotated(),
        }
    }
}

/// Ordered, immutable list of every variant available to one generate call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileCatalog {
    variants: Vec<TileVariant>,
}

impl TileCatalog {
    /// Expands each base tile in order. A rotating tile splits its weight
    /// evenly across its variants, never dropping below 1.
    pub fn build(base_tiles: &[TileDefinition]) -> Self {
        let mut variants = Vec::new();
        for (base_index, tile) in base_tiles.iter().enumerate() {
            let count = tile.rotation.variant_count();
            let weight = match tile.rotation {
                RotationClass::None => tile.weight,
                RotationClass::Two | RotationClass::Four => (tile.weight / count).max(1),
            };

            let mut variant = TileVariant {
                id: tile.id.clone(),
                base_index,
                rotation: Rotation::Deg0,
                weight,
                edges: tile.edges.clone(),
            };
            for _ in 1..count {
                let next = variant.rotated();
                variants.push(variant);
                variant = next;
            }
            variants.push(variant);
        }
        Self { variants }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn get(&self, id: VariantId) -> &TileVariant {
        &self.variants[id.0]
    }

    pub fn variants(&self) -> &[TileVariant] {
        &self.variants
    }

    /// Every variant id in catalog order; the starting domain of each cell.
    pub fn all_ids(&self) -> Vec<VariantId> {
        (0..self.variants.len()).map(VariantId).collect()
    }
}
