//! Wave function collapse over a rectangular tile grid, split into coherent submodules.
//!
//! Border cells are never placed. They keep the full catalog for the whole
//! run and are skipped when dequeued, so they never constrain the interior.

pub mod model;

mod catalog;
mod compat;
mod domain;
mod error;
mod generator;
mod picker;
mod propagate;
mod tile;
mod types;
mod verify;

pub use catalog::{TileCatalog, TileVariant, VariantId};
pub use compat::{AdjacencyTable, can_append};
pub use domain::GridDomain;
pub use error::ConfigError;
pub use generator::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_PROPAGATION_STEPS, Generator, GeneratorConfig,
    MAX_GRID_CELLS,
};
pub use model::{AttemptFailure, GenerationOutcome, GenerationReport, GenerationStats, Placement};
pub use picker::pick_weighted;
pub use propagate::{ConstraintPropagator, PropagationOutcome, PropagationStats};
pub use tile::{EdgeSignature, RotationClass, TileDefinition};
pub use types::{ColorCode, Direction, Pos, Rotation};
pub use verify::{LayoutViolation, find_layout_violation};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

/// Runs the default generator with a ChaCha8 stream seeded from `seed`.
pub fn generate_layout(
    seed: u64,
    width: usize,
    height: usize,
    base_tiles: &[TileDefinition],
) -> Result<GenerationReport, ConfigError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Generator::default().generate(width, height, base_tiles, &mut rng)
}
