//! Attempt loop that seeds, propagates, collapses and emits the final placements.

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::catalog::TileCatalog;
use super::compat::AdjacencyTable;
use super::domain::GridDomain;
use super::error::ConfigError;
use super::model::{AttemptFailure, GenerationOutcome, GenerationReport, GenerationStats, Placement};
use super::picker::pick_weighted;
use super::propagate::{ConstraintPropagator, PropagationOutcome, PropagationStats};
use super::tile::TileDefinition;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
pub const DEFAULT_MAX_PROPAGATION_STEPS: usize = 500;
/// Largest `width * height` accepted. Every cell holds its own domain.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Search bounds. These caps are the only thing that stops a hopeless search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fresh attempts before reporting failure.
    pub max_attempts: usize,
    /// Frontier dequeues allowed per propagation pass.
    pub max_propagation_steps: usize,
    /// Collapses allowed per attempt; `None` means `width * height`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_collapse_steps: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_propagation_steps: DEFAULT_MAX_PROPAGATION_STEPS,
            max_collapse_steps: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Fills every interior cell of a `width × height` grid with a tile from
    /// the rotation-expanded catalog of `base_tiles`.
    ///
    /// Invalid input is rejected before any attempt runs. An unsatisfiable
    /// tile set is not an error: the report comes back `Failed` with no
    /// placements once every attempt is spent.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        base_tiles: &[TileDefinition],
        rng: &mut R,
    ) -> Result<GenerationReport, ConfigError> {
        validate_input(width, height, base_tiles)?;

        let mut stats = GenerationStats::default();
        if width == 2 || height == 2 {
            return Ok(GenerationReport {
                width,
                height,
                outcome: GenerationOutcome::Succeeded,
                placements: Vec::new(),
                stats,
            });
        }

        let catalog = TileCatalog::build(base_tiles);
        let table = AdjacencyTable::build(&catalog);

        for attempt in 1..=self.config.max_attempts {
            stats.attempts += 1;
            match self.run_attempt(&catalog, &table, width, height, rng, &mut stats) {
                Ok(grid) => {
                    info!(
                        attempt,
                        collapses = stats.collapses,
                        backtracks = stats.backtracks,
                        "tile layout generated"
                    );
                    return Ok(GenerationReport {
                        width,
                        height,
                        outcome: GenerationOutcome::Succeeded,
                        placements: emit_placements(&grid, &catalog),
                        stats,
                    });
                }
                Err(reason) => {
                    stats.failed_attempts += 1;
                    debug!(attempt, ?reason, backtracks = stats.backtracks, "attempt abandoned");
                }
            }
        }

        warn!(
            attempts = stats.attempts,
            backtracks = stats.backtracks,
            "tile layout generation failed"
        );
        Ok(GenerationReport {
            width,
            height,
            outcome: GenerationOutcome::Failed,
            placements: Vec::new(),
            stats,
        })
    }

    fn run_attempt<R: Rng + ?Sized>(
        &self,
        catalog: &TileCatalog,
        table: &AdjacencyTable,
        width: usize,
        height: usize,
        rng: &mut R,
        stats: &mut GenerationStats,
    ) -> Result<GridDomain, AttemptFailure> {
        let mut grid = GridDomain::new(width, height, catalog.all_ids());
        let center = grid.center();
        let seed_tile = pick_weighted(rng, catalog, grid.full_catalog());
        grid.collapse(center, seed_tile);
        grid.enqueue_neighbors(center);
        stats.collapses += 1;

        let propagator = ConstraintPropagator::new(table, self.config.max_propagation_steps);
        let collapse_limit = self.config.max_collapse_steps.unwrap_or(width * height);
        let mut propagation = PropagationStats::default();

        let result = 'search: {
            for _ in 0..collapse_limit {
                if propagator.propagate(&mut grid, &mut propagation)
                    == PropagationOutcome::CapReached
                {
                    break 'search Err(AttemptFailure::PropagationCapReached);
                }

                let Some((pos, size)) = grid.max_entropy_cell() else {
                    break 'search Ok(());
                };
                if size == 1 {
                    break 'search Ok(());
                }

                let tile = pick_weighted(rng, catalog, grid.domain(pos));
                grid.collapse(pos, tile);
                grid.enqueue_neighbors(pos);
                stats.collapses += 1;
            }
            Err(AttemptFailure::CollapseLimitReached)
        };

        stats.backtracks += propagation.backtracks;
        stats.propagation_steps += propagation.dequeues;
        result.map(|()| grid)
    }
}

fn validate_input(
    width: usize,
    height: usize,
    base_tiles: &[TileDefinition],
) -> Result<(), ConfigError> {
    if base_tiles.is_empty() {
        return Err(ConfigError::EmptyTileSet);
    }
    if let Some(tile) = base_tiles.iter().find(|tile| tile.weight == 0) {
        return Err(ConfigError::ZeroWeight { id: tile.id.clone() });
    }
    if width < 2 || height < 2 {
        return Err(ConfigError::GridTooSmall { width, height });
    }
    if width.checked_mul(height).is_none_or(|cells| cells > MAX_GRID_CELLS) {
        return Err(ConfigError::GridTooLarge { width, height });
    }
    Ok(())
}

fn emit_placements(grid: &GridDomain, catalog: &TileCatalog) -> Vec<Placement> {
    grid.interior()
        .map(|pos| {
            let variant = catalog.get(grid.domain(pos)[0]);
            Placement { position: pos, tile_id: variant.id.clone(), rotation: variant.rotation }
        })
        .collect()
}
