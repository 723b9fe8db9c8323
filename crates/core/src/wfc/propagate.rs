//! Frontier-driven pruning of cell domains with local contradiction repair.

use std::iter;

use tracing::trace;

use super::catalog::VariantId;
use super::compat::AdjacencyTable;
use super::domain::GridDomain;
use super::types::{Direction, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// The frontier emptied within the step budget.
    Drained,
    /// The step budget ran out with cells still queued.
    CapReached,
}

/// Running counters across every propagation pass of one attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationStats {
    pub dequeues: usize,
    pub removed: usize,
    pub backtracks: usize,
}

pub struct ConstraintPropagator<'a> {
    table: &'a AdjacencyTable,
    max_steps: usize,
}

impl<'a> ConstraintPropagator<'a> {
    pub fn new(table: &'a AdjacencyTable, max_steps: usize) -> Self {
        Self { table, max_steps }
    }

    /// Drains the frontier, dequeuing at most `max_steps` coordinates.
    ///
    /// Each interior cell drops every tile that has no partner in some
    /// neighbor's domain; a shrink re-queues the four neighbors. A cell left
    /// with nothing is repaired by resetting it and its four neighbors to the
    /// full catalog and queuing all five again.
    pub fn propagate(
        &self,
        grid: &mut GridDomain,
        stats: &mut PropagationStats,
    ) -> PropagationOutcome {
        for _ in 0..self.max_steps {
            let Some(pos) = grid.dequeue() else {
                return PropagationOutcome::Drained;
            };
            stats.dequeues += 1;
            if !grid.is_interior(pos) {
                continue;
            }

            let retained = self.supported_tiles(grid, pos);
            let removed = grid.domain(pos).len() - retained.len();
            if removed == 0 {
                continue;
            }
            stats.removed += removed;

            if retained.is_empty() {
                stats.backtracks += 1;
                trace!(
                    x = pos.x,
                    y = pos.y,
                    backtracks = stats.backtracks,
                    "contradiction repaired"
                );
                repair_contradiction(grid, pos);
            } else {
                grid.set_domain(pos, retained);
                grid.enqueue_neighbors(pos);
            }
        }

        if grid.frontier_len() == 0 {
            PropagationOutcome::Drained
        } else {
            PropagationOutcome::CapReached
        }
    }

    fn supported_tiles(&self, grid: &GridDomain, pos: Pos) -> Vec<VariantId> {
        grid.domain(pos)
            .iter()
            .copied()
            .filter(|&tile| {
                Direction::ALL.into_iter().all(|direction| {
                    self.table.has_partner(tile, grid.domain(pos.step(direction)), direction)
                })
            })
            .collect()
    }
}

fn repair_contradiction(grid: &mut GridDomain, pos: Pos) {
    let neighbors = pos.neighbors();
    for cell in iter::once(pos).chain(neighbors) {
        grid.reset(cell);
        grid.enqueue(cell);
    }
}
