//! Per-cell candidate sets for one solve attempt, plus the propagation worklist.

use std::collections::VecDeque;

use super::catalog::VariantId;
use super::types::Pos;

/// `width × height` grid of domains. The one-cell border keeps the full
/// catalog for the whole attempt and is never collapsed or emitted.
#[derive(Clone, Debug)]
pub struct GridDomain {
    width: usize,
    height: usize,
    full: Vec<VariantId>,
    cells: Vec<Vec<VariantId>>,
    frontier: VecDeque<Pos>,
}

impl GridDomain {
    /// Every cell, border included, starts with the full catalog.
    pub fn new(width: usize, height: usize, full: Vec<VariantId>) -> Self {
        let cells = vec![full.clone(); width * height];
        Self { width, height, full, cells, frontier: VecDeque::new() }
    }

    pub fn full_catalog(&self) -> &[VariantId] {
        &self.full
    }

    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x >= 1 && pos.y >= 1 && pos.x + 1 < self.width && pos.y + 1 < self.height
    }

    /// Interior cells in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width, self.height);
        (1..height.saturating_sub(1))
            .flat_map(move |y| (1..width.saturating_sub(1)).map(move |x| Pos { y, x }))
    }

    /// Designated seed cell. Interior whenever both dimensions are at least 3.
    pub fn center(&self) -> Pos {
        Pos { y: self.height / 2, x: self.width / 2 }
    }

    pub fn domain(&self, pos: Pos) -> &[VariantId] {
        &self.cells[self.index(pos)]
    }

    pub fn set_domain(&mut self, pos: Pos, domain: Vec<VariantId>) {
        let index = self.index(pos);
        self.cells[index] = domain;
    }

    /// Reduces the cell to a single variant.
    pub fn collapse(&mut self, pos: Pos, tile: VariantId) {
        self.set_domain(pos, vec![tile]);
    }

    /// Restores the cell to the full catalog.
    pub fn reset(&mut self, pos: Pos) {
        let full = self.full.clone();
        self.set_domain(pos, full);
    }

    pub fn enqueue(&mut self, pos: Pos) {
        self.frontier.push_back(pos);
    }

    pub fn enqueue_neighbors(&mut self, pos: Pos) {
        for neighbor in pos.neighbors() {
            self.frontier.push_back(neighbor);
        }
    }

    pub fn dequeue(&mut self) -> Option<Pos> {
        self.frontier.pop_front()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The interior cell with the largest domain; ties keep the first in scan order.
    pub fn max_entropy_cell(&self) -> Option<(Pos, usize)> {
        let mut best: Option<(Pos, usize)> = None;
        for pos in self.interior() {
            let size = self.domain(pos).len();
            if best.is_none_or(|(_, best_size)| size > best_size) {
                best = Some((pos, size));
            }
        }
        best
    }

    fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.x < self.width && pos.y < self.height, "{pos:?} outside grid");
        pos.y * self.width + pos.x
    }
}
