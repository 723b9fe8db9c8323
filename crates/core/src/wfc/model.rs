//! Public result models: placements handed to the visualizer plus run diagnostics.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use super::types::{Pos, Rotation};

/// One interior cell's final tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Pos,
    pub tile_id: String,
    pub rotation: Rotation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationOutcome {
    Succeeded,
    Failed,
}

/// Why a single attempt was abandoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptFailure {
    /// Propagation hit its per-pass dequeue budget with cells still queued.
    PropagationCapReached,
    /// The attempt used up its collapse budget without converging.
    CollapseLimitReached,
}

/// Counters for observability only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub attempts: usize,
    pub failed_attempts: usize,
    pub collapses: usize,
    pub backtracks: usize,
    pub propagation_steps: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub width: usize,
    pub height: usize,
    pub outcome: GenerationOutcome,
    /// Row-major interior placements; empty unless the outcome is `Succeeded`.
    pub placements: Vec<Placement>,
    pub stats: GenerationStats,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.outcome == GenerationOutcome::Succeeded
    }

    pub fn placement_at(&self, pos: Pos) -> Option<&Placement> {
        self.placements.iter().find(|placement| placement.position == pos)
    }

    /// Stable encoding of the outcome and placements. Diagnostics are left out.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.push(match self.outcome {
            GenerationOutcome::Succeeded => 1,
            GenerationOutcome::Failed => 0,
        });
        bytes.extend((self.placements.len() as u32).to_le_bytes());
        for placement in &self.placements {
            bytes.extend((placement.position.y as u32).to_le_bytes());
            bytes.extend((placement.position.x as u32).to_le_bytes());
            bytes.extend((placement.tile_id.len() as u32).to_le_bytes());
            bytes.extend(placement.tile_id.as_bytes());
            bytes.extend(placement.rotation.degrees().to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
