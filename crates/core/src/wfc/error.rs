//! Errors surfaced to callers before any solve is attempted.

use super::generator::MAX_GRID_CELLS;

/// Invalid generator input. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No base tiles were supplied.
    #[error("tile set is empty")]
    EmptyTileSet,
    /// A base tile carries a zero spawn weight.
    #[error("tile '{id}' has zero weight")]
    ZeroWeight { id: String },
    /// The grid cannot even hold its one-cell border.
    #[error("grid {width}x{height} is too small, both dimensions must be at least 2")]
    GridTooSmall { width: usize, height: usize },
    /// More cells than a single solve will allocate domains for.
    #[error("grid {width}x{height} exceeds {MAX_GRID_CELLS} cells")]
    GridTooLarge { width: usize, height: usize },
}
