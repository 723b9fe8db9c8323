//! Weighted random selection over candidate variants.

use rand_chacha::rand_core::Rng;

use super::catalog::{TileCatalog, VariantId};

/// Uniform draw in `[0, 1)` from the top 53 bits of one `u64`.
pub(crate) fn unit_f64<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

/// Picks one candidate with probability proportional to its variant weight.
///
/// Draws once in `[0, total)` and returns the first candidate whose running
/// weight exceeds the draw, falling back to the last candidate when rounding
/// leaves the draw at the very top of the range. `candidates` must not be empty.
pub fn pick_weighted<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &TileCatalog,
    candidates: &[VariantId],
) -> VariantId {
    debug_assert!(!candidates.is_empty(), "weighted pick needs at least one candidate");
    let total: f64 = candidates.iter().map(|&id| f64::from(catalog.get(id).weight)).sum();
    let draw = unit_f64(rng) * total;

    let mut running = 0.0;
    for &id in candidates {
        running += f64::from(catalog.get(id).weight);
        if draw < running {
            return id;
        }
    }
    candidates[candidates.len() - 1]
}
