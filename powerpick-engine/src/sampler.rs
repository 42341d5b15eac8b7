use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{EngineError, Result};

/// Seeded generator for reproducible runs, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Draws one item with probability proportional to its weight.
///
/// Individual zero weights are allowed (the item is never drawn), but at
/// least one weight must be positive and none may be negative or non-finite.
pub fn weighted_choice<T: Copy, R: Rng + ?Sized>(
    items: &[T],
    weights: &[f64],
    rng: &mut R,
) -> Result<T> {
    if items.len() != weights.len() {
        return Err(EngineError::InvalidWeights(format!(
            "{} items but {} weights",
            items.len(),
            weights.len()
        )));
    }
    if !weights.iter().any(|&w| w > 0.0) {
        return Err(EngineError::InvalidWeights(
            "no positive weight among candidates".to_string(),
        ));
    }

    let dist = WeightedIndex::new(weights).map_err(|e| EngineError::InvalidWeights(e.to_string()))?;
    Ok(items[dist.sample(rng)])
}
