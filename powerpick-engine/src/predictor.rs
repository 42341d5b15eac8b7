use rand::Rng;

use powerpick_data::models::{Pool, PredictionSet, BALLS_PER_DRAW};

use crate::analysis::{AnalysisSnapshot, FrequencyTable, NumberCount, PairCount, ParityPattern};
use crate::config::PredictorConfig;
use crate::error::Result;
use crate::sampler::weighted_choice;

fn base_weights(table: &FrequencyTable, config: &PredictorConfig) -> Vec<f64> {
    table
        .iter()
        .map(|e| {
            if e.count == 0 {
                config.zero_weight_floor
            } else {
                f64::from(e.count)
            }
        })
        .collect()
}

fn boost(weights: &mut [f64], numbers: impl Iterator<Item = u8>, factor: f64) {
    for n in numbers {
        if let Some(w) = usize::from(n).checked_sub(1).and_then(|idx| weights.get_mut(idx)) {
            *w *= factor;
        }
    }
}

fn numbers_of(entries: &[NumberCount]) -> impl Iterator<Item = u8> + '_ {
    entries.iter().map(|e| e.number)
}

/// Weight of each ball 1..=69: frequency (floored), then hot, cold and
/// overdue boosts, stacked multiplicatively.
pub fn ball_weights(snapshot: &AnalysisSnapshot, config: &PredictorConfig) -> Vec<f64> {
    let mut weights = base_weights(&snapshot.ball_frequency, config);
    boost(&mut weights, numbers_of(&snapshot.hot_balls), config.hot_boost);
    boost(&mut weights, numbers_of(&snapshot.cold_balls), config.cold_boost);
    boost(
        &mut weights,
        snapshot.overdue.iter().map(|o| o.number),
        config.overdue_boost,
    );
    weights
}

pub fn bonus_weights(snapshot: &AnalysisSnapshot, config: &PredictorConfig) -> Vec<f64> {
    let mut weights = base_weights(&snapshot.bonus_frequency, config);
    boost(&mut weights, numbers_of(&snapshot.hot_bonus), config.hot_boost);
    boost(&mut weights, numbers_of(&snapshot.cold_bonus), config.cold_boost);
    weights
}

/// First partner of `number` in ranked pair order that is not already picked.
pub fn common_partner(pairs: &[PairCount], number: u8, selected: &[u8]) -> Option<u8> {
    pairs
        .iter()
        .find_map(|p| p.partner_of(number).filter(|n| !selected.contains(n)))
}

fn target_even_count<R: Rng + ?Sized>(snapshot: &AnalysisSnapshot, rng: &mut R) -> Result<usize> {
    let patterns: Vec<ParityPattern> = snapshot.parity.keys().copied().collect();
    let weights: Vec<f64> = snapshot.parity.values().map(|&c| f64::from(c)).collect();
    Ok(weighted_choice(&patterns, &weights, rng)?.even_count())
}

/// Five distinct balls in ascending order.
///
/// The parity pattern drawn from the snapshot only biases the draws once one
/// side of the split is complete, so the result can still miss it.
pub fn generate_primary_set<R: Rng + ?Sized>(
    snapshot: &AnalysisSnapshot,
    config: &PredictorConfig,
    rng: &mut R,
) -> Result<[u8; 5]> {
    let weights = ball_weights(snapshot, config);
    let all: Vec<u8> = Pool::Balls.domain().collect();
    let mut selected: Vec<u8> = Vec::with_capacity(BALLS_PER_DRAW);

    let first = weighted_choice(&all, &weights, rng)?;
    selected.push(first);

    if rng.random::<f64>() < config.pair_probability {
        if let Some(partner) = common_partner(&snapshot.common_pairs, first, &selected) {
            selected.push(partner);
        }
    }

    let target_even = target_even_count(snapshot, rng)? as isize;
    let target_odd = BALLS_PER_DRAW as isize - target_even;

    while selected.len() < BALLS_PER_DRAW {
        let even = selected.iter().filter(|&&n| n % 2 == 0).count() as isize;
        let odd = selected.len() as isize - even;
        let even_needed = target_even - even;
        let odd_needed = target_odd - odd;

        let (candidates, draw_weights): (Vec<u8>, Vec<f64>) = all
            .iter()
            .filter(|&&n| !selected.contains(&n))
            .map(|&n| {
                let w = weights[usize::from(n) - 1];
                let is_even = n % 2 == 0;
                let factor = match (even_needed <= 0, odd_needed <= 0) {
                    (true, _) if is_even => config.parity_penalty,
                    (true, _) => config.parity_favor,
                    (false, true) if is_even => config.parity_favor,
                    (false, true) => config.parity_penalty,
                    (false, false) => 1.0,
                };
                (n, w * factor)
            })
            .unzip();

        selected.push(weighted_choice(&candidates, &draw_weights, rng)?);
    }

    selected.sort_unstable();
    let mut numbers = [0u8; 5];
    numbers.copy_from_slice(&selected);
    Ok(numbers)
}

pub fn generate_bonus<R: Rng + ?Sized>(
    snapshot: &AnalysisSnapshot,
    config: &PredictorConfig,
    rng: &mut R,
) -> Result<u8> {
    let weights = bonus_weights(snapshot, config);
    let all: Vec<u8> = Pool::Bonus.domain().collect();
    weighted_choice(&all, &weights, rng)
}

/// `count` independent sets. Duplicates across the batch are possible.
pub fn generate_predictions<R: Rng + ?Sized>(
    snapshot: &AnalysisSnapshot,
    count: usize,
    config: &PredictorConfig,
    rng: &mut R,
) -> Result<Vec<PredictionSet>> {
    let mut predictions = Vec::with_capacity(count);
    for _ in 0..count {
        let numbers = generate_primary_set(snapshot, config, rng)?;
        let bonus = generate_bonus(snapshot, config, rng)?;
        predictions.push(PredictionSet { numbers, bonus });
    }
    log::debug!("generated {} prediction sets", predictions.len());
    Ok(predictions)
}
