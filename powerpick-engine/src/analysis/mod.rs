pub mod frequency;
pub mod overdue;
pub mod pairs;
pub mod parity;
pub mod sums;

use std::collections::BTreeMap;

use serde::Serialize;

use powerpick_data::models::{DrawingRecord, Pool};

use crate::config::AnalysisConfig;
use crate::error::{EngineError, Result};

pub use frequency::{frequency_of, rank_cold, rank_hot, FrequencyTable, NumberCount};
pub use overdue::{overdue, overdue_ranking, Overdue};
pub use pairs::{pair_counts, PairCount, PairCounts};
pub use parity::{parity_pattern, ParityPattern};
pub use sums::{sum_statistics, SumBin, SumStats};

/// Everything the predictor and the renderers need from one batch of drawings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSnapshot {
    pub draw_count: usize,
    pub ball_frequency: FrequencyTable,
    pub bonus_frequency: FrequencyTable,
    pub hot_balls: Vec<NumberCount>,
    pub cold_balls: Vec<NumberCount>,
    pub hot_bonus: Vec<NumberCount>,
    pub cold_bonus: Vec<NumberCount>,
    pub common_pairs: Vec<PairCount>,
    pub rare_pairs: Vec<PairCount>,
    pub overdue: Vec<Overdue>,
    pub sums: SumStats,
    pub parity: BTreeMap<ParityPattern, u32>,
}

/// Dates must never increase along the slice (equal dates are fine).
pub fn ensure_newest_first(records: &[DrawingRecord]) -> Result<()> {
    for (i, pair) in records.windows(2).enumerate() {
        if pair[1].date > pair[0].date {
            return Err(EngineError::NotNewestFirst {
                index: i + 1,
                previous: pair[0].date,
                current: pair[1].date,
            });
        }
    }
    Ok(())
}

/// Runs every statistic over `records`, which must be non-empty and
/// newest-first. Either the whole snapshot is built or an error is returned.
pub fn analyze(records: &[DrawingRecord], config: &AnalysisConfig) -> Result<AnalysisSnapshot> {
    if records.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    ensure_newest_first(records)?;

    let ball_frequency = frequency_of(records, Pool::Balls)?;
    let bonus_frequency = frequency_of(records, Pool::Bonus)?;
    let pairs = pair_counts(records);

    let snapshot = AnalysisSnapshot {
        draw_count: records.len(),
        hot_balls: rank_hot(&ball_frequency, config.hot_balls),
        cold_balls: rank_cold(&ball_frequency, config.cold_balls),
        hot_bonus: rank_hot(&bonus_frequency, config.hot_bonus),
        cold_bonus: rank_cold(&bonus_frequency, config.cold_bonus),
        common_pairs: pairs.common(config.common_pairs),
        rare_pairs: pairs.rare(config.rare_pairs),
        overdue: overdue(records, config.overdue),
        sums: sum_statistics(records),
        parity: parity_pattern(records),
        ball_frequency,
        bonus_frequency,
    };

    log::debug!(
        "analyzed {} drawings ({} to {}): {} distinct pairs, average sum {}",
        snapshot.draw_count,
        records[records.len() - 1].date,
        records[0].date,
        pairs.len(),
        snapshot.sums.average
    );

    Ok(snapshot)
}
