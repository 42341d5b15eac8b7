use serde::{Deserialize, Serialize};

/// Lengths of the ranked lists kept in an `AnalysisSnapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub hot_balls: usize,
    pub cold_balls: usize,
    pub hot_bonus: usize,
    pub cold_bonus: usize,
    pub common_pairs: usize,
    pub rare_pairs: usize,
    pub overdue: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hot_balls: 10,
            cold_balls: 10,
            hot_bonus: 5,
            cold_bonus: 5,
            common_pairs: 10,
            rare_pairs: 10,
            overdue: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Base weight of a number that never appeared.
    pub zero_weight_floor: f64,
    pub hot_boost: f64,
    pub cold_boost: f64,
    pub overdue_boost: f64,
    /// Chance of pulling in the first number's most common partner.
    pub pair_probability: f64,
    /// Applied to the parity still needed once the other parity is complete.
    pub parity_favor: f64,
    pub parity_penalty: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            zero_weight_floor: 0.1,
            hot_boost: 1.5,
            cold_boost: 1.2,
            overdue_boost: 1.3,
            pair_probability: 0.4,
            parity_favor: 1.5,
            parity_penalty: 0.1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub analysis: AnalysisConfig,
    pub predictor: PredictorConfig,
}
