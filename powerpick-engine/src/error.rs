use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("no drawings to analyze")]
    EmptyInput,

    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    #[error("drawings must be newest-first: record {index} ({current}) is newer than the one before it ({previous})")]
    NotNewestFirst {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
