pub mod analysis;
pub mod config;
pub mod error;
pub mod predictor;
pub mod sampler;

pub use analysis::{analyze, AnalysisSnapshot};
pub use config::{AnalysisConfig, EngineConfig, PredictorConfig};
pub use error::EngineError;
pub use predictor::generate_predictions;
