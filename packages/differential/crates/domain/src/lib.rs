pub mod context;
pub mod entities;
pub mod error;
pub mod inference;
pub mod interval;
pub mod statistics;

pub use context::InferenceContext;
pub use entities::{Catalog, Disorder, Symptom};
pub use error::{CatalogError, InferenceError, ProbabilityStateError};
pub use inference::{rank, JointModel, RankingOptions, RankingResult};
pub use interval::Interval;
pub use statistics::{build_statistics, SymptomStatistics, SymptomStatisticsMap};
