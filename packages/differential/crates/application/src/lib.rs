pub mod diagnosis_service;
pub mod report;

pub use diagnosis_service::DiagnosisService;
pub use report::{CatalogSummary, RankedDisorder};
