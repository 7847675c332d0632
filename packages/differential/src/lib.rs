//! Ranks rare disorders by how well they explain a set of observed symptoms.
//!
//! Every posterior is an interval `[p_low, p_high]` carried through from the
//! frequency ranges Orphanet publishes for each disorder-symptom pair.
//!
//! ```no_run
//! use differential::application::DiagnosisService;
//!
//! # fn main() -> anyhow::Result<()> {
//! let service = DiagnosisService::load("en_product4.xml")?;
//! for candidate in service.rank(&["Seizure", "Ataxia"], Some(5))? {
//!     println!("{}: {} - {}", candidate.name, candidate.p_low, candidate.p_high);
//! }
//! # Ok(())
//! # }
//! ```

pub use application;
pub use domain;
pub use infrastructure;
