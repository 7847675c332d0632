use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Structural problems with a catalog, detected while building it or its statistics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Cannot build symptom statistics from an empty catalog")]
    EmptyCatalog,

    #[error("Invalid frequency range for symptom '{symptom}': {low} - {high} (expected 0 <= low <= high <= 1)")]
    InvalidFrequencyRange {
        symptom: String,
        low: f64,
        high: f64,
    },
}

/// Failures of a single ranking query. All of them are deterministic in
/// (catalog, query); retrying never helps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error(transparent)]
    InvalidProbabilityState(#[from] ProbabilityStateError),

    #[error("Symptom '{symptom}' is not listed for disorder '{disorder}'")]
    SymptomNotInDisorder { symptom: String, disorder: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbabilityStateError {
    #[error(
        "Joint probability is zero for disorder '{disorder}' \
         (joint: {joint_low} - {joint_high}, likelihood: {likelihood_low} - {likelihood_high}, \
         symptoms: {symptoms:?})"
    )]
    ZeroJointProbability {
        disorder: String,
        likelihood_low: f64,
        likelihood_high: f64,
        joint_low: f64,
        joint_high: f64,
        symptoms: Vec<String>,
    },

    #[error(
        "Midpoint sum {sum} <= 0.0 with symptoms {symptoms:?}; candidates: {}",
        join_candidates(.candidates)
    )]
    NonPositiveMidpointSum {
        sum: f64,
        symptoms: Vec<String>,
        candidates: Vec<CandidateSnapshot>,
    },
}

/// A surviving disorder's interval captured for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSnapshot {
    pub disorder: String,
    pub p_low: f64,
    pub p_high: f64,
    pub midpoint: f64,
}

impl fmt::Display for CandidateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Disorder: {} range: '{} - {}' midpoint: '{}'",
            self.disorder, self.p_low, self.p_high, self.midpoint
        )
    }
}

fn join_candidates(candidates: &[CandidateSnapshot]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
