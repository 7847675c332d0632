use super::posterior::{posterior_for, Posterior};
use super::RankingOptions;
use crate::entities::{Catalog, Disorder};
use crate::error::{CandidateSnapshot, InferenceError, ProbabilityStateError};
use crate::statistics::SymptomStatisticsMap;
use serde::Serialize;
use std::cmp::Ordering;

/// At most this many candidates are attached to a midpoint-sum error.
const MAX_REPORTED_CANDIDATES: usize = 10;

/// One ranked disorder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult<'a> {
    pub disorder: &'a Disorder,
    pub p_low: f64,
    pub p_high: f64,
    /// Midpoint of `[p_low, p_high]` divided by the sum of all survivors'
    /// midpoints. Does not rescale the bounds.
    pub relative_weight: f64,
    /// Catalog display names of the query symptoms this disorder lists, in
    /// query order and deduplicated. A query for `"SEIZURE"` reports
    /// `"Seizure"`, not the caller's spelling.
    pub matched_symptoms: Vec<String>,
}

/// Rank every disorder in `catalog` against the query symptoms.
///
/// Disorders with `p_high == 0` are dropped. The rest are ordered by
/// `p_high` descending; the sort is stable, so ties keep catalog order. A
/// query matching nothing yields an empty list, not an error.
pub fn rank<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    statistics: &SymptomStatisticsMap,
    query: &[S],
    options: &RankingOptions,
) -> Result<Vec<RankingResult<'a>>, InferenceError> {
    let names: Vec<&str> = query.iter().map(|s| s.as_ref()).collect();
    let unknown: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| !statistics.contains(name))
        .collect();
    if !unknown.is_empty() {
        tracing::debug!(
            ?unknown,
            "query names absent from the catalog contribute no weight"
        );
    }

    let total_disorders = catalog.len();
    let mut survivors: Vec<(&'a Disorder, Posterior)> = Vec::new();
    for disorder in catalog {
        let posterior = posterior_for(disorder, total_disorders, statistics, &names, options)?;
        if posterior.interval.high > 0.0 {
            survivors.push((disorder, posterior));
        }
    }

    if survivors.is_empty() {
        tracing::info!(
            symptoms = ?names,
            "found no disorders with the queried symptoms"
        );
        return Ok(Vec::new());
    }

    let candidates: Vec<CandidateSnapshot> = survivors
        .iter()
        .map(|(disorder, posterior)| CandidateSnapshot {
            disorder: disorder.name().to_string(),
            p_low: posterior.interval.low,
            p_high: posterior.interval.high,
            midpoint: posterior.interval.midpoint(),
        })
        .collect();
    let weights = relative_weights(candidates, &names)?;

    let mut results: Vec<RankingResult<'a>> = survivors
        .into_iter()
        .zip(weights)
        .map(|((disorder, posterior), relative_weight)| RankingResult {
            disorder,
            p_low: posterior.interval.low,
            p_high: posterior.interval.high,
            relative_weight,
            matched_symptoms: posterior.matched_symptoms,
        })
        .collect();

    results.sort_by(|a, b| b.p_high.partial_cmp(&a.p_high).unwrap_or(Ordering::Equal));

    tracing::debug!(candidates = results.len(), "ranked disorders");
    Ok(results)
}

/// Normalize survivor midpoints so they sum to one.
fn relative_weights(
    candidates: Vec<CandidateSnapshot>,
    query: &[&str],
) -> Result<Vec<f64>, ProbabilityStateError> {
    let sum: f64 = candidates.iter().map(|c| c.midpoint).sum();
    if sum <= 0.0 {
        return Err(ProbabilityStateError::NonPositiveMidpointSum {
            sum,
            symptoms: query.iter().map(|s| s.to_string()).collect(),
            candidates: candidates
                .into_iter()
                .take(MAX_REPORTED_CANDIDATES)
                .collect(),
        });
    }

    Ok(candidates.iter().map(|c| c.midpoint / sum).collect())
}
