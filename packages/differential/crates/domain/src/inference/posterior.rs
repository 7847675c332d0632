use super::{JointModel, RankingOptions};
use crate::entities::{name_key, Disorder, Symptom};
use crate::error::{InferenceError, ProbabilityStateError};
use crate::interval::Interval;
use crate::statistics::{SymptomStatistics, SymptomStatisticsMap};
use serde::Serialize;
use std::collections::HashSet;

/// Intermediate values behind one posterior interval, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosteriorFactors {
    /// p(symptoms | disorder): product of the matched frequency ranges.
    pub likelihood: Interval,
    /// Uniform p(disorder).
    pub prior: f64,
    /// Estimated p(symptoms).
    pub joint: Interval,
    /// Frequency range of every matched query symptom, in query order.
    pub frequency_ranges: Vec<Interval>,
}

/// p(disorder | symptoms) for one disorder and one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posterior {
    pub interval: Interval,
    /// Display names of the query symptoms this disorder lists, deduplicated.
    pub matched_symptoms: Vec<String>,
    /// `None` when no query symptom matched.
    pub factors: Option<PosteriorFactors>,
}

impl Posterior {
    fn unmatched() -> Self {
        Self {
            interval: Interval::ZERO,
            matched_symptoms: Vec::new(),
            factors: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.factors.is_some()
    }
}

/// Bayes' rule under naive symptom independence:
///
/// ```text
/// p(d | s_1..s_n) = (prod_i p(s_i | d)) * p(d) / p(s_1..s_n)
/// ```
///
/// The low bound multiplies every matched symptom's low frequency and the
/// high bound every high frequency. This is a simplification and not a
/// rigorous interval-arithmetic bound. The prior is uniform over the
/// catalog. A disorder listing none of the query symptoms gets `(0, 0)`.
pub fn posterior_for<S: AsRef<str>>(
    disorder: &Disorder,
    total_disorders: usize,
    statistics: &SymptomStatisticsMap,
    query: &[S],
    options: &RankingOptions,
) -> Result<Posterior, InferenceError> {
    let matched: Vec<&Symptom> = query
        .iter()
        .filter_map(|name| disorder.symptom(name.as_ref()))
        .collect();
    if matched.is_empty() {
        return Ok(Posterior::unmatched());
    }

    let likelihood = matched.iter().fold(Interval::point(1.0), |acc, symptom| {
        let range = symptom.frequency_range();
        Interval::new(acc.low * range.low, acc.high * range.high)
    });

    let joint = match options.joint_model {
        JointModel::DisorderConditional => conditional_joint(
            &disorder.key(),
            statistics,
            query,
            options.skip_zero_conditional_bounds,
        ),
        JointModel::GlobalMarginal => global_marginal_joint(statistics, query),
    };

    if joint.low == 0.0 || joint.high == 0.0 {
        return Err(ProbabilityStateError::ZeroJointProbability {
            disorder: disorder.name().to_string(),
            likelihood_low: likelihood.low,
            likelihood_high: likelihood.high,
            joint_low: joint.low,
            joint_high: joint.high,
            symptoms: query.iter().map(|s| s.as_ref().to_string()).collect(),
        }
        .into());
    }

    let prior = 1.0 / total_disorders as f64;
    let interval = Interval::new(
        likelihood.low * prior / joint.low,
        likelihood.high * prior / joint.high,
    );

    let factors = PosteriorFactors {
        likelihood,
        prior,
        joint,
        frequency_ranges: matched.iter().map(|s| s.frequency_range()).collect(),
    };

    if !interval.is_within_unit() {
        tracing::warn!(
            disorder = disorder.name(),
            p_low = interval.low,
            p_high = interval.high,
            likelihood_low = likelihood.low,
            likelihood_high = likelihood.high,
            prior,
            joint_low = joint.low,
            joint_high = joint.high,
            likelihood_low_times_prior = likelihood.low * prior,
            likelihood_high_times_prior = likelihood.high * prior,
            frequency_ranges = ?factors.frequency_ranges,
            "posterior interval outside [0, 1]; symptom independence does not hold for this query"
        );
    }

    let mut seen = HashSet::new();
    let matched_symptoms = matched
        .iter()
        .filter(|s| seen.insert(name_key(s.name())))
        .map(|s| s.name().to_string())
        .collect();

    Ok(Posterior {
        interval,
        matched_symptoms,
        factors: Some(factors),
    })
}

/// p(s_1..s_n) as the product of each query symptom's frequency *for this
/// disorder*, accumulated in log space.
///
/// Query names missing from `statistics` contribute nothing. A symptom the
/// disorder does not list has bound 0. With `skip_zero_bounds`, zero bounds
/// are dropped from the product; otherwise they zero the joint.
pub fn conditional_joint<S: AsRef<str>>(
    disorder_key: &str,
    statistics: &SymptomStatisticsMap,
    query: &[S],
    skip_zero_bounds: bool,
) -> Interval {
    let known: Vec<&SymptomStatistics> = query
        .iter()
        .filter_map(|name| statistics.get(name.as_ref()))
        .collect();

    let low = log_space_product(
        known
            .iter()
            .map(|s| s.conditioned_low(disorder_key).unwrap_or(0.0)),
        skip_zero_bounds,
    );
    let high = log_space_product(
        known
            .iter()
            .map(|s| s.conditioned_high(disorder_key).unwrap_or(0.0)),
        skip_zero_bounds,
    );

    Interval::new(low, high)
}

/// p(s_1..s_n) as the product of catalog-wide marginals, in log space.
/// Unknown names contribute nothing.
pub fn global_marginal_joint<S: AsRef<str>>(
    statistics: &SymptomStatisticsMap,
    query: &[S],
) -> Interval {
    let p = log_space_product(
        query
            .iter()
            .filter_map(|name| statistics.get(name.as_ref()))
            .map(SymptomStatistics::p_symptom),
        true,
    );
    Interval::point(p)
}

/// Posterior for a disorder given a single symptom, against that symptom's
/// global marginal: `frequency * p(d) / p_symptom`.
pub fn single_symptom_posterior(
    disorder: &Disorder,
    total_disorders: usize,
    statistics: &SymptomStatistics,
) -> Result<Interval, InferenceError> {
    let symptom = disorder.symptom(statistics.name()).ok_or_else(|| {
        InferenceError::SymptomNotInDisorder {
            symptom: statistics.name().to_string(),
            disorder: disorder.name().to_string(),
        }
    })?;

    let prior = 1.0 / total_disorders as f64;
    let range = symptom.frequency_range();
    Ok(Interval::new(
        range.low * prior / statistics.p_symptom(),
        range.high * prior / statistics.p_symptom(),
    ))
}

fn log_space_product(factors: impl Iterator<Item = f64>, skip_zero: bool) -> f64 {
    factors
        .filter(|&p| !skip_zero || p > 0.0)
        .map(f64::ln)
        .sum::<f64>()
        .exp()
}
