use domain::{Catalog, RankingResult, SymptomStatisticsMap};
use serde::Serialize;
use std::collections::BTreeMap;

/// Owned view of a [`RankingResult`] that outlives the context it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDisorder {
    pub name: String,
    pub id: u64,
    pub expert_link: String,
    #[serde(rename = "type")]
    pub disorder_type: String,
    pub p_low: f64,
    pub p_high: f64,
    pub relative_weight: f64,
    pub matched_symptoms: Vec<String>,
}

impl From<RankingResult<'_>> for RankedDisorder {
    fn from(result: RankingResult<'_>) -> Self {
        Self {
            name: result.disorder.name().to_string(),
            id: result.disorder.id(),
            expert_link: result.disorder.expert_link().to_string(),
            disorder_type: result.disorder.disorder_type().to_string(),
            p_low: result.p_low,
            p_high: result.p_high,
            relative_weight: result.relative_weight,
            matched_symptoms: result.matched_symptoms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub disorders: usize,
    pub symptoms: usize,
    /// Disorder-symptom pairs, counting every listed symptom.
    pub associations: usize,
    pub disorders_without_symptoms: usize,
    pub disorder_types: BTreeMap<String, usize>,
}

impl CatalogSummary {
    pub fn new(catalog: &Catalog, statistics: &SymptomStatisticsMap) -> Self {
        let mut disorder_types = BTreeMap::new();
        for disorder in catalog {
            *disorder_types
                .entry(disorder.disorder_type().to_string())
                .or_insert(0) += 1;
        }

        Self {
            disorders: catalog.len(),
            symptoms: statistics.len(),
            associations: catalog.iter().map(|d| d.symptoms().len()).sum(),
            disorders_without_symptoms: catalog
                .iter()
                .filter(|d| d.symptoms().is_empty())
                .count(),
            disorder_types,
        }
    }
}
