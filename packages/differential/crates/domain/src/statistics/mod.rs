use crate::entities::{name_key, Catalog};
use crate::error::CatalogError;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Catalog-wide facts about one symptom name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomStatistics {
    name: String,
    id: u64,
    disorder_names: BTreeSet<String>,
    p_symptom: f64,
    conditioned_low: BTreeMap<String, f64>,
    conditioned_high: BTreeMap<String, f64>,
}

impl SymptomStatistics {
    /// Display name, taken from the first disorder listing the symptom.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Lower-cased names of the disorders listing this symptom.
    pub fn disorder_names(&self) -> &BTreeSet<String> {
        &self.disorder_names
    }

    pub fn num_disorders(&self) -> usize {
        self.disorder_names.len()
    }

    /// Normalized marginal probability; sums to 1.0 across the map.
    pub fn p_symptom(&self) -> f64 {
        self.p_symptom
    }

    /// Low bound of p(symptom | disorder), keyed by lower-cased disorder name.
    pub fn conditioned_low(&self, disorder_key: &str) -> Option<f64> {
        self.conditioned_low.get(disorder_key).copied()
    }

    /// High bound of p(symptom | disorder), keyed by lower-cased disorder name.
    pub fn conditioned_high(&self, disorder_key: &str) -> Option<f64> {
        self.conditioned_high.get(disorder_key).copied()
    }
}

/// Symptom statistics keyed by lower-cased symptom name. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SymptomStatisticsMap {
    entries: BTreeMap<String, SymptomStatistics>,
}

impl SymptomStatisticsMap {
    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&SymptomStatistics> {
        self.entries.get(&name_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymptomStatistics> {
        self.entries.values()
    }

    /// Display names of every known symptom, sorted.
    pub fn symptom_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.values().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    /// Symptoms that appear together with *all* `selected` symptoms in at
    /// least one disorder, excluding the selected ones. Sorted display names.
    ///
    /// An empty selection returns every symptom; a selection containing an
    /// unknown name returns nothing.
    pub fn co_occurring_symptoms<S: AsRef<str>>(&self, selected: &[S]) -> Vec<String> {
        if selected.is_empty() {
            return self.symptom_names();
        }

        let mut shared: Option<BTreeSet<&str>> = None;
        for name in selected {
            let Some(stats) = self.get(name.as_ref()) else {
                return Vec::new();
            };
            let disorders: BTreeSet<&str> =
                stats.disorder_names.iter().map(String::as_str).collect();
            shared = Some(match shared {
                None => disorders,
                Some(acc) => acc.intersection(&disorders).copied().collect(),
            });
        }
        let shared = shared.unwrap_or_default();
        if shared.is_empty() {
            return Vec::new();
        }

        let selected_keys: BTreeSet<String> =
            selected.iter().map(|s| name_key(s.as_ref())).collect();

        let mut names: Vec<String> = self
            .entries
            .iter()
            .filter(|(key, _)| !selected_keys.contains(*key))
            .filter(|(_, stats)| {
                stats
                    .disorder_names
                    .iter()
                    .any(|d| shared.contains(d.as_str()))
            })
            .map(|(_, stats)| stats.name.clone())
            .collect();
        names.sort();
        names
    }
}

/// Derive per-symptom statistics from a catalog.
///
/// `p_symptom` starts as (disorders listing the symptom) / (all disorders)
/// and is then divided by the sum over all symptoms so the marginals add up
/// to one. The sum is taken in first-occurrence order so repeated builds are
/// bit-identical.
pub fn build_statistics(catalog: &Catalog) -> Result<SymptomStatisticsMap, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut entries: BTreeMap<String, SymptomStatistics> = BTreeMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for disorder in catalog {
        let disorder_key = disorder.key();
        for symptom in disorder.symptoms() {
            let symptom_key = name_key(symptom.name());
            let stats = entries.entry(symptom_key.clone()).or_insert_with(|| {
                first_seen.push(symptom_key);
                SymptomStatistics {
                    name: symptom.name().to_string(),
                    id: symptom.id(),
                    disorder_names: BTreeSet::new(),
                    p_symptom: 0.0,
                    conditioned_low: BTreeMap::new(),
                    conditioned_high: BTreeMap::new(),
                }
            });

            let range = symptom.frequency_range();
            stats.disorder_names.insert(disorder_key.clone());
            stats.conditioned_low.insert(disorder_key.clone(), range.low);
            stats.conditioned_high.insert(disorder_key.clone(), range.high);
        }
    }

    let total_disorders = catalog.len() as f64;
    for stats in entries.values_mut() {
        stats.p_symptom = stats.num_disorders() as f64 / total_disorders;
    }

    let p_sum: f64 = first_seen.iter().map(|key| entries[key].p_symptom).sum();
    if p_sum > 0.0 {
        let normalization_factor = 1.0 / p_sum;
        for stats in entries.values_mut() {
            stats.p_symptom *= normalization_factor;
        }
    }

    tracing::debug!(
        disorders = catalog.len(),
        symptoms = entries.len(),
        "built symptom statistics"
    );

    Ok(SymptomStatisticsMap { entries })
}
