use super::{name_key, Symptom};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named condition and the symptoms the catalog associates with it.
///
/// Symptom names are case-insensitive. The lookup is keyed by
/// [`name_key`] and built once here, so callers never fold case themselves.
/// If two symptoms share a name, the later one wins the lookup while both
/// stay in [`Disorder::symptoms`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DisorderRecord", into = "DisorderRecord")]
pub struct Disorder {
    id: u64,
    name: String,
    expert_link: String,
    disorder_type: String,
    symptoms: Vec<Symptom>,
    symptom_index: HashMap<String, usize>,
}

impl Disorder {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        expert_link: impl Into<String>,
        disorder_type: impl Into<String>,
        symptoms: Vec<Symptom>,
    ) -> Self {
        let name = name.into();
        let mut symptom_index = HashMap::with_capacity(symptoms.len());

        for (idx, symptom) in symptoms.iter().enumerate() {
            if let Some(previous) = symptom_index.insert(name_key(symptom.name()), idx) {
                tracing::warn!(
                    disorder = %name,
                    symptom = symptom.name(),
                    previous_index = previous,
                    index = idx,
                    "duplicate symptom name; the later entry replaces the earlier one in the lookup"
                );
            }
        }

        Self {
            id,
            name,
            expert_link: expert_link.into(),
            disorder_type: disorder_type.into(),
            symptoms,
            symptom_index,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased name, the key under which statistics record this disorder.
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    pub fn expert_link(&self) -> &str {
        &self.expert_link
    }

    pub fn disorder_type(&self) -> &str {
        &self.disorder_type
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Case-insensitive symptom lookup.
    pub fn symptom(&self, name: &str) -> Option<&Symptom> {
        self.symptom_index
            .get(&name_key(name))
            .map(|&idx| &self.symptoms[idx])
    }

    pub fn has_symptom(&self, name: &str) -> bool {
        self.symptom_index.contains_key(&name_key(name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisorderRecord {
    id: u64,
    name: String,
    #[serde(default)]
    expert_link: String,
    #[serde(default, rename = "type")]
    disorder_type: String,
    #[serde(default)]
    symptoms: Vec<Symptom>,
}

impl From<DisorderRecord> for Disorder {
    fn from(record: DisorderRecord) -> Self {
        Disorder::new(
            record.id,
            record.name,
            record.expert_link,
            record.disorder_type,
            record.symptoms,
        )
    }
}

impl From<Disorder> for DisorderRecord {
    fn from(disorder: Disorder) -> Self {
        Self {
            id: disorder.id,
            name: disorder.name,
            expert_link: disorder.expert_link,
            disorder_type: disorder.disorder_type,
            symptoms: disorder.symptoms,
        }
    }
}
