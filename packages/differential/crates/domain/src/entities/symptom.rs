use crate::error::CatalogError;
use crate::interval::Interval;
use serde::{Deserialize, Serialize};

/// A clinical finding as listed under one disorder, with the catalog's
/// frequency range for patients with that disorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SymptomRecord", into = "SymptomRecord")]
pub struct Symptom {
    id: u64,
    name: String,
    frequency_description: String,
    frequency_range: Interval,
}

impl Symptom {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        frequency_description: impl Into<String>,
        frequency_range: Interval,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let Interval { low, high } = frequency_range;

        // NaN fails every comparison, so it is rejected here as well.
        let valid = (0.0..=1.0).contains(&low) && (0.0..=1.0).contains(&high) && low <= high;
        if !valid {
            return Err(CatalogError::InvalidFrequencyRange {
                symptom: name,
                low,
                high,
            });
        }

        Ok(Self {
            id,
            name,
            frequency_description: frequency_description.into(),
            frequency_range,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text frequency class, e.g. "Occasional".
    pub fn frequency_description(&self) -> &str {
        &self.frequency_description
    }

    pub fn frequency_range(&self) -> Interval {
        self.frequency_range
    }
}

/// Wire shape of a symptom in the JSON catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymptomRecord {
    id: u64,
    name: String,
    #[serde(default)]
    frequency_description: String,
    frequency_range: (f64, f64),
}

impl TryFrom<SymptomRecord> for Symptom {
    type Error = CatalogError;

    fn try_from(record: SymptomRecord) -> Result<Self, Self::Error> {
        let (low, high) = record.frequency_range;
        Symptom::new(
            record.id,
            record.name,
            record.frequency_description,
            Interval::new(low, high),
        )
    }
}

impl From<Symptom> for SymptomRecord {
    fn from(symptom: Symptom) -> Self {
        Self {
            id: symptom.id,
            name: symptom.name,
            frequency_description: symptom.frequency_description,
            frequency_range: (symptom.frequency_range.low, symptom.frequency_range.high),
        }
    }
}
