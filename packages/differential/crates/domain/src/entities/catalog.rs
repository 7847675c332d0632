use super::{name_key, Disorder};
use serde::{Deserialize, Serialize};

/// An ordered list of disorders as delivered by ingestion.
///
/// Order matters: it breaks ties when ranking. Disorder names are not
/// required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    disorders: Vec<Disorder>,
}

impl Catalog {
    pub fn new(disorders: Vec<Disorder>) -> Self {
        Self { disorders }
    }

    pub fn len(&self) -> usize {
        self.disorders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disorders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Disorder> {
        self.disorders.iter()
    }

    pub fn disorders(&self) -> &[Disorder] {
        &self.disorders
    }

    /// First disorder whose name matches, ignoring case.
    pub fn find_disorder(&self, name: &str) -> Option<&Disorder> {
        let key = name_key(name);
        self.disorders.iter().find(|d| d.key() == key)
    }
}

impl FromIterator<Disorder> for Catalog {
    fn from_iter<I: IntoIterator<Item = Disorder>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Disorder;
    type IntoIter = std::slice::Iter<'a, Disorder>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
