use crate::entities::Catalog;
use crate::error::{CatalogError, InferenceError};
use crate::inference::{rank, RankingOptions, RankingResult};
use crate::statistics::{build_statistics, SymptomStatisticsMap};

/// A loaded catalog together with its symptom statistics.
///
/// Holding a `Catalog` means statistics have not been built yet; building an
/// `InferenceContext` consumes it and yields something that can be ranked
/// against any number of times, from any number of threads. There is no way
/// back: reloading means building a fresh context.
#[derive(Debug, Clone)]
pub struct InferenceContext {
    catalog: Catalog,
    statistics: SymptomStatisticsMap,
}

impl InferenceContext {
    pub fn build(catalog: Catalog) -> Result<Self, CatalogError> {
        let statistics = build_statistics(&catalog)?;
        tracing::info!(
            disorders = catalog.len(),
            symptoms = statistics.len(),
            "inference context ready"
        );
        Ok(Self {
            catalog,
            statistics,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn statistics(&self) -> &SymptomStatisticsMap {
        &self.statistics
    }

    pub fn rank<S: AsRef<str>>(
        &self,
        symptoms: &[S],
    ) -> Result<Vec<RankingResult<'_>>, InferenceError> {
        self.rank_with(symptoms, &RankingOptions::default())
    }

    pub fn rank_with<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        options: &RankingOptions,
    ) -> Result<Vec<RankingResult<'_>>, InferenceError> {
        rank(&self.catalog, &self.statistics, symptoms, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_context_is_shareable() {
        assert_send_sync::<InferenceContext>();
    }

    #[test]
    fn test_empty_catalog_never_becomes_ready() {
        assert_eq!(
            InferenceContext::build(Catalog::default()).unwrap_err(),
            CatalogError::EmptyCatalog
        );
    }
}
