use anyhow::{Context, Result};
use domain::{Catalog, InferenceContext, InferenceError, RankingOptions};
use infrastructure::CatalogLoader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::report::{CatalogSummary, RankedDisorder};

pub const DEFAULT_LIMIT: usize = 10;

/// Serves ranking queries against the current catalog and swaps in a new
/// one on reload.
///
/// Queries work on an `Arc` snapshot taken under a short read lock, so a
/// reload running concurrently is never observed half way: a query sees
/// either the old context or the new one.
pub struct DiagnosisService {
    catalog_path: Option<PathBuf>,
    context: RwLock<Arc<InferenceContext>>,
    options: RankingOptions,
    default_limit: usize,
}

impl DiagnosisService {
    /// Load and build the catalog at `path`. The path is kept for [`reload`](Self::reload).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let context = build_context(&path)?;
        Ok(Self {
            catalog_path: Some(path),
            ..Self::from_context(context)
        })
    }

    /// In-memory catalog, no reload source.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let context =
            InferenceContext::build(catalog).context("Failed to build inference context")?;
        Ok(Self::from_context(context))
    }

    pub fn from_context(context: InferenceContext) -> Self {
        Self {
            catalog_path: None,
            context: RwLock::new(Arc::new(context)),
            options: RankingOptions::default(),
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_options(mut self, options: RankingOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn snapshot(&self) -> Arc<InferenceContext> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a complete context.
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-read the catalog file and publish the new context. On failure the
    /// current context stays in place.
    pub fn reload(&self) -> Result<CatalogSummary> {
        let path = self.catalog_path.as_deref().ok_or_else(|| {
            anyhow::anyhow!("Service was not loaded from a file; nothing to reload")
        })?;
        let context = build_context(path)?;
        Ok(self.publish(context))
    }

    /// Replace the catalog with an in-memory one.
    pub fn replace(&self, catalog: Catalog) -> Result<CatalogSummary> {
        let context =
            InferenceContext::build(catalog).context("Failed to build inference context")?;
        Ok(self.publish(context))
    }

    fn publish(&self, context: InferenceContext) -> CatalogSummary {
        let summary = CatalogSummary::new(context.catalog(), context.statistics());
        *self
            .context
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(context);
        tracing::info!(
            disorders = summary.disorders,
            symptoms = summary.symptoms,
            "published new inference context"
        );
        summary
    }

    /// Rank and keep the top `limit` results (the service default when `None`).
    pub fn rank<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        limit: Option<usize>,
    ) -> Result<Vec<RankedDisorder>, InferenceError> {
        let context = self.snapshot();
        let limit = limit.unwrap_or(self.default_limit);

        let results = context.rank_with(symptoms, &self.options)?;
        Ok(results
            .into_iter()
            .take(limit)
            .map(RankedDisorder::from)
            .collect())
    }

    /// Sorted symptom names, optionally filtered by a case-insensitive prefix.
    pub fn symptom_names(&self, prefix: Option<&str>) -> Vec<String> {
        let names = self.snapshot().statistics().symptom_names();
        match prefix.map(str::to_lowercase) {
            Some(prefix) => names
                .into_iter()
                .filter(|name| name.to_lowercase().starts_with(&prefix))
                .collect(),
            None => names,
        }
    }

    pub fn co_occurring<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<String> {
        self.snapshot().statistics().co_occurring_symptoms(symptoms)
    }

    pub fn summary(&self) -> CatalogSummary {
        let context = self.snapshot();
        CatalogSummary::new(context.catalog(), context.statistics())
    }
}

fn build_context(path: &Path) -> Result<InferenceContext> {
    let catalog = CatalogLoader::load_file(path)?;
    InferenceContext::build(catalog)
        .with_context(|| format!("Failed to build inference context from {}", path.display()))
}
