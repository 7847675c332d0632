use crate::core::error::CliError;
use differential::application::DiagnosisService;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG: &str = "disorder-symptoms.xml";

/// `--catalog`, then `DIFFERENTIAL_CATALOG`, then the default file name.
pub fn resolve_catalog_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("DIFFERENTIAL_CATALOG").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG))
}

/// Parsing a full Orphanet product takes a moment; keep it off the async runtime.
pub async fn load_service(path: &Path) -> Result<DiagnosisService, CliError> {
    tracing::debug!(catalog = %path.display(), "loading catalog");
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || DiagnosisService::load(path))
        .await
        .map_err(|e| CliError::Runtime(e.to_string()))?
        .map_err(|e| CliError::Catalog(format!("{e:#}")))
}
