use crate::orphanet;
use anyhow::{Context, Result};
use domain::Catalog;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads disorder catalogs from disk (Orphanet XML or the JSON catalog format).
pub struct CatalogLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    OrphanetXml,
    Json,
}

impl CatalogLoader {
    /// Auto-detect format from file extension and load
    pub fn load_file(path: &Path) -> Result<Catalog> {
        let format = Self::detect_format(path)?;
        let file = File::open(path)
            .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let catalog = match format {
            CatalogFormat::OrphanetXml => orphanet::parse_reader(reader)
                .with_context(|| format!("Failed to parse Orphanet catalog: {}", path.display()))?,
            CatalogFormat::Json => serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))?,
        };

        tracing::info!(
            path = %path.display(),
            ?format,
            disorders = catalog.len(),
            "loaded disorder catalog"
        );
        Ok(catalog)
    }

    pub fn parse(content: &str, format: CatalogFormat) -> Result<Catalog> {
        match format {
            CatalogFormat::OrphanetXml => {
                orphanet::parse_str(content).context("Failed to parse Orphanet catalog")
            }
            CatalogFormat::Json => {
                serde_json::from_str(content).context("Failed to parse JSON catalog")
            }
        }
    }

    pub fn detect_format(path: &Path) -> Result<CatalogFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", path.display()))?;

        match extension.to_lowercase().as_str() {
            "xml" => Ok(CatalogFormat::OrphanetXml),
            "json" => Ok(CatalogFormat::Json),
            _ => anyhow::bail!("Unsupported catalog format: .{}", extension),
        }
    }

    /// Only JSON can be written back; Orphanet XML is an input format.
    pub fn to_json(catalog: &Catalog) -> Result<String> {
        serde_json::to_string_pretty(catalog).context("Failed to serialize catalog to JSON")
    }
}
