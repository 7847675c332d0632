use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_CATALOG: &str = "disorder-symptoms.xml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3001";
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub catalog_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
    pub default_top_n: usize,
}

impl ApiConfig {
    /// Read `DIFFERENTIAL_CATALOG`, `BIND_ADDR`, `CORS_ORIGIN` and `DEFAULT_TOP_N`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let catalog_path = lookup("DIFFERENTIAL_CATALOG")
            .unwrap_or_else(|| DEFAULT_CATALOG.to_string())
            .into();

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let default_top_n = match lookup("DEFAULT_TOP_N") {
            Some(value) => value
                .parse()
                .with_context(|| format!("DEFAULT_TOP_N is not a count: {value}"))?,
            None => DEFAULT_TOP_N,
        };

        Ok(Self {
            catalog_path,
            bind_addr,
            cors_origin,
            default_top_n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("disorder-symptoms.xml"));
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.cors_origin, "http://localhost:3001");
        assert_eq!(config.default_top_n, 10);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DIFFERENTIAL_CATALOG", "/data/en_product4.xml"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DEFAULT_TOP_N", "25"),
        ])
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/data/en_product4.xml"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.default_top_n, 25);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config(&[("BIND_ADDR", "localhost")]).is_err());
        assert!(config(&[("DEFAULT_TOP_N", "ten")]).is_err());
    }
}
