use differential::domain::InferenceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Could not load catalog: {0}")]
    Catalog(String),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Catalog(_) => Some(
                "Pass --catalog or set DIFFERENTIAL_CATALOG to an Orphanet en_product4.xml or a .json catalog."
                    .to_string(),
            ),
            CliError::Inference(_) => Some(
                "Rerun with RUST_LOG=debug to see which symptoms contributed to the joint probability."
                    .to_string(),
            ),
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_has_suggestion() {
        let err = CliError::Catalog("missing".to_string());
        assert!(err.suggestion().unwrap().contains("--catalog"));
        assert!(CliError::Runtime("x".to_string()).suggestion().is_none());
    }
}
