use clap::Args;
use std::path::Path;

use crate::core::error::CliError;
use crate::core::loader::load_service;

#[derive(Args, Debug)]
pub struct SymptomsCommand {
    /// Only list names starting with this prefix (case-insensitive)
    #[arg(short, long)]
    pub prefix: Option<String>,
}

impl SymptomsCommand {
    pub async fn execute(self, catalog: &Path) -> Result<(), CliError> {
        let service = load_service(catalog).await?;
        for name in service.symptom_names(self.prefix.as_deref()) {
            println!("{name}");
        }
        Ok(())
    }
}
