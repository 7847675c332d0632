use clap::Args;
use std::path::Path;

use crate::core::error::CliError;
use crate::core::loader::load_service;

/// List symptoms seen together with all of the given ones in some disorder.
#[derive(Args, Debug)]
pub struct RelatedCommand {
    #[arg(required = true)]
    pub symptoms: Vec<String>,
}

impl RelatedCommand {
    pub async fn execute(self, catalog: &Path) -> Result<(), CliError> {
        let service = load_service(catalog).await?;
        let related = service.co_occurring(&self.symptoms);

        if related.is_empty() {
            println!(
                "{} No disorder lists all of: {}",
                console::style("!").yellow().bold(),
                self.symptoms.join(", ")
            );
        }
        for name in related {
            println!("{name}");
        }
        Ok(())
    }
}
