use clap::Args;
use std::path::Path;

use crate::core::error::CliError;
use crate::core::loader::load_service;
use crate::ui::table::summary_table;

#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub async fn execute(self, catalog: &Path) -> Result<(), CliError> {
        let service = load_service(catalog).await?;
        let summary = service.summary();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!(
                "{} {}",
                console::style("Catalog").bold(),
                console::style(catalog.display()).dim()
            );
            println!("{}", summary_table(&summary));
        }
        Ok(())
    }
}
