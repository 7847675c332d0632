use clap::Args;
use std::path::Path;

use crate::core::error::CliError;
use crate::core::loader::load_service;
use crate::ui::table::ranking_table;

#[derive(Args, Debug)]
pub struct RankCommand {
    /// Observed symptoms (HPO term names, case-insensitive)
    #[arg(required = true)]
    pub symptoms: Vec<String>,

    /// How many candidates to show
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl RankCommand {
    pub async fn execute(self, catalog: &Path) -> Result<(), CliError> {
        let service = load_service(catalog).await?;
        let candidates = service.rank(&self.symptoms, Some(self.top))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
            return Ok(());
        }

        if candidates.is_empty() {
            println!(
                "{} No disorder lists any of: {}",
                console::style("!").yellow().bold(),
                self.symptoms.join(", ")
            );
            return Ok(());
        }

        println!("{}", ranking_table(&candidates));
        Ok(())
    }
}
