use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod core;
mod ui;

use crate::core::error::CliError;
use crate::core::loader::resolve_catalog_path;
use commands::{
    rank::RankCommand, related::RelatedCommand, stats::StatsCommand, symptoms::SymptomsCommand,
};

#[derive(Parser)]
#[command(name = "differential")]
#[command(about = "Rank rare disorders by observed symptoms", long_about = None)]
struct Cli {
    /// Catalog file (.xml Orphanet product or .json); defaults to $DIFFERENTIAL_CATALOG
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank disorders against a set of symptoms
    Rank(RankCommand),
    /// List known symptom names
    Symptoms(SymptomsCommand),
    /// List symptoms that co-occur with the given ones
    Related(RelatedCommand),
    /// Summarize the catalog
    Stats(StatsCommand),
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Logs go to stderr so tables and JSON on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        e.render();
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = resolve_catalog_path(cli.catalog);

    match cli.command {
        Commands::Rank(cmd) => cmd.execute(&catalog).await,
        Commands::Symptoms(cmd) => cmd.execute(&catalog).await,
        Commands::Related(cmd) => cmd.execute(&catalog).await,
        Commands::Stats(cmd) => cmd.execute(&catalog).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rank() {
        let cli = Cli::try_parse_from([
            "differential",
            "rank",
            "Seizure",
            "Ataxia",
            "--top",
            "3",
            "--catalog",
            "catalog.json",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("catalog.json")));
        match cli.command {
            Commands::Rank(cmd) => {
                assert_eq!(cmd.symptoms, vec!["Seizure", "Ataxia"]);
                assert_eq!(cmd.top, 3);
                assert!(!cmd.json);
            }
            _ => panic!("expected rank"),
        }
    }

    #[test]
    fn test_rank_requires_symptoms() {
        assert!(Cli::try_parse_from(["differential", "rank"]).is_err());
        assert!(Cli::try_parse_from(["differential", "related"]).is_err());
    }

    #[test]
    fn test_parse_symptoms_prefix() {
        let cli = Cli::try_parse_from(["differential", "symptoms", "--prefix", "sei"]).unwrap();
        match cli.command {
            Commands::Symptoms(cmd) => assert_eq!(cmd.prefix.as_deref(), Some("sei")),
            _ => panic!("expected symptoms"),
        }
    }
}
