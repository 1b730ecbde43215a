use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use super::browse::BrowseCommand;
use super::generate::GenerateCommand;
use super::render::RenderCommand;
use pagination_sequence::config::Config;

/// Compact pagination sequences for long page ranges
#[derive(Debug, Parser)]
#[command(
    name = "pagination-sequence",
    version,
    about = "Compact pagination sequences for long page ranges",
    long_about = r#"Generates the pages a pagination control should show: the first and last
few pages, a window around the current page, and an ellipsis for every gap.

Examples:
  pagination-sequence                                   # Browse interactively
  pagination-sequence generate -p 5 -n 10 -e 2 -a 1     # [1,2,…,4,5,6,…,9,10]
  pagination-sequence render -p 5 -n 10 --json          # Entry descriptors as JSON
  pagination-sequence --config ./pages.json browse      # Use an explicit config file"#
)]
pub struct Cli {
    /// Configuration file to use instead of the default search paths
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the pagination sequence
    Generate(GenerateCommand),

    /// Print the pagination control with its arrows
    Render(RenderCommand),

    /// Page through the sequence in an interactive terminal bar (default)
    Browse(BrowseCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        let config = Config::init(self.config.as_deref()).await?;
        debug!("Configuration initialized");

        match self.command {
            Some(Commands::Generate(cmd)) => cmd.execute(config),
            Some(Commands::Render(cmd)) => cmd.execute(config),
            Some(Commands::Browse(cmd)) => cmd.execute(config).await,
            None => BrowseCommand::default().execute(config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_browses() {
        let cli = Cli::try_parse_from(["pagination-sequence"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_generate_arguments() {
        let cli = Cli::try_parse_from([
            "pagination-sequence",
            "generate",
            "--current",
            "5",
            "-n",
            "10",
            "--edges",
            "2",
            "-a",
            "1",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate(cmd)) => {
                assert_eq!(cmd.sequence.current, Some(5));
                assert_eq!(cmd.sequence.pages, Some(10));
                assert_eq!(cmd.sequence.edges, Some(2));
                assert_eq!(cmd.sequence.around, Some(1));
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_numbers_reach_validation() {
        let cli =
            Cli::try_parse_from(["pagination-sequence", "generate", "--edges", "-1"]).unwrap();

        match cli.command {
            Some(Commands::Generate(cmd)) => {
                assert_eq!(cmd.sequence.edges, Some(-1));
                assert!(cmd.output(Config::default()).is_err());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pagination-sequence",
            "render",
            "--no-first-last",
            "-d",
            "--config",
            "pages.json",
        ])
        .unwrap();

        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("pages.json")));
        match cli.command {
            Some(Commands::Render(cmd)) => {
                assert!(cmd.no_first_last);
                assert!(!cmd.no_next_prev);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_browse_options() {
        let cli = Cli::try_parse_from([
            "pagination-sequence",
            "browse",
            "--no-mouse",
            "--theme",
            "light",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Browse(cmd)) => {
                assert!(cmd.no_mouse);
                assert_eq!(cmd.theme.as_deref(), Some("light"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_page_is_rejected() {
        assert!(Cli::try_parse_from(["pagination-sequence", "generate", "-p", "five"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
