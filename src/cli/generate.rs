use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::args::SequenceArgs;
use pagination_sequence::config::Config;
use pagination_sequence::sequence::format_sequence;

/// Print the pagination sequence for the given parameters
#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Print a JSON array instead of the compact form
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    pub fn execute(&self, config: Config) -> Result<()> {
        println!("{}", self.output(config)?);
        Ok(())
    }

    /// The text this command prints
    pub fn output(&self, mut config: Config) -> Result<String> {
        self.sequence.apply(&mut config.sequence);
        debug!(params = ?config.sequence, "Executing generate command");

        let sequence = config.sequence.generate()?;

        if self.json {
            Ok(serde_json::to_string(&sequence)?)
        } else {
            Ok(format_sequence(&sequence))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(current: i64, pages: i64, edges: i64, around: i64, json: bool) -> GenerateCommand {
        GenerateCommand {
            sequence: SequenceArgs {
                current: Some(current),
                pages: Some(pages),
                edges: Some(edges),
                around: Some(around),
            },
            json,
        }
    }

    #[test]
    fn test_compact_output() {
        let output = command(5, 10, 2, 1, false).output(Config::default()).unwrap();
        assert_eq!(output, "[1,2,…,4,5,6,…,9,10]");
    }

    #[test]
    fn test_json_output() {
        let output = command(1, 10, 2, 2, true).output(Config::default()).unwrap();
        assert_eq!(output, r#"[1,2,3,"…",9,10]"#);
    }

    #[test]
    fn test_config_fills_missing_arguments() {
        let command = GenerateCommand {
            sequence: SequenceArgs {
                current: Some(50),
                ..SequenceArgs::default()
            },
            json: false,
        };
        let output = command.output(Config::default()).unwrap();
        assert_eq!(output, "[1,2,…,48,49,50]");
    }

    #[test]
    fn test_invalid_input_fails() {
        let err = command(11, 10, 2, 2, false)
            .output(Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("current page 11"));
    }
}
