use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::args::SequenceArgs;
use pagination_sequence::config::Config;
use pagination_sequence::tui::components::pagination::{plain_text, PaginationContainer};

/// Print the pagination control for the given parameters
#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Hide the « and » arrows
    #[arg(long)]
    pub no_first_last: bool,

    /// Hide the ‹ and › arrows
    #[arg(long)]
    pub no_next_prev: bool,

    /// Prefix for entry links
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the entry descriptors as JSON
    #[arg(long)]
    pub json: bool,
}

impl RenderCommand {
    pub fn execute(&self, config: Config) -> Result<()> {
        println!("{}", self.output(config)?);
        Ok(())
    }

    /// The text this command prints
    pub fn output(&self, mut config: Config) -> Result<String> {
        self.sequence.apply(&mut config.sequence);
        if self.no_first_last {
            config.render.show_first_last_arrows = false;
        }
        if self.no_next_prev {
            config.render.show_next_prev_arrows = false;
        }
        if let Some(base_url) = &self.base_url {
            config.render.base_url = base_url.clone();
        }
        debug!(params = ?config.sequence, options = ?config.render, "Executing render command");

        let sequence = config.sequence.generate()?;
        let entries = PaginationContainer::new(config.render).render(
            config.sequence.cur_page,
            config.sequence.num_pages,
            &sequence,
        );

        if self.json {
            Ok(serde_json::to_string_pretty(&entries)?)
        } else {
            Ok(plain_text(&entries))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(current: i64, pages: i64) -> RenderCommand {
        RenderCommand {
            sequence: SequenceArgs {
                current: Some(current),
                pages: Some(pages),
                edges: Some(2),
                around: Some(1),
            },
            no_first_last: false,
            no_next_prev: false,
            base_url: None,
            json: false,
        }
    }

    #[test]
    fn test_plain_output() {
        let output = command(5, 10).output(Config::default()).unwrap();
        assert_eq!(output, "« ‹ 1 2 … 4 [5] 6 … 9 10 › »");
    }

    #[test]
    fn test_hidden_arrows() {
        let mut command = command(5, 10);
        command.no_first_last = true;
        assert_eq!(
            command.output(Config::default()).unwrap(),
            "‹ 1 2 … 4 [5] 6 … 9 10 ›"
        );

        command.no_next_prev = true;
        assert_eq!(
            command.output(Config::default()).unwrap(),
            "1 2 … 4 [5] 6 … 9 10"
        );
    }

    #[test]
    fn test_json_output() {
        let mut command = command(1, 5);
        command.json = true;
        command.base_url = Some("/posts".to_string());

        let output = command.output(Config::default()).unwrap();
        let entries: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(entries[0]["key"], "first");
        assert_eq!(entries[0]["is_disabled"], true);
        assert_eq!(entries[2]["href"], "/posts/page/1");
        assert_eq!(entries[2]["is_current"], true);
    }

    #[test]
    fn test_zero_pages_renders_arrows_only() {
        let output = command(1, 0).output(Config::default()).unwrap();
        assert_eq!(output, "« ‹ › »");
    }
}
