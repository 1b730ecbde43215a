use anyhow::Result;
use clap::Args;
use tracing::info;

use super::args::SequenceArgs;
use pagination_sequence::config::Config;
use pagination_sequence::tui;

/// Page through an interactive pagination bar in the terminal
#[derive(Debug, Default, Args)]
pub struct BrowseCommand {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Ignore mouse clicks
    #[arg(long)]
    pub no_mouse: bool,

    /// Colour theme (dark or light)
    #[arg(long)]
    pub theme: Option<String>,
}

impl BrowseCommand {
    pub async fn execute(&self, config: Config) -> Result<()> {
        let config = self.apply(config);
        info!("Starting interactive mode");
        tui::run(&config).await
    }

    fn apply(&self, mut config: Config) -> Config {
        self.sequence.apply(&mut config.sequence);
        if self.no_mouse {
            config.mouse_enabled = false;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let command = BrowseCommand {
            sequence: SequenceArgs {
                pages: Some(7),
                ..SequenceArgs::default()
            },
            no_mouse: true,
            theme: Some("light".to_string()),
        };

        let config = command.apply(Config::default());
        assert_eq!(config.sequence.num_pages, 7);
        assert!(!config.mouse_enabled);
        assert_eq!(config.theme, "light");
        assert!(config.validate().is_ok());
    }
}
