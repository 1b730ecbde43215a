use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::sequence::{PageNumber, SequenceParams};
use crate::tui::components::pagination::RenderOptions;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Inputs of the sequence generator
    pub sequence: SequenceParams,

    /// Which arrows to show and where links point
    pub render: RenderOptions,

    /// Whether mouse clicks activate entries in the interactive bar
    pub mouse_enabled: bool,

    /// Name of the colour theme (`dark` or `light`)
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence: SequenceParams::default(),
            render: RenderOptions::default(),
            mouse_enabled: true,
            theme: "dark".to_string(),
        }
    }
}

/// Contents of a configuration file; every key is optional
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub cur_page: Option<PageNumber>,
    pub num_pages: Option<PageNumber>,
    pub num_pages_at_edges: Option<PageNumber>,
    pub num_pages_around_current: Option<PageNumber>,
    pub show_first_last_arrows: Option<bool>,
    pub show_next_prev_arrows: Option<bool>,
    pub base_url: Option<String>,
    pub mouse: Option<bool>,
    pub theme: Option<String>,
}

impl Config {
    /// Initialize configuration from defaults, a config file and the environment.
    ///
    /// `explicit_path` must exist when given; otherwise the first existing
    /// file from [`Config::search_paths`] is used, if any.
    pub async fn init(explicit_path: Option<&Path>) -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();

        let file_config = match explicit_path {
            Some(path) => Some(Self::load_from_path(path).await?),
            None => Self::load_from_file().await?,
        };
        if let Some(file_config) = file_config {
            config.merge_with(file_config);
        }

        config.load_from_env()?;

        Ok(config)
    }

    /// Candidate configuration files, highest priority first:
    /// 1. ./.pagination.json
    /// 2. ./pagination.json
    /// 3. $CONFIG_DIR/pagination-sequence/config.json
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("./.pagination.json"),
            PathBuf::from("./pagination.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("pagination-sequence").join("config.json"));
        }

        paths
    }

    /// Load the first configuration file that exists
    pub async fn load_from_file() -> Result<Option<ConfigFile>> {
        for path in Self::search_paths() {
            if path.exists() {
                return Self::load_from_path(&path).await.map(Some);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    pub async fn load_from_path(path: &Path) -> Result<ConfigFile> {
        debug!("Loading configuration from: {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) -> Result<()> {
        self.apply_env(|name| std::env::var(name).ok())
    }

    /// Apply `PAGINATION_*` variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PAGINATION_CURRENT_PAGE") {
            self.sequence.cur_page = parse_number("PAGINATION_CURRENT_PAGE", &value)?;
        }

        if let Some(value) = lookup("PAGINATION_NUM_PAGES") {
            self.sequence.num_pages = parse_number("PAGINATION_NUM_PAGES", &value)?;
        }

        if let Some(value) = lookup("PAGINATION_EDGES") {
            self.sequence.num_pages_at_edges = parse_number("PAGINATION_EDGES", &value)?;
        }

        if let Some(value) = lookup("PAGINATION_AROUND") {
            self.sequence.num_pages_around_current = parse_number("PAGINATION_AROUND", &value)?;
        }

        if let Some(value) = lookup("PAGINATION_SHOW_FIRST_LAST") {
            self.render.show_first_last_arrows = parse_flag("PAGINATION_SHOW_FIRST_LAST", &value)?;
        }

        if let Some(value) = lookup("PAGINATION_SHOW_NEXT_PREV") {
            self.render.show_next_prev_arrows = parse_flag("PAGINATION_SHOW_NEXT_PREV", &value)?;
        }

        if let Some(value) = lookup("PAGINATION_MOUSE") {
            self.mouse_enabled = parse_flag("PAGINATION_MOUSE", &value)?;
        }

        if let Some(base_url) = lookup("PAGINATION_BASE_URL") {
            self.render.base_url = base_url;
        }

        if let Some(theme) = lookup("PAGINATION_THEME") {
            self.theme = theme;
        }

        Ok(())
    }

    /// Merge the keys present in a configuration file into this one
    pub fn merge_with(&mut self, other: ConfigFile) {
        if let Some(cur_page) = other.cur_page {
            self.sequence.cur_page = cur_page;
        }
        if let Some(num_pages) = other.num_pages {
            self.sequence.num_pages = num_pages;
        }
        if let Some(edges) = other.num_pages_at_edges {
            self.sequence.num_pages_at_edges = edges;
        }
        if let Some(around) = other.num_pages_around_current {
            self.sequence.num_pages_around_current = around;
        }
        if let Some(show) = other.show_first_last_arrows {
            self.render.show_first_last_arrows = show;
        }
        if let Some(show) = other.show_next_prev_arrows {
            self.render.show_next_prev_arrows = show;
        }
        if let Some(base_url) = other.base_url {
            self.render.base_url = base_url;
        }
        if let Some(mouse) = other.mouse {
            self.mouse_enabled = mouse;
        }
        if let Some(theme) = other.theme {
            self.theme = theme;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.sequence.validate()?;

        if crate::tui::themes::presets::by_name(&self.theme).is_none() {
            return Err(anyhow!(
                "Unknown theme '{}'. Available themes: dark, light",
                self.theme
            ));
        }

        Ok(())
    }
}

fn parse_number(name: &str, value: &str) -> Result<PageNumber> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{} must be an integer, got '{}'", name, value))
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("{} must be true or false, got '{}'", name, value)),
    }
}
