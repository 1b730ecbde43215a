use clap::Args;
use pagination_sequence::sequence::{PageNumber, SequenceParams};

/// Generator inputs that override the configuration
#[derive(Debug, Clone, Default, Args)]
pub struct SequenceArgs {
    /// Current page
    #[arg(short = 'p', long = "current", allow_negative_numbers = true)]
    pub current: Option<PageNumber>,

    /// Total number of pages
    #[arg(short = 'n', long = "pages", allow_negative_numbers = true)]
    pub pages: Option<PageNumber>,

    /// Pages always shown at the start and the end
    #[arg(short = 'e', long = "edges", allow_negative_numbers = true)]
    pub edges: Option<PageNumber>,

    /// Pages shown on each side of the current page
    #[arg(short = 'a', long = "around", allow_negative_numbers = true)]
    pub around: Option<PageNumber>,
}

impl SequenceArgs {
    pub fn apply(&self, params: &mut SequenceParams) {
        if let Some(current) = self.current {
            params.cur_page = current;
        }
        if let Some(pages) = self.pages {
            params.num_pages = pages;
        }
        if let Some(edges) = self.edges {
            params.num_pages_at_edges = edges;
        }
        if let Some(around) = self.around {
            params.num_pages_around_current = around;
        }
    }
}
