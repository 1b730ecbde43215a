use crate::config::Config;
use crate::sequence::{format_sequence, PageNumber, SequenceParams, Token};
use crate::tui::components::pagination::{PaginationBar, PaginationContainer};
use crate::tui::components::Component;
use crate::tui::{events::Event, keys::KeyMap, themes::presets, themes::Theme, Frame};
use anyhow::{anyhow, Result};
use crossterm::event::KeyEventKind;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Interactive pagination state and controller
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Current generator inputs; only [`App::go_to_page`] moves the current page
    pub params: SequenceParams,

    /// Sequence generated for `params`
    pub sequence: Vec<Token>,

    /// Key mappings for the application
    pub key_map: KeyMap,

    /// Current theme for styling
    pub theme: Theme,

    /// The pagination control
    pub bar: PaginationBar,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether mouse events reach the bar
    pub mouse_enabled: bool,
}

impl App {
    /// Create the app. Entry clicks are delivered back as [`Event::GoToPage`]
    /// through `events`.
    pub fn new(config: &Config, events: mpsc::UnboundedSender<Event>) -> Result<Self> {
        config.validate()?;

        let theme = presets::by_name(&config.theme)
            .ok_or_else(|| anyhow!("Unknown theme '{}'", config.theme))?;

        let container = PaginationContainer::new(config.render.clone()).with_on_entry_click(
            move |page| {
                if events.send(Event::GoToPage(page)).is_err() {
                    warn!(page, "Event loop is gone, dropping page change");
                }
            },
        );

        let mut app = Self {
            should_quit: false,
            params: config.sequence,
            sequence: Vec::new(),
            key_map: KeyMap::default(),
            theme,
            bar: PaginationBar::new(container),
            status_message: None,
            mouse_enabled: config.mouse_enabled,
        };
        app.regenerate(config.sequence)?;

        Ok(app)
    }

    fn regenerate(&mut self, params: SequenceParams) -> Result<()> {
        let sequence = params.generate()?;
        self.bar.update(params.cur_page, params.num_pages, &sequence);
        self.params = params;
        self.sequence = sequence;
        Ok(())
    }

    /// Move to `page` and regenerate the sequence
    pub fn go_to_page(&mut self, page: PageNumber) -> Result<()> {
        let params = SequenceParams {
            cur_page: page,
            ..self.params
        };
        self.regenerate(params)?;

        info!(page, "Went to page");
        self.status_message = Some(format!("Clicked: Go to Page {}", page));
        Ok(())
    }

    /// Handle incoming events, returning whether the app should quit
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => {
                if key_event.kind == KeyEventKind::Release {
                    return Ok(self.should_quit);
                }

                if self.key_map.should_quit(&key_event) {
                    self.should_quit = true;
                    return Ok(true);
                }

                let handled = self.bar.handle_key_event(key_event).await?;
                if !handled && self.key_map.should_close(&key_event) {
                    self.should_quit = true;
                }
            }

            Event::Mouse(mouse_event) => {
                if self.mouse_enabled {
                    self.bar.handle_mouse_event(mouse_event).await?;
                }
            }

            Event::GoToPage(page) => {
                self.go_to_page(page)?;
            }

            Event::Resize(_, _) | Event::Tick => {}
        }

        Ok(self.should_quit)
    }

    /// Render the application UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Parameters
                Constraint::Length(3), // Pagination bar
                Constraint::Length(1), // Raw sequence
                Constraint::Min(0),
                Constraint::Length(1), // Status bar
            ])
            .split(frame.size());

        self.render_header(frame, chunks[0]);
        self.bar.render(frame, chunks[1], &self.theme);

        let raw = Paragraph::new(Line::from(vec![
            Span::styled(" sequence ", self.theme.muted_style()),
            Span::styled(format_sequence(&self.sequence), self.theme.base_style()),
        ]));
        frame.render_widget(raw, chunks[2]);

        self.render_status_bar(frame, chunks[4]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let params = &self.params;
        let text = format!(
            "Page {} of {} · {} at edges · {} around current",
            params.cur_page,
            params.num_pages,
            params.num_pages_at_edges,
            params.num_pages_around_current
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" pagination-sequence ");
        let header = Paragraph::new(Span::styled(text, self.theme.title_style())).block(block);

        frame.render_widget(header, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_text = match self.status_message {
            Some(ref message) => message.clone(),
            None => self.key_map.help_text(),
        };

        frame.render_widget(
            Paragraph::new(status_text).style(self.theme.muted_style()),
            area,
        );
    }
}
