use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use anyhow::Result;

use crate::sequence::PageNumber;

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// No input within one tick
    Tick,

    /// A pagination entry asked to go to a page
    GoToPage(PageNumber),
}

/// Event handler merging terminal input with internal events
pub struct EventHandler {
    /// Event receiver channel
    receiver: mpsc::UnboundedReceiver<Event>,

    /// Event sender channel
    sender: mpsc::UnboundedSender<Event>,

    /// How long to wait for terminal input before yielding a tick
    tick_interval: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        Self::with_tick_interval(Duration::from_millis(100))
    }

    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            receiver,
            sender,
            tick_interval,
        }
    }

    /// Get the next event.
    ///
    /// Internal events are delivered before terminal input is polled.
    pub async fn next(&mut self) -> Result<Event> {
        if let Ok(event) = self.receiver.try_recv() {
            return Ok(event);
        }

        let tick_interval = self.tick_interval;
        let polled = tokio::task::spawn_blocking(move || -> std::io::Result<Option<CrosstermEvent>> {
            if crossterm::event::poll(tick_interval)? {
                Ok(Some(crossterm::event::read()?))
            } else {
                Ok(None)
            }
        })
        .await??;

        Ok(match polled {
            Some(event) => Self::convert_crossterm_event(event),
            None => Event::Tick,
        })
    }

    /// Convert crossterm events to application events
    fn convert_crossterm_event(event: CrosstermEvent) -> Event {
        match event {
            CrosstermEvent::Key(key_event) => Event::Key(key_event),
            CrosstermEvent::Mouse(mouse_event) => Event::Mouse(mouse_event),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            CrosstermEvent::FocusGained | CrosstermEvent::FocusLost | CrosstermEvent::Paste(_) => {
                Event::Tick
            }
        }
    }

    /// Send an internal event
    pub fn send(&self, event: Event) -> Result<()> {
        self.sender.send(event)?;
        Ok(())
    }

    /// Get a clone of the sender
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_internal_events_come_first() {
        let mut handler = EventHandler::new();
        handler.send(Event::GoToPage(3)).unwrap();
        handler.sender().send(Event::GoToPage(4)).unwrap();

        assert_eq!(handler.next().await.unwrap(), Event::GoToPage(3));
        assert_eq!(handler.next().await.unwrap(), Event::GoToPage(4));
    }

    #[test]
    fn test_convert_resize() {
        assert_eq!(
            EventHandler::convert_crossterm_event(CrosstermEvent::Resize(80, 24)),
            Event::Resize(80, 24)
        );
        assert_eq!(
            EventHandler::convert_crossterm_event(CrosstermEvent::FocusLost),
            Event::Tick
        );
    }
}
