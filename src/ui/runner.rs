//! Event loop connecting the [`App`] state machine to a terminal.

use crate::ui::app::App;
use crate::ui::render::render;
use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Poll timeout while no animation is running.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Trait for reading terminal events (allows dependency injection for testing)
pub trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
pub struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Run the session until the app asks to quit.
///
/// One input event or one timer tick is handled per iteration, and a frame is
/// drawn only when something changed.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut dyn EventReader,
) -> Result<()> {
    loop {
        if app.should_quit {
            return Ok(());
        }

        if app.needs_redraw {
            terminal
                .draw(|f| render(f, app))
                .map_err(|e| anyhow!("Failed to draw terminal UI: {e}"))?;
        }

        let timeout = app
            .next_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(Instant::now()));

        match events.read_event(timeout)? {
            Some(Event::Key(key)) => app.handle_key(key),
            Some(Event::Resize(width, height)) => app.resize(width, height),
            _ => {}
        }

        app.on_tick(Instant::now());
    }
}
