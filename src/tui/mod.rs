pub mod action;
pub mod keys;
pub mod reducer;
pub mod renderer;
pub mod state;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::AppState;

use std::io::{self, Write};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info, warn};

use crate::config::{Config, DisplayConfig};

/// Raw mode plus alternate screen, undone on drop
///
/// Dropping restores the terminal on every exit path, including a failed
/// setup step and a panic unwinding through the event loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = leave_screen(&mut io::stdout()) {
            warn!("Failed to leave alternate screen: {}", e);
        }
    }
}

/// Leave the alternate screen and show the cursor again
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Main entry point for TUI mode
///
/// Everything runs on the calling thread: draw, wait for a key, reduce.
pub fn run(config: &Config) -> Result<(), io::Error> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    info!("TUI started");
    let result = event_loop(&mut terminal, &config.display());
    info!("TUI stopped");

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, display: &DisplayConfig) -> io::Result<()> {
    let mut state = AppState::default();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            renderer::render(&state, area, f.buffer_mut(), display);
        })?;

        let Event::Key(key) = event::read()? else {
            // Resize and others just redraw
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = key_to_action(key, &state) else {
            continue;
        };
        if action == Action::Quit {
            debug!("ACTION: Quitting application");
            return Ok(());
        }
        state = reduce(state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_screen_restores_main_screen_and_cursor() {
        let mut out: Vec<u8> = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
