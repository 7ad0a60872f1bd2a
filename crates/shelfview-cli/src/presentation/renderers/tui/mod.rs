mod app;
mod popup;
mod tui_event;
mod ui;

use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use shelfview_types::{PageSize, PageSizeChoices};
use tracing::debug;

use app::{App, Flow};
pub use tui_event::TuiEvent;

/// Short enough to close the popup close to its grace deadline
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub page_size: PageSize,
    pub choices: PageSizeChoices,
    pub currency: String,
    /// Shown on the loading screen
    pub source: String,
}

pub struct TuiRenderer {
    settings: DashboardSettings,
}

impl TuiRenderer {
    pub fn new(settings: DashboardSettings) -> Self {
        Self { settings }
    }

    /// Run the dashboard until the user quits.
    ///
    /// The catalog arrives on `rx` from the loader thread; until then the
    /// loading screen is shown.
    pub fn run(self, rx: Receiver<TuiEvent>) -> Result<()> {
        let mut session = TerminalSession::enter()?;
        let mut app = App::new(self.settings);

        loop {
            while let Ok(event) = rx.try_recv() {
                app.on_event(event);
            }
            app.tick(Instant::now());

            session.terminal.draw(|f| ui::draw(f, &mut app))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) == Flow::Quit {
                        debug!("quit requested");
                        break;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }

        Ok(())
    }
}

/// Raw mode, alternate screen and mouse capture for as long as it lives
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = self.terminal.show_cursor();
    }
}
