//! HireConnect - Terminal Job Board
//!
//! Lists job postings, filters them by title, company or skill, and
//! remembers which postings the user applied to between sessions.

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hireconnect::application::{App, AppMode, AppliedJobsStore};
use hireconnect::config::Config;
use hireconnect::domain::JobCatalog;
use hireconnect::infrastructure::{FileSlotStorage, SlotStorage};
use hireconnect::presentation::{render_ui, InputHandler};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Entry point for the HireConnect job board.
///
/// Loads configuration, sets up file logging and the terminal, then runs
/// the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if configuration is invalid or terminal setup fails.
fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config);
    info!(data_dir = %config.data_dir.display(), "starting hireconnect");

    let store = AppliedJobsStore::initialize(FileSlotStorage::new(&config.data_dir));
    let mut app = App::new(JobCatalog::mock(), store);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    info!(applications = app.store.applied_count(), "exiting hireconnect");
    Ok(())
}

/// Sends logs to a file in the data directory, since stdout belongs to the UI.
///
/// Logging is skipped if the log file cannot be opened.
fn init_tracing(config: &Config) {
    let file = fs::create_dir_all(&config.data_dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())
    });

    let file = match file {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init();

    if initialized.is_err() {
        warn!("tracing subscriber already set");
    }
}

/// Main application event loop.
///
/// Redraws after input, on resize, or when the store reports a new
/// revision. Quits on 'q' in normal mode.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend, S: SlotStorage>(terminal: &mut Terminal<B>, app: &mut App<S>) -> io::Result<()> {
    let mut dirty = true;
    loop {
        let changed = app.needs_redraw();
        if dirty || changed {
            terminal.draw(|f| render_ui(f, app))?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
                dirty = true;
            }
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }
}
