//! Terminal user interface.
//!
//! A raw-mode, alternate-screen TUI built on ratatui and crossterm. The
//! event loop owns the only mutable handle to presentation state: keys
//! arrive on a channel, [`TuiApp`] translates them into actions, the loop
//! dispatches each action to the store, waits briefly for its effects, and
//! re-reads the state before drawing the next frame.

mod app;
mod events;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::TaskStore;
use crate::error::AppError;
pub use app::{FormField, InputMode, TaskForm, TuiApp};

/// How long to wait for a dispatched action's effects before redrawing.
const EFFECT_WAIT: Duration = Duration::from_secs(1);

/// Redraw interval when no input arrives.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Checks whether the current terminal can host the TUI.
///
/// # Errors
///
/// Returns a human-readable reason when stdout is not a tty, `TERM` is
/// unset, or the terminal is smaller than 80x24.
pub fn check_tui_support() -> Result<(), String> {
    if !atty::is(atty::Stream::Stdout) {
        return Err("stdout is not a terminal".to_string());
    }
    if !cfg!(windows) && std::env::var("TERM").is_err() {
        return Err("TERM environment variable not set".to_string());
    }
    let (width, height) =
        terminal::size().map_err(|error| format!("cannot query terminal size: {error}"))?;
    if width < 80 || height < 24 {
        return Err(format!(
            "terminal too small ({width}x{height}), need at least 80x24"
        ));
    }
    Ok(())
}

/// Runs the TUI until the user quits.
///
/// The terminal is restored on every exit path, including errors.
///
/// # Errors
///
/// Returns [`AppError`] when terminal I/O fails or the store rejects an
/// action.
pub async fn run(store: &TaskStore) -> Result<(), AppError> {
    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, store).await;
    restore_terminal(&mut terminal);
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &TaskStore,
) -> Result<(), AppError> {
    let mut app = TuiApp::new(store.state(std::clone::Clone::clone).await);
    let (input_reader, mut input_rx) = events::InputReader::start();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    let result = loop {
        tokio::select! {
            Some(key) = input_rx.recv() => {
                if let Some(action) = app.handle_key(key) {
                    match store.send(action).await {
                        Ok(mut handle) => {
                            if handle.wait_with_timeout(EFFECT_WAIT).await.is_err() {
                                tracing::debug!("Effects still running after dispatch");
                            }
                        }
                        Err(error) => break Err(AppError::Store(error)),
                    }
                    app.set_snapshot(store.state(std::clone::Clone::clone).await);
                }
            }
            _ = tick.tick() => {}
        }

        if let Err(error) = terminal.draw(|f| ui::draw(f, &app)) {
            break Err(AppError::Terminal(error));
        }
        if app.should_quit {
            break Ok(());
        }
    };

    input_reader.stop();
    result
}

/// Enters raw mode on the alternate screen.
///
/// # Errors
///
/// Returns the underlying I/O error when the terminal cannot be configured.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves the alternate screen and re-enables the cursor. Errors are
/// ignored so every exit path can call this unconditionally.
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen);
    let _ = terminal.show_cursor();
}
