//! Async event handler for the picker TUI.

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::runner::{RunError, Runner};
use crate::script;

use super::{app::App, events::TuiEvent, ui::render_ui};

/// Run the TUI-based algorithm picker
pub async fn run_picker(scripts_dir: &Path, pretty: bool) -> Result<()> {
    // Check if we're in a proper terminal environment
    if !io::IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!("picker mode requires a proper terminal environment"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let algorithms = script::discover(scripts_dir)?;
    let mut app = App::new(algorithms, pretty);
    let mut runner = Runner::new(scripts_dir);

    // Create event channels
    let (event_tx, event_rx) = mpsc::unbounded_channel::<TuiEvent>();

    let result = run_app(&mut terminal, &mut app, &mut runner, event_tx, event_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runner: &mut Runner,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    mut event_rx: mpsc::UnboundedReceiver<TuiEvent>,
) -> Result<()> {
    // Spawn input handler
    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || loop {
        // Poll for keyboard events
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if input_tx.send(TuiEvent::Key(key)).is_err() {
                    break; // Channel closed
                }
            }
        }
    });

    loop {
        // Render UI
        terminal.draw(|frame| render_ui(frame, app))?;

        // Handle events
        if let Ok(tui_event) = event_rx.try_recv() {
            match tui_event {
                TuiEvent::Key(key) => {
                    if handle_key_event(app, key, event_tx.clone())? {
                        break; // Quit requested
                    }
                }
                TuiEvent::Execute(name) => {
                    // Runs inline on the loop task: the registry has a single
                    // writer, and the loading frame is already on screen.
                    let outcome = runner.execute(Some(&name));
                    app.finish_run();
                    match outcome {
                        Ok(outcome) => app.show_outcome(&outcome),
                        Err(err) => app.show_error(&err),
                    }
                }
                TuiEvent::Refresh => {
                    app.set_algorithms(script::discover(runner.scripts_dir())?);
                }
            }
        }

        // Small delay to prevent busy waiting
        tokio::time::sleep(Duration::from_millis(16)).await;
    }

    Ok(())
}

/// Handle keyboard events
fn handle_key_event(
    app: &mut App,
    key: KeyEvent,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
) -> Result<bool> {
    // While help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.handle_ctrl_c() {
                return Ok(true);
            }
        }
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_help();
        }
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Char(' ') => app.toggle_mark(),
        KeyCode::PageUp => app.scroll_results_up(),
        KeyCode::PageDown => app.scroll_results_down(),
        KeyCode::Char('r') => {
            let _ = event_tx.send(TuiEvent::Refresh);
        }
        KeyCode::Enter => {
            // One cycle in flight at a time; the trigger is inert meanwhile
            if app.is_running {
                return Ok(false);
            }
            match app.marked_selection() {
                None => app.show_error(&RunError::NoSelection),
                Some(name) => {
                    app.begin_run(&name);
                    let _ = event_tx.send(TuiEvent::Execute(name));
                }
            }
        }
        _ => {}
    }

    Ok(false)
}
