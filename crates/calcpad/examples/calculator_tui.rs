//! Calculator TUI example
//!
//! Run with: cargo run --example calculator_tui --features tui

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use calcpad::tui::{render, CalculatorApp, InputHandler, KeyAction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Seeds the random token from the wall clock
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::from(d.subsec_nanos()) ^ d.as_secs())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::with_seed(clock_seed());
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        if let Event::Key(key) = event::read()? {
            match input_handler.handle_key(key) {
                KeyAction::Token(token) => app.press(token),
                KeyAction::Quit => app.quit(),
                KeyAction::None => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
