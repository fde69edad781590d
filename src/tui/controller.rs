use crate::session::MenuChoice;
use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Draw and handle keys until the player leaves.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
) -> io::Result<()> {
    while !app.finished() {
        terminal.draw(|f| ui::draw(f, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }
    Ok(())
}

/// Map a key to an [`InputAction`] and apply it.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match key_action(app, code) {
        Some(action) => app.handle_input(action),
        None => false,
    }
}

fn key_action(app: &AppState, code: KeyCode) -> Option<InputAction> {
    if app.help_open() {
        return match code {
            KeyCode::Char('?') | KeyCode::Esc => Some(InputAction::ToggleHelp),
            _ => None,
        };
    }
    let action = match code {
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Up => InputAction::MenuPrev,
        KeyCode::Down => InputAction::MenuNext,
        KeyCode::Enter => InputAction::MenuApply,
        KeyCode::Char('1') | KeyCode::Char('d') | KeyCode::Char('D') => {
            InputAction::Choose(MenuChoice::Draw)
        }
        KeyCode::Char('2') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            InputAction::Choose(MenuChoice::Leave)
        }
        KeyCode::Char('3') | KeyCode::Char('r') | KeyCode::Char('R') => {
            InputAction::Choose(MenuChoice::Reshuffle)
        }
        _ => return None,
    };
    Some(action)
}
