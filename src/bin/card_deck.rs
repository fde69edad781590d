use card_deck::options::{FrontEnd, Options};
use clap::Parser;
use card_deck::session::Outcome;
use card_deck::tui::{app::AppState, controller};
use card_deck::{repl, session::Session};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::process::ExitCode;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(session: Session) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(session);

    let res = controller::run(&mut terminal, &mut app);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res?;
    let held = app.session.hand().len();
    println!("{}", Outcome::Left { held });
    Ok(())
}

fn run_line(mut session: Session) -> io::Result<()> {
    let stdin = io::stdin();
    let held = repl::run(&mut session, stdin.lock(), io::stdout().lock())?;
    log::info!("session ended holding {held} card(s)");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    // clap prints usage and exits 2 on bad arguments
    let opts = Options::parse();
    log::debug!("{opts:?}");

    let session = opts.session();
    let res = match opts.front_end() {
        FrontEnd::Tui if io::stdout().is_terminal() => run_tui(session),
        FrontEnd::Tui => {
            log::warn!("--tui requires a real terminal (TTY); using the line menu");
            run_line(session)
        }
        FrontEnd::Line => run_line(session),
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("card-deck: {e}");
            ExitCode::FAILURE
        }
    }
}
