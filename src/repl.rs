//! Line-oriented menu loop over any reader/writer pair.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::session::{MenuChoice, Outcome, Session};

const INVALID_CHOICE: &str = "Invalid choice. Please enter 1, 2, or 3.";

/// Run the menu until the player leaves or input ends.
///
/// Returns the number of cards the player held when the loop ended.
///
/// ```
/// use card_deck::repl;
/// use card_deck::session::Session;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let held = repl::run(&mut Session::seeded(1), Cursor::new("1\n1\n2\n"), &mut out).unwrap();
/// assert_eq!(held, 2);
/// ```
pub fn run<R, I, O>(session: &mut Session<R>, mut input: I, mut output: O) -> io::Result<usize>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "Welcome to Card Game!")?;
    writeln!(output, "Deck initialized with {} cards\n", session.deck().cards_remaining())?;

    let mut line = String::new();
    loop {
        write_status(session, &mut output)?;
        write!(output, "\nEnter your choice (1-3): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("input closed, leaving");
            let held = session.hand().len();
            writeln!(output)?;
            writeln!(output, "\n{}", Outcome::Left { held })?;
            return Ok(held);
        }

        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                log::debug!("{e}");
                writeln!(output, "{INVALID_CHOICE}\n")?;
                continue;
            }
        };

        match session.apply(choice) {
            left @ Outcome::Left { held } => {
                writeln!(output, "\n{left}")?;
                return Ok(held);
            }
            other => writeln!(output, "{other}\n")?,
        }
    }
}

fn write_status<R: Rng, O: Write>(session: &Session<R>, output: &mut O) -> io::Result<()> {
    writeln!(output, "Your cards: {}", session.hand_display())?;
    writeln!(output, "Cards remaining in deck: {}\n", session.deck().cards_remaining())?;
    writeln!(output, "Options:")?;
    for choice in MenuChoice::ALL {
        writeln!(output, "  {}. {}", choice.key(), choice.description())?;
    }
    Ok(())
}
