use crate::session::{MenuChoice, Outcome, Session};

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuApply,
    Choose(MenuChoice),
    ToggleHelp,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub session: Session,
    pub menu_index: usize,
    last_outcome: Option<Outcome>,
    help_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Session::new())
    }
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self { session, menu_index: 0, last_outcome: None, help_open: false }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// True once the player has chosen to leave.
    pub fn finished(&self) -> bool {
        self.last_outcome.is_some_and(Outcome::ends_session)
    }

    fn choose(&mut self, choice: MenuChoice) -> bool {
        if self.finished() {
            return false;
        }
        self.last_outcome = Some(self.session.apply(choice));
        true
    }

    /// Apply an input. Returns true when it reached the session.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            // help overlay swallows everything else
            _ if self.help_open => false,
            InputAction::MenuNext => {
                self.menu_next();
                false
            }
            InputAction::MenuPrev => {
                self.menu_prev();
                false
            }
            InputAction::MenuApply => {
                let choice = self.selected_choice();
                self.choose(choice)
            }
            InputAction::Choose(choice) => {
                self.select(choice);
                self.choose(choice)
            }
        }
    }
}
