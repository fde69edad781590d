use crate::session::MenuChoice;

use super::AppState;

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MenuChoice::ALL.iter().map(|c| format!("{}. {}", c.key(), c.description())).collect()
    }

    pub fn selected_choice(&self) -> MenuChoice {
        MenuChoice::ALL[self.menu_index % MenuChoice::ALL.len()]
    }

    pub(super) fn select(&mut self, choice: MenuChoice) {
        if let Some(idx) = MenuChoice::ALL.iter().position(|&c| c == choice) {
            self.menu_index = idx;
        }
    }

    // --- Menu operations ---
    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MenuChoice::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        if self.menu_index == 0 {
            self.menu_index = MenuChoice::ALL.len() - 1;
        } else {
            self.menu_index -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::session::{MenuChoice, Session};
    use crate::tui::app::AppState;

    #[test]
    fn menu_wraps_both_ways() {
        let mut app = AppState::new(Session::seeded(2));
        app.menu_prev();
        assert_eq!(app.selected_choice(), MenuChoice::Reshuffle);
        app.menu_next();
        assert_eq!(app.selected_choice(), MenuChoice::Draw);
    }

    #[test]
    fn items_match_line_menu() {
        let app = AppState::new(Session::seeded(2));
        assert_eq!(
            app.menu_items_display(),
            vec![
                "1. Draw a card".to_string(),
                "2. Leave the game".to_string(),
                "3. Reshuffle deck (cards returned to deck)".to_string(),
            ]
        );
    }
}
