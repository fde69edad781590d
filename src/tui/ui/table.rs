use crate::cards::Card;
use crate::session::Outcome;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

fn card_span(card: Card) -> Span<'static> {
    let color = if card.suit().is_red() { Color::Red } else { Color::White };
    Span::styled(card.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(4),    // hand
            Constraint::Length(5), // menu
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let deck = app.session.deck();
    let header = Paragraph::new(Line::from(format!(
        "Cards remaining in deck: {}   In hand: {}",
        deck.cards_remaining(),
        app.session.hand().len()
    )))
    .block(Block::default().title("card-deck").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let hand = app.session.hand();
    let hand_line = if hand.is_empty() {
        Line::from(Span::styled("None", Style::default().add_modifier(Modifier::DIM)))
    } else {
        let mut spans = Vec::with_capacity(hand.len() * 2);
        for &card in hand {
            spans.push(card_span(card));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };
    let hand_para = Paragraph::new(hand_line)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Your cards").borders(Borders::ALL));
    f.render_widget(hand_para, chunks[1]);

    let menu_lines: Vec<Line> = app
        .menu_items_display()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.menu_index {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(item, style))
        })
        .collect();
    let menu =
        Paragraph::new(menu_lines).block(Block::default().title("Options").borders(Borders::ALL));
    f.render_widget(menu, chunks[2]);

    let status = match app.last_outcome() {
        Some(Outcome::Drew(card)) => Line::from(vec![Span::raw("You drew: "), card_span(card)]),
        Some(empty @ Outcome::DeckEmpty) => {
            Line::from(Span::styled(empty.to_string(), Style::default().fg(Color::Red)))
        }
        Some(other) => Line::from(other.to_string()),
        None => Line::from(""),
    };
    let hints = Line::from(Span::styled(
        "[1/D] Draw  [2/Q] Leave  [3/R] Reshuffle  [↑/↓] Move  [Enter] Apply  [?] Help",
        Style::default().add_modifier(Modifier::DIM),
    ));
    let status_para =
        Paragraph::new(vec![status, hints]).block(Block::default().borders(Borders::ALL));
    f.render_widget(status_para, chunks[3]);
}
