use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::centered_rect;

const KEYS: [(&str, &str); 6] = [
    ("1 / D", "draw a card"),
    ("2 / Q / Esc", "leave the game"),
    ("3 / R", "reshuffle the deck"),
    ("↑ / ↓", "move menu selection"),
    ("Enter", "apply selected option"),
    ("?", "toggle this help"),
];

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:<12}"), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(*what),
            ])
        })
        .collect();
    let para = Paragraph::new(lines).block(Block::default().title("Keys").borders(Borders::ALL));
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
