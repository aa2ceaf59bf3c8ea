// src/tui/list_view.rs
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::domain::Note;

/// Render the note list sidebar. Pure: output reflects the given notes and
/// cursor, nothing else.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    notes: &[Note],
    cursor: &mut ListState,
    focused: bool,
) {
    let items: Vec<ListItem> = notes
        .iter()
        .map(|note| ListItem::new(note.display_title().to_string()))
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Notes")
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, cursor);
}
