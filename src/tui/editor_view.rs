// src/tui/editor_view.rs
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::application::SyncStatus;
use crate::domain::Note;
use crate::tui::Focus;

/// Render the editor pane for the selected note: editable title and body,
/// per-field sync badge, and the read-only creation timestamp.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    note: &Note,
    title_status: SyncStatus,
    body_status: SyncStatus,
    focus: Focus,
) {
    let [title_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = Paragraph::new(note.title.as_str()).block(field_block(
        "Title",
        title_status,
        focus == Focus::Title,
    ));
    frame.render_widget(title, title_area);

    let body = Paragraph::new(note.body.as_str())
        .wrap(Wrap { trim: false })
        .block(field_block("Body", body_status, focus == Focus::Body));
    frame.render_widget(body, body_area);

    let footer = Paragraph::new(format!(
        "Created {}  |  Ctrl+D delete",
        note.created_at.format("%Y-%m-%d %H:%M UTC")
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

fn field_block(name: &str, status: SyncStatus, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(format!("{name}{}", status_suffix(status)))
        .border_style(border_style)
}

fn status_suffix(status: SyncStatus) -> &'static str {
    match status {
        SyncStatus::InSync => "",
        SyncStatus::Pending => " [saving...]",
        SyncStatus::Failed => " [save failed]",
    }
}
