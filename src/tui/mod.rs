// src/tui/mod.rs
//
// The ratatui-specific layer: terminal I/O, rendering, and translation of
// keyboard events into controller operations. This is the only module that
// knows about ratatui and crossterm.

pub mod editor_view;
pub mod list_view;

use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Block, Borders, ListState, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use tracing::info;

use crate::application::{NoteController, StoreReply};
use crate::constants::EVENT_POLL_INTERVAL_MS;
use crate::domain::NoteField;

/// Which pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Title,
    Body,
}

struct TuiState {
    focus: Focus,
    list_cursor: ListState,
    should_quit: bool,
}

impl TuiState {
    fn new() -> Self {
        Self {
            focus: Focus::List,
            list_cursor: ListState::default(),
            should_quit: false,
        }
    }
}

/// Run the interactive session until the user quits.
pub fn run(controller: NoteController, replies: Receiver<StoreReply>) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, controller, &replies);
    ratatui::restore();
    result
}

/// Single-threaded loop: drain store replies, redraw, then wait briefly for
/// a key. All controller state is touched from this thread only.
fn event_loop(
    terminal: &mut DefaultTerminal,
    mut controller: NoteController,
    replies: &Receiver<StoreReply>,
) -> Result<()> {
    info!("Entering event loop");
    let mut state = TuiState::new();

    while !state.should_quit {
        while let Ok(reply) = replies.try_recv() {
            controller.handle_reply(reply);
        }
        clamp_cursor(&mut state.list_cursor, controller.notes().len());

        terminal.draw(|frame| draw(frame, &controller, &mut state))?;

        if event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, &mut controller, &mut state);
                }
            }
        }
    }

    info!("Leaving event loop");
    Ok(())
}

/// Keep the list cursor inside the current list, which may have shrunk or
/// emptied on a refresh.
fn clamp_cursor(cursor: &mut ListState, len: usize) {
    if len == 0 {
        cursor.select(None);
        return;
    }
    match cursor.selected() {
        None => cursor.select(Some(0)),
        Some(i) if i >= len => cursor.select(Some(len - 1)),
        Some(_) => {}
    }
}

fn draw(frame: &mut Frame, controller: &NoteController, state: &mut TuiState) {
    let [sidebar, main] =
        Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
            .areas(frame.area());

    list_view::render(
        frame,
        sidebar,
        controller.notes(),
        &mut state.list_cursor,
        state.focus == Focus::List,
    );

    match controller.selected() {
        Some(note) => editor_view::render(
            frame,
            main,
            note,
            controller.sync_status(note.id, NoteField::Title),
            controller.sync_status(note.id, NoteField::Body),
            state.focus,
        ),
        None => {
            let help =
                Paragraph::new("Ctrl+N: new note   Enter: open   Ctrl+Q: quit")
                    .block(Block::default().borders(Borders::ALL));
            frame.render_widget(help, main);
        }
    }
}

fn handle_key(key: KeyEvent, controller: &mut NoteController, state: &mut TuiState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') => state.should_quit = true,
            KeyCode::Char('n') => controller.create_note(),
            KeyCode::Char('d') => {
                controller.delete_selected();
                state.focus = Focus::List;
            }
            _ => {}
        }
        return;
    }

    match state.focus {
        Focus::List => handle_list_key(key, controller, state),
        Focus::Title => handle_title_key(key, controller, state),
        Focus::Body => handle_body_key(key, controller, state),
    }
}

fn handle_list_key(key: KeyEvent, controller: &mut NoteController, state: &mut TuiState) {
    match key.code {
        KeyCode::Up => move_cursor(&mut state.list_cursor, controller.notes().len(), -1),
        KeyCode::Down => move_cursor(&mut state.list_cursor, controller.notes().len(), 1),
        KeyCode::Enter => {
            if let Some(note) = state
                .list_cursor
                .selected()
                .and_then(|i| controller.notes().get(i))
            {
                controller.select_note(note.id);
                state.focus = Focus::Title;
            }
        }
        KeyCode::Tab => {
            if controller.selected().is_some() {
                state.focus = Focus::Title;
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        _ => {}
    }
}

fn handle_title_key(key: KeyEvent, controller: &mut NoteController, state: &mut TuiState) {
    match key.code {
        KeyCode::Tab | KeyCode::Enter => state.focus = Focus::Body,
        KeyCode::Esc => state.focus = Focus::List,
        KeyCode::Backspace => {
            if let Some(note) = controller.selected() {
                let mut title = note.title.clone();
                title.pop();
                controller.update_title(title);
            }
        }
        KeyCode::Char(c) => {
            if let Some(note) = controller.selected() {
                let mut title = note.title.clone();
                title.push(c);
                controller.update_title(title);
            }
        }
        _ => {}
    }
}

fn handle_body_key(key: KeyEvent, controller: &mut NoteController, state: &mut TuiState) {
    match key.code {
        KeyCode::Tab => state.focus = Focus::List,
        KeyCode::Esc => state.focus = Focus::List,
        KeyCode::Enter => edit_body(controller, |body| body.push('\n')),
        KeyCode::Backspace => edit_body(controller, |body| {
            body.pop();
        }),
        KeyCode::Char(c) => edit_body(controller, |body| body.push(c)),
        _ => {}
    }
}

/// One change event per keystroke, forwarded verbatim to the controller.
fn edit_body<F: FnOnce(&mut String)>(controller: &mut NoteController, edit: F) {
    if let Some(note) = controller.selected() {
        let mut body = note.body.clone();
        edit(&mut body);
        controller.update_body(body);
    }
}

fn move_cursor(cursor: &mut ListState, len: usize, delta: i64) {
    if len == 0 {
        return;
    }
    let current = cursor.selected().unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, len as i64 - 1);
    cursor.select(Some(next as usize));
}
