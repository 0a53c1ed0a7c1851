use crate::app::App;
use crate::models::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Work the event loop has to do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    FetchJoke,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match app.app_state {
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Results => handle_results_input(app, key),
    }
}

fn handle_quiz_input(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Left | KeyCode::Char('p') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('n') => app.next_question(),
        KeyCode::Up => app.cursor_up(),
        KeyCode::Down => app.cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_highlighted(),
        KeyCode::Char(c @ '1'..='9') => app.select_option(c as usize - '1' as usize),
        KeyCode::Home => app.go_to_question(0),
        KeyCode::End => app.go_to_question(usize::MAX),
        KeyCode::Char('s') => app.submit(),
        KeyCode::Char('j') => return fetch_joke(app),
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        _ => {}
    }
    KeyAction::None
}

fn handle_results_input(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up => app.scroll_review_up(),
        KeyCode::Down => app.scroll_review_down(),
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('b') | KeyCode::Esc => app.back_to_quiz(),
        KeyCode::Char('j') => return fetch_joke(app),
        KeyCode::Char('q') => return KeyAction::Quit,
        _ => {}
    }
    KeyAction::None
}

fn fetch_joke(app: &mut App) -> KeyAction {
    app.begin_joke_fetch();
    KeyAction::FetchJoke
}
