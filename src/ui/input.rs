use crate::ui::app::App;
use crate::ui::blog::{BlogIntent, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key event into intents for the current screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.blog().screen {
        Screen::List => handle_list_key(app, key),
        Screen::Detail { .. } => handle_detail_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up => app.dispatch(BlogIntent::MoveSelectionUp),
        KeyCode::Down => app.dispatch(BlogIntent::MoveSelectionDown),
        KeyCode::Left => app.dispatch(BlogIntent::PrevCategory),
        KeyCode::Right | KeyCode::Tab => app.dispatch(BlogIntent::NextCategory),
        KeyCode::Enter => app.dispatch(BlogIntent::OpenSelected),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // 1..N jump straight to a category, in vocabulary order.
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index == 0 {
                return;
            }
            let category = app.blog().store.categories().get(index - 1).cloned();
            if let Some(category) = category {
                app.dispatch(BlogIntent::SelectCategory { category });
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch(BlogIntent::GoBack),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch(BlogIntent::FocusNextField),
        KeyCode::Enter => app.dispatch(BlogIntent::SubmitComment),
        KeyCode::Backspace => app.dispatch(BlogIntent::DraftBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(BlogIntent::DraftChar { ch });
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArticleStore;
    use crossterm::event::KeyEventState;

    fn make_app() -> App {
        App::new(ArticleStore::seed())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press_ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn q_quits_from_list() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn q_types_into_draft_on_detail() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(matches!(app.blog().screen, Screen::Detail { .. }));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.blog().author_draft, "q");
    }

    #[test]
    fn ctrl_q_quits_from_detail() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press_ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn digit_selects_category_by_index() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.blog().active_category, "Дизайн");
    }

    #[test]
    fn digit_out_of_range_is_ignored() {
        let mut app = make_app();
        let before = app.blog().active_category.clone();
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.blog().active_category, before);
    }

    #[test]
    fn esc_goes_back_from_detail_without_quitting() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.should_quit());
        assert_eq!(app.blog().screen, Screen::List);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
