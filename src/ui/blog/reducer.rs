use crate::ui::blog::intent::BlogIntent;
use crate::ui::blog::state::{BlogState, CommentField, Screen};
use crate::ui::mvi::Reducer;

pub struct BlogReducer;

impl Reducer for BlogReducer {
    type State = BlogState;
    type Intent = BlogIntent;

    fn reduce(mut state: BlogState, intent: BlogIntent) -> BlogState {
        match intent {
            BlogIntent::SelectCategory { category } => {
                if state.screen != Screen::List {
                    return state;
                }
                state.active_category = category;
                clamp_selection(&mut state);
                state
            }
            BlogIntent::NextCategory => cycle_category(state, 1),
            BlogIntent::PrevCategory => cycle_category(state, -1),
            BlogIntent::MoveSelectionUp => move_selection(state, -1),
            BlogIntent::MoveSelectionDown => move_selection(state, 1),
            BlogIntent::OpenArticle { article_id } => open_article(state, article_id),
            BlogIntent::OpenSelected => {
                let Some(article_id) = state.selected_article().map(|a| a.id) else {
                    return state;
                };
                open_article(state, article_id)
            }
            BlogIntent::GoBack => {
                // The filter is untouched here: it lives outside `screen`,
                // so the list comes back exactly as it was left.
                if matches!(state.screen, Screen::Detail { .. }) {
                    state.screen = Screen::List;
                }
                state
            }
            BlogIntent::FocusNextField => {
                if matches!(state.screen, Screen::Detail { .. }) {
                    state.comment_focus = match state.comment_focus {
                        CommentField::Author => CommentField::Text,
                        CommentField::Text => CommentField::Author,
                    };
                }
                state
            }
            BlogIntent::DraftChar { ch } => {
                if matches!(state.screen, Screen::Detail { .. }) {
                    match state.comment_focus {
                        CommentField::Author => state.author_draft.push(ch),
                        CommentField::Text => state.text_draft.push(ch),
                    }
                }
                state
            }
            BlogIntent::DraftBackspace => {
                if matches!(state.screen, Screen::Detail { .. }) {
                    match state.comment_focus {
                        CommentField::Author => state.author_draft.pop(),
                        CommentField::Text => state.text_draft.pop(),
                    };
                }
                state
            }
            BlogIntent::SubmitComment => submit_comment(state),
        }
    }
}

/// Transition to the detail screen, guarded on the id existing in the store.
fn open_article(mut state: BlogState, article_id: u32) -> BlogState {
    if state.screen == Screen::List && state.store.get(article_id).is_some() {
        state.screen = Screen::Detail { article_id };
    }
    state
}

/// Commit the drafts as a new comment on the open article.
///
/// Both drafts must be non-empty after trimming; otherwise nothing happens
/// and the drafts keep whatever was typed. On success the trimmed values are
/// stored, the drafts are cleared and focus returns to the author field.
fn submit_comment(mut state: BlogState) -> BlogState {
    let Screen::Detail { article_id } = state.screen else {
        return state;
    };
    let author = state.author_draft.trim().to_string();
    let text = state.text_draft.trim().to_string();
    if author.is_empty() || text.is_empty() {
        return state;
    }
    if state.store.add_comment(article_id, &author, &text) {
        state.author_draft.clear();
        state.text_draft.clear();
        state.comment_focus = CommentField::Author;
    }
    state
}

fn cycle_category(mut state: BlogState, direction: i32) -> BlogState {
    if state.screen != Screen::List {
        return state;
    }
    let categories = state.store.categories();
    if categories.is_empty() {
        return state;
    }
    let len = categories.len();
    let current = categories
        .iter()
        .position(|c| *c == state.active_category)
        .unwrap_or(0);
    let next = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };
    state.active_category = categories[next].clone();
    clamp_selection(&mut state);
    state
}

fn move_selection(mut state: BlogState, direction: i32) -> BlogState {
    if state.screen != Screen::List {
        return state;
    }
    let len = state.visible().len();
    if len == 0 {
        state.list_selection = 0;
        return state;
    }
    let current = state.list_selection.min(len - 1);
    state.list_selection = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };
    state
}

/// Keep the list cursor inside the visible set after a filter change.
fn clamp_selection(state: &mut BlogState) {
    let len = state.visible().len();
    if len == 0 {
        state.list_selection = 0;
    } else if state.list_selection >= len {
        state.list_selection = len - 1;
    }
}
