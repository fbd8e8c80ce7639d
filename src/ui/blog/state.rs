use crate::model::{Article, ArticleStore, ALL_ARTICLES};
use crate::ui::mvi::UiState;

/// Which of the two comment-form inputs receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentField {
    #[default]
    Author,
    Text,
}

/// Navigation state: the two mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Detail {
        article_id: u32,
    },
}

/// Full snapshot of the blog view: store, filter, navigation and the
/// transient comment-composition drafts.
///
/// The category filter lives outside `screen`, so it survives a
/// list → detail → list round trip untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogState {
    pub store: ArticleStore,
    pub active_category: String,
    pub screen: Screen,
    /// Cursor into the *visible* (filtered) article list.
    pub list_selection: usize,
    pub author_draft: String,
    pub text_draft: String,
    pub comment_focus: CommentField,
}

impl Default for BlogState {
    fn default() -> Self {
        Self::new(ArticleStore::default())
    }
}

impl UiState for BlogState {}

impl BlogState {
    pub fn new(store: ArticleStore) -> Self {
        Self {
            store,
            active_category: ALL_ARTICLES.to_string(),
            screen: Screen::List,
            list_selection: 0,
            author_draft: String::new(),
            text_draft: String::new(),
            comment_focus: CommentField::Author,
        }
    }

    /// Articles visible under the active filter, in store order.
    pub fn visible(&self) -> Vec<&Article> {
        self.store.visible(&self.active_category)
    }

    /// Article shown by the detail screen, if any.
    pub fn open_article(&self) -> Option<&Article> {
        match self.screen {
            Screen::Detail { article_id } => self.store.get(article_id),
            Screen::List => None,
        }
    }

    /// Article under the list cursor, if the visible list is non-empty.
    pub fn selected_article(&self) -> Option<&Article> {
        self.visible().get(self.list_selection).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_list_with_show_all() {
        let state = BlogState::new(ArticleStore::seed());
        assert_eq!(state.screen, Screen::List);
        assert_eq!(state.active_category, ALL_ARTICLES);
        assert!(state.author_draft.is_empty());
        assert!(state.text_draft.is_empty());
    }

    #[test]
    fn open_article_is_none_on_list_screen() {
        let state = BlogState::new(ArticleStore::seed());
        assert!(state.open_article().is_none());
    }

    #[test]
    fn selected_article_follows_cursor() {
        let mut state = BlogState::new(ArticleStore::seed());
        state.list_selection = 1;
        assert_eq!(state.selected_article().map(|a| a.id), Some(2));
    }
}
