use crate::model::ArticleStore;
use crate::ui::blog::{BlogIntent, BlogReducer, BlogState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level application container: the blog state plus the quit flag.
///
/// Everything the renderer needs is reachable from here; the renderer itself
/// keeps no state.
pub struct App {
    should_quit: bool,
    blog: BlogState,
}

impl App {
    pub fn new(store: ArticleStore) -> Self {
        Self {
            should_quit: false,
            blog: BlogState::new(store),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn blog(&self) -> &BlogState {
        &self.blog
    }

    /// Dispatch an intent to the blog reducer.
    pub fn dispatch(&mut self, intent: BlogIntent) {
        dispatch_mvi!(self, blog, BlogReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::blog::Screen;

    fn make_app() -> App {
        App::new(ArticleStore::seed())
    }

    #[test]
    fn starts_on_list_screen_without_quit() {
        let app = make_app();
        assert!(!app.should_quit());
        assert_eq!(app.blog().screen, Screen::List);
    }

    #[test]
    fn request_quit_sets_flag() {
        let mut app = make_app();
        app.request_quit();
        assert!(app.should_quit());
    }

    #[test]
    fn dispatch_routes_through_reducer() {
        let mut app = make_app();
        app.dispatch(BlogIntent::OpenArticle { article_id: 2 });
        assert_eq!(app.blog().screen, Screen::Detail { article_id: 2 });
    }
}
