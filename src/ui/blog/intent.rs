use crate::ui::mvi::Intent;

/// The full user action surface of the blog view.
#[derive(Debug, Clone)]
pub enum BlogIntent {
    /// Replace the active category filter. List screen only.
    SelectCategory { category: String },
    /// Cycle the filter forward through the category vocabulary.
    NextCategory,
    /// Cycle the filter backward through the category vocabulary.
    PrevCategory,
    MoveSelectionUp,
    MoveSelectionDown,
    /// Open the detail screen for an article. No-op for an unknown id.
    OpenArticle { article_id: u32 },
    /// Open the article under the list cursor.
    OpenSelected,
    /// Return from detail to the list, keeping the filter as it was.
    GoBack,
    /// Toggle comment-form focus between author and text.
    FocusNextField,
    /// Append a character to the focused draft field.
    DraftChar { ch: char },
    /// Remove the last character from the focused draft field.
    DraftBackspace,
    /// Commit the drafts as a new comment on the open article.
    /// Silent no-op when either trimmed draft is empty.
    SubmitComment,
}

impl Intent for BlogIntent {}
