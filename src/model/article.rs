use serde::Deserialize;

/// A reader comment attached to one article.
///
/// `id` is unique within the owning article only, never across articles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub text: String,
    /// Display string, not a parsed timestamp ("29 окт", "Только что").
    pub date: String,
}

/// One blog post. Metadata is immutable after seed load; only `comments`
/// grows, via [`crate::model::ArticleStore::add_comment`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Article {
    /// Next comment id for this article: one past the largest id in use.
    ///
    /// Monotonic within the article regardless of sequence length, so ids
    /// stay unique even if a removal operation is ever added.
    pub fn next_comment_id(&self) -> u32 {
        self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }
}
