//! In-memory article/comment model and the seed data that populates it.

mod article;
mod store;

pub use article::{Article, Comment};
pub use store::{ArticleStore, SeedError};

/// Filter sentinel meaning "no filter / show all articles".
pub const ALL_ARTICLES: &str = "Все статьи";

/// Date label attached to comments created during this session.
pub const JUST_NOW: &str = "Только что";
