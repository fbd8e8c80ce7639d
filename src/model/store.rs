use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::model::{Article, Comment, ALL_ARTICLES, JUST_NOW};

/// Built-in seed shipped inside the binary.
const SEED_JSON: &str = include_str!("../../data/articles.json");

/// Errors that can occur when loading an articles file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read articles file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse articles data: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate article id {id}")]
    DuplicateId { id: u32 },
}

/// On-disk shape of an articles file.
#[derive(Debug, serde::Deserialize)]
struct SeedFile {
    /// Category vocabulary in display order, starting with the show-all
    /// sentinel. Derived from the articles when omitted.
    #[serde(default)]
    categories: Vec<String>,
    articles: Vec<Article>,
}

/// Ordered collection of articles plus the category vocabulary used to
/// filter them. Source of truth for every read in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStore {
    articles: Vec<Article>,
    categories: Vec<String>,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            categories: vec![ALL_ARTICLES.to_string()],
        }
    }
}

impl ArticleStore {
    /// Store populated from the built-in seed data.
    pub fn seed() -> Self {
        // The embedded seed is validated by tests; a failure here is a
        // packaging bug, not a runtime condition.
        Self::from_json(SEED_JSON).expect("built-in seed data is valid")
    }

    /// Loads a store from a user-supplied articles file.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parses and validates articles JSON.
    ///
    /// Article ids must be unique across the store. Categories outside the
    /// vocabulary are tolerated (they only make the filter miss them).
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: SeedFile =
            serde_json::from_str(json).map_err(|e| SeedError::ParseError { source: e })?;

        let mut seen = HashSet::new();
        for article in &seed.articles {
            if !seen.insert(article.id) {
                return Err(SeedError::DuplicateId { id: article.id });
            }
        }

        let categories = if seed.categories.is_empty() {
            derive_categories(&seed.articles)
        } else {
            seed.categories
        };

        for article in &seed.articles {
            if !categories.contains(&article.category) {
                warn!(
                    article_id = article.id,
                    category = %article.category,
                    "article category not in vocabulary; filter will not list it"
                );
            }
        }

        Ok(Self {
            articles: seed.articles,
            categories,
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Category vocabulary in display order; index 0 is the show-all sentinel.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn get(&self, article_id: u32) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == article_id)
    }

    /// Articles visible under `filter`, in store order.
    ///
    /// The show-all sentinel yields every article; any other filter yields
    /// exactly the articles whose category matches. Recomputed per render,
    /// never cached.
    pub fn visible(&self, filter: &str) -> Vec<&Article> {
        if filter == ALL_ARTICLES {
            return self.articles.iter().collect();
        }
        self.articles
            .iter()
            .filter(|a| a.category == filter)
            .collect()
    }

    /// Appends a comment to the article with `article_id`.
    ///
    /// Returns `false` without mutating anything when the id is unknown.
    /// Caller is responsible for draft validation; `author` and `text` are
    /// stored as given.
    pub fn add_comment(&mut self, article_id: u32, author: &str, text: &str) -> bool {
        let Some(article) = self.articles.iter_mut().find(|a| a.id == article_id) else {
            return false;
        };
        let id = article.next_comment_id();
        article.comments.push(Comment {
            id,
            author: author.to_string(),
            text: text.to_string(),
            date: JUST_NOW.to_string(),
        });
        true
    }
}

fn derive_categories(articles: &[Article]) -> Vec<String> {
    let mut categories = vec![ALL_ARTICLES.to_string()];
    for article in articles {
        if !categories.contains(&article.category) {
            categories.push(article.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_and_has_three_articles() {
        let store = ArticleStore::seed();
        assert_eq!(store.articles().len(), 3);
        assert_eq!(store.categories()[0], ALL_ARTICLES);
    }

    #[test]
    fn default_store_is_empty_with_sentinel_vocabulary() {
        let store = ArticleStore::default();
        assert!(store.articles().is_empty());
        assert_eq!(store.categories(), [ALL_ARTICLES.to_string()]);
    }

    #[test]
    fn categories_derived_when_omitted() {
        let store = ArticleStore::from_json(
            r#"{"articles": [
                {"id": 1, "title": "a", "excerpt": "", "category": "X", "date": "", "readTime": ""},
                {"id": 2, "title": "b", "excerpt": "", "category": "Y", "date": "", "readTime": ""},
                {"id": 3, "title": "c", "excerpt": "", "category": "X", "date": "", "readTime": ""}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            store.categories(),
            [ALL_ARTICLES.to_string(), "X".to_string(), "Y".to_string()]
        );
    }

    #[test]
    fn duplicate_article_id_is_rejected() {
        let err = ArticleStore::from_json(
            r#"{"articles": [
                {"id": 7, "title": "a", "excerpt": "", "category": "X", "date": "", "readTime": ""},
                {"id": 7, "title": "b", "excerpt": "", "category": "X", "date": "", "readTime": ""}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId { id: 7 }));
    }

    #[test]
    fn add_comment_to_unknown_article_is_noop() {
        let mut store = ArticleStore::seed();
        let before = store.clone();
        assert!(!store.add_comment(999, "Ivan", "hello"));
        assert_eq!(store, before);
    }
}
