use blogview::model::{ArticleStore, SeedError, ALL_ARTICLES};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn seed_matches_shipped_data() {
    let store = ArticleStore::seed();

    assert_eq!(store.articles().len(), 3);
    assert_eq!(
        store.categories(),
        [
            ALL_ARTICLES.to_string(),
            "Дизайн".to_string(),
            "UX/UI".to_string(),
            "Разработка".to_string(),
            "Маркетинг".to_string(),
        ]
    );

    let first = store.get(1).unwrap();
    assert_eq!(first.title, "Современные тренды в веб-дизайне 2024");
    assert_eq!(first.category, "Дизайн");
    assert_eq!(first.read_time, "5 мин");
    assert_eq!(first.comments.len(), 1);
    assert_eq!(first.comments[0].author, "Анна М.");

    assert!(store.get(2).unwrap().comments.is_empty());
    assert_eq!(store.get(3).unwrap().comments.len(), 2);
}

#[test]
fn visible_preserves_store_order() {
    let store = ArticleStore::from_json(
        r#"{"articles": [
            {"id": 10, "title": "c", "excerpt": "", "category": "X", "date": "", "readTime": ""},
            {"id": 5, "title": "a", "excerpt": "", "category": "Y", "date": "", "readTime": ""},
            {"id": 7, "title": "b", "excerpt": "", "category": "X", "date": "", "readTime": ""}
        ]}"#,
    )
    .unwrap();
    let ids: Vec<u32> = store.visible("X").iter().map(|a| a.id).collect();
    assert_eq!(ids, [10, 7]);
    let all: Vec<u32> = store.visible(ALL_ARTICLES).iter().map(|a| a.id).collect();
    assert_eq!(all, [10, 5, 7]);
}

#[test]
fn from_file_roundtrips() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"articles": [
            {{"id": 1, "title": "t", "excerpt": "e", "category": "X", "date": "d", "readTime": "r"}}
        ]}}"#
    )
    .unwrap();

    let store = ArticleStore::from_file(file.path()).unwrap();
    assert_eq!(store.articles().len(), 1);
    assert_eq!(store.get(1).unwrap().title, "t");
}

#[test]
fn from_file_missing_is_read_error() {
    let err = ArticleStore::from_file(std::path::Path::new("/nonexistent/articles.json"))
        .unwrap_err();
    assert!(matches!(err, SeedError::ReadError { .. }));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = ArticleStore::from_json("{not json").unwrap_err();
    assert!(matches!(err, SeedError::ParseError { .. }));
}
