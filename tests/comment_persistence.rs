//! Integration tests for the comment store: append, ordering, restart survival.
//!
//! Most tests create their own in-memory SQLite database for isolation. The
//! restart tests use a temporary on-disk database so the store can be closed
//! and reopened, which is the part `:memory:` cannot exercise.

use broadsheet::storage::{Database, DEFAULT_COMMENT_AUTHOR};
use std::path::PathBuf;

async fn test_db() -> Database {
    Database::open(":memory:").await.unwrap()
}

/// A unique on-disk database path under the system temp directory.
struct TempDb {
    path: PathBuf,
}

impl TempDb {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "broadsheet_test_{}_{}.db",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Self { path }
    }

    fn path_str(&self) -> &str {
        self.path.to_str().unwrap()
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        // SQLite journal files may linger next to the database
        for suffix in ["-wal", "-shm", "-journal"] {
            let mut side = self.path.clone().into_os_string();
            side.push(suffix);
            let _ = std::fs::remove_file(side);
        }
    }
}

// ============================================================================
// Append and Read Tests
// ============================================================================

#[tokio::test]
async fn test_append_then_read_returns_comment() {
    let db = test_db().await;

    let posted = db
        .append_comment("1", "Reader", "Great piece")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(posted.author, "Reader");
    assert_eq!(posted.text, "Great piece");

    let comments = db.get_comments("1").await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0], posted);
}

#[tokio::test]
async fn test_comments_preserve_insertion_order() {
    let db = test_db().await;

    for i in 0..5 {
        db.append_comment("1", &format!("Author {i}"), &format!("Comment {i}"))
            .await
            .unwrap();
    }

    let comments = db.get_comments("1").await.unwrap();
    assert_eq!(comments.len(), 5);
    let authors: Vec<&str> = comments.iter().map(|c| c.author.as_str()).collect();
    assert_eq!(
        authors,
        vec!["Author 0", "Author 1", "Author 2", "Author 3", "Author 4"]
    );
}

#[tokio::test]
async fn test_threads_are_isolated_per_article() {
    let db = test_db().await;

    db.append_comment("1", "A", "On story one").await.unwrap();
    db.append_comment("2", "B", "On story two").await.unwrap();
    db.append_comment("1", "C", "Also on story one")
        .await
        .unwrap();

    assert_eq!(db.get_comments("1").await.unwrap().len(), 2);
    assert_eq!(db.get_comments("2").await.unwrap().len(), 1);
    assert!(db.get_comments("3").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_text_is_rejected_without_writing() {
    let db = test_db().await;

    assert!(db.append_comment("1", "Reader", "").await.unwrap().is_none());
    assert!(db
        .append_comment("1", "Reader", "   \t  ")
        .await
        .unwrap()
        .is_none());

    assert!(db.get_comments("1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_author_defaults_to_anon() {
    let db = test_db().await;

    db.append_comment("1", "", "First").await.unwrap();
    db.append_comment("1", "   ", "Second").await.unwrap();

    let comments = db.get_comments("1").await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].author, DEFAULT_COMMENT_AUTHOR);
    assert_eq!(comments[1].author, DEFAULT_COMMENT_AUTHOR);
}

#[tokio::test]
async fn test_text_and_author_are_trimmed() {
    let db = test_db().await;

    let posted = db
        .append_comment("1", "  Reader  ", "  padded text  ")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(posted.author, "Reader");
    assert_eq!(posted.text, "padded text");
}

// ============================================================================
// Restart Survival Tests
// ============================================================================

#[tokio::test]
async fn test_comments_survive_reopen() {
    let tmp = TempDb::new("comments_reopen");

    {
        let db = Database::open(tmp.path_str()).await.unwrap();
        db.append_comment("3", "Alex", "Saving this for later")
            .await
            .unwrap();
        db.append_comment("3", "Sam", "Replying before restart")
            .await
            .unwrap();
        db.close().await;
    }

    let db = Database::open(tmp.path_str()).await.unwrap();
    let comments = db.get_comments("3").await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].author, "Alex");
    assert_eq!(comments[1].author, "Sam");
    assert!(comments[0].timestamp <= comments[1].timestamp);
}

#[tokio::test]
async fn test_preferences_survive_reopen() {
    let tmp = TempDb::new("prefs_reopen");

    {
        let db = Database::open(tmp.path_str()).await.unwrap();
        db.set_preference("theme.variant", "light").await.unwrap();
        db.close().await;
    }

    let db = Database::open(tmp.path_str()).await.unwrap();
    assert_eq!(
        db.get_preference("theme.variant").await.unwrap().as_deref(),
        Some("light")
    );
}
