use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::schema::Database;

/// Author name recorded when the submitted author field is blank.
pub const DEFAULT_COMMENT_AUTHOR: &str = "Anon";

/// Key prefix for per-article comment sequences. Concatenated with the
/// article id this yields a deterministic, collision-free key per article.
const COMMENT_KEY_PREFIX: &str = "comments.";

/// A single reader comment on an article.
///
/// Comments are append-only: once written they are never edited or deleted
/// by this application. `timestamp` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub timestamp: i64,
}

fn comment_key(article_id: &str) -> String {
    format!("{COMMENT_KEY_PREFIX}{article_id}")
}

impl Database {
    // ========================================================================
    // Comment Store Operations
    // ========================================================================

    /// Read the full comment sequence for an article, oldest first.
    ///
    /// An absent row yields an empty sequence. A row whose JSON fails to
    /// parse also yields an empty sequence — corrupt data is logged and
    /// discarded, never propagated as an error.
    pub async fn get_comments(&self, article_id: &str) -> Result<Vec<Comment>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM comment_store WHERE key = ?")
                .bind(comment_key(article_id))
                .fetch_optional(&self.pool)
                .await?;

        let Some((raw,)) = row else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(comments) => Ok(comments),
            Err(e) => {
                tracing::warn!(
                    article_id = %article_id,
                    error = %e,
                    "Malformed comment data in store, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Append a comment to an article's sequence and persist it.
    ///
    /// The only validation is non-empty text after trimming: blank text is a
    /// silent no-op returning `Ok(None)`, with nothing persisted. A blank
    /// author becomes [`DEFAULT_COMMENT_AUTHOR`]. The full updated sequence
    /// is written back in a single UPSERT, so a reader sees either the old
    /// list or the new list, never a partial write.
    ///
    /// Returns the stored comment (with defaulted author and stamped
    /// timestamp) when one was appended.
    pub async fn append_comment(
        &self,
        article_id: &str,
        author: &str,
        text: &str,
    ) -> Result<Option<Comment>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let author = author.trim();
        let comment = Comment {
            author: if author.is_empty() {
                DEFAULT_COMMENT_AUTHOR.to_string()
            } else {
                author.to_string()
            },
            text: text.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };

        let mut comments = self.get_comments(article_id).await?;
        comments.push(comment.clone());
        let value = serde_json::to_string(&comments)?;

        sqlx::query(
            r#"
            INSERT INTO comment_store (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        )
        .bind(comment_key(article_id))
        .bind(&value)
        .execute(&self.pool)
        .await?;

        tracing::debug!(article_id = %article_id, total = comments.len(), "Comment appended");
        Ok(Some(comment))
    }
}
