mod comments;
mod preferences;
mod schema;
mod types;

pub use comments::{Comment, DEFAULT_COMMENT_AUTHOR};
pub use schema::Database;
pub use types::DatabaseError;
