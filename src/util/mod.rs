//! Utility functions for common operations.
//!
//! - **Text processing**: Unicode-aware width calculation, truncation, and
//!   word wrapping for terminal rendering.
//! - **Share links**: canonical article URLs for the share action.

mod share;
mod text;

pub use share::share_link;
pub use text::{display_width, truncate_to_width, wrap_text};

/// Maximum allowed search query length, enforced at input time.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 256;
