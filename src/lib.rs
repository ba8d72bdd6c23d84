//! broadsheet — a terminal news reader.
//!
//! A front page of curated stories with category and search filtering,
//! paged "load more" reveal, a live trending sidebar, and per-article
//! comment threads persisted in a local SQLite store.

pub mod app;
pub mod catalog;
pub mod config;
pub mod feed;
pub mod keybindings;
pub mod storage;
pub mod theme;
pub mod trending;
pub mod ui;
pub mod util;
