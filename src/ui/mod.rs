//! Terminal User Interface module.
//!
//! This module provides the TUI for the news reader, including:
//! - Main event loop (`run`)
//! - Input handling for home, article, search, and compose modes
//! - Rendering for the feed, trending panel, and article views
//! - Trending updater event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Trending updater event processing
//! - `render` - View rendering dispatch
//! - `home` - Hero, filter bar, and feed card widgets
//! - `trending_panel` - Trending topics widget
//! - `article` - Full article view with comments
//! - `status` - Status bar widget
//! - `help` - Help overlay

mod article;
mod events;
mod help;
mod home;
mod input;
mod loop_runner;
mod render;
mod status;
mod trending_panel;

// Re-export the public API
pub use loop_runner::{run, Action};
