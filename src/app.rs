use crate::catalog::{Article, Catalog, ALL_CATEGORIES};
use crate::config::Config;
use crate::feed::FeedState;
use crate::keybindings::{Context, KeybindingRegistry};
use crate::storage::{Comment, Database};
use crate::theme::{StyleMap, ThemeVariant};
use crate::trending::TrendingTopic;
use crate::util::share_link;
use anyhow::Result;
use std::borrow::Cow;
use std::time::Duration;
use tokio::time::Instant;

/// Maximum scroll offset for the article view (ratatui u16 limit).
pub const MAX_SCROLL: usize = u16::MAX as usize;

/// How long typed search input settles before the filter is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

// ============================================================================
// View and Focus Enums
// ============================================================================

/// Current view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,    // Hero, filters, feed cards, trending panel
    Article, // Full-screen story with comments
}

/// Which panel has focus in Home view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Feed,
    Categories,
    Trending,
}

// ============================================================================
// Comment Compose Form
// ============================================================================

/// Which input of the compose form is receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Author,
    Text,
}

/// In-progress comment form state. Exists only while the form is open.
#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    pub author: String,
    pub text: String,
    pub field: ComposeField,
}

impl Default for ComposeField {
    fn default() -> Self {
        Self::Author
    }
}

impl ComposeState {
    /// Move to the other input field.
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            ComposeField::Author => ComposeField::Text,
            ComposeField::Text => ComposeField::Author,
        };
    }

    /// Mutable reference to whichever field is active.
    pub fn active_input(&mut self) -> &mut String {
        match self.field {
            ComposeField::Author => &mut self.author,
            ComposeField::Text => &mut self.text,
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

pub struct App {
    pub db: Database,
    pub config: Config,
    pub catalog: Catalog,
    pub feed: FeedState,
    pub keybindings: KeybindingRegistry,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    // Navigation
    pub view: View,
    pub focus: Focus,
    pub selected_card: usize,
    pub selected_category: usize,
    pub categories: Vec<String>,
    pub scroll_offset: usize,

    // Open article
    pub open_article: Option<String>,
    pub comments: Vec<Comment>,
    pub compose: Option<ComposeState>,

    // Search
    pub search_mode: bool,
    pub search_input: String,
    /// Debounce timer for search-as-you-type
    pub search_debounce: Option<Instant>,
    /// Query waiting for the debounce window to close
    pub pending_search: Option<String>,

    // Trending panel
    pub trending: Vec<TrendingTopic>,
    pub trending_updating: bool,

    // Status message with expiry — Cow avoids allocation for static literals
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    pub show_help: bool,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(db: Database, config: Config, theme_variant: ThemeVariant) -> Self {
        let catalog = Catalog::builtin();
        let categories = catalog.categories();
        let trending = catalog.trending_seed();

        let mut feed = FeedState::new(config.page_size);
        feed.set_category(catalog.articles(), ALL_CATEGORIES);

        let mut keybindings = KeybindingRegistry::new();
        for warning in keybindings.apply_overrides(&config.keybindings) {
            tracing::warn!("{}", warning);
        }

        let theme = StyleMap::from_palette(&theme_variant.palette());

        Self {
            db,
            config,
            catalog,
            feed,
            keybindings,
            theme_variant,
            theme,
            view: View::Home,
            focus: Focus::Feed,
            selected_card: 0,
            selected_category: 0,
            categories,
            scroll_offset: 0,
            open_article: None,
            comments: Vec::new(),
            compose: None,
            search_mode: false,
            search_input: String::new(),
            search_debounce: None,
            pending_search: None,
            trending,
            trending_updating: false,
            status_message: None,
            show_help: false,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Resolve a theme role to its concrete style.
    pub fn style(&self, role: &str) -> ratatui::style::Style {
        self.theme.resolve(role)
    }

    /// The keybinding dispatch context for the current state.
    pub fn context(&self) -> Context {
        if self.compose.is_some() {
            Context::Compose
        } else if self.search_mode {
            Context::Search
        } else {
            match self.view {
                View::Home => Context::Home,
                View::Article => Context::Article,
            }
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Length of the list the focused panel navigates over.
    fn focus_list_len(&self) -> usize {
        match self.focus {
            Focus::Feed => self.feed.view().visible(),
            Focus::Categories => self.categories.len(),
            Focus::Trending => self.trending.len(),
        }
    }

    pub fn nav_down(&mut self) {
        let len = self.focus_list_len();
        match self.focus {
            Focus::Feed => {
                if self.selected_card + 1 < len {
                    self.selected_card += 1;
                }
            }
            Focus::Categories => {
                if self.selected_category + 1 < len {
                    self.selected_category += 1;
                    self.apply_selected_category();
                }
            }
            Focus::Trending => {}
        }
    }

    pub fn nav_up(&mut self) {
        match self.focus {
            Focus::Feed => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            Focus::Categories => {
                if self.selected_category > 0 {
                    self.selected_category -= 1;
                    self.apply_selected_category();
                }
            }
            Focus::Trending => {}
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Feed => Focus::Categories,
            Focus::Categories => Focus::Trending,
            Focus::Trending => Focus::Feed,
        };
    }

    // ========================================================================
    // Category Filter
    // ========================================================================

    pub fn next_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.selected_category = (self.selected_category + 1) % self.categories.len();
        self.apply_selected_category();
    }

    pub fn prev_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.selected_category = self
            .selected_category
            .checked_sub(1)
            .unwrap_or(self.categories.len() - 1);
        self.apply_selected_category();
    }

    fn apply_selected_category(&mut self) {
        let category = self.categories[self.selected_category].clone();
        self.feed.set_category(self.catalog.articles(), &category);
        self.selected_card = 0;
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn enter_search(&mut self) {
        self.search_mode = true;
    }

    /// Leave input mode keeping the current query applied.
    pub fn commit_search(&mut self) {
        self.search_mode = false;
        // Apply any still-debouncing input immediately
        if let Some(query) = self.pending_search.take() {
            self.apply_search(&query);
        }
        self.search_debounce = None;
    }

    /// Leave input mode and clear the query entirely.
    pub fn exit_search(&mut self) {
        self.search_mode = false;
        self.search_input.clear();
        self.pending_search = None;
        self.search_debounce = None;
        self.apply_search("");
    }

    /// Record typed input and restart the debounce window.
    pub fn queue_search(&mut self) {
        self.pending_search = Some(self.search_input.clone());
        self.search_debounce = Some(Instant::now());
    }

    /// Apply the pending query if the debounce window has closed.
    /// Returns true if the filter changed.
    pub fn flush_due_search(&mut self) -> bool {
        let due = self
            .search_debounce
            .is_some_and(|started| started.elapsed() >= SEARCH_DEBOUNCE);
        if !due {
            return false;
        }
        self.search_debounce = None;
        if let Some(query) = self.pending_search.take() {
            self.apply_search(&query);
            return true;
        }
        false
    }

    fn apply_search(&mut self, query: &str) {
        self.feed.set_query(self.catalog.articles(), query);
        self.selected_card = 0;
    }

    // ========================================================================
    // Feed Window
    // ========================================================================

    /// Reveal the next page of cards. Sets a status when nothing is left.
    pub fn load_more(&mut self) {
        if !self.feed.request_more() {
            self.set_status("No more stories");
        }
    }

    /// The article under the cursor in the feed panel, if any.
    pub fn selected_article(&self) -> Option<Article> {
        let view = self.feed.view();
        view.items().get(self.selected_card).cloned()
    }

    // ========================================================================
    // Article View
    // ========================================================================

    /// Open an article by id and load its comments from the store.
    ///
    /// Unknown ids still switch to the article view, which renders a
    /// not-found message there.
    pub async fn open_article(&mut self, id: &str) -> Result<()> {
        self.comments = self.db.get_comments(id).await?;
        self.open_article = Some(id.to_string());
        self.view = View::Article;
        self.scroll_offset = 0;
        self.compose = None;
        Ok(())
    }

    /// Open whatever the feed cursor points at.
    pub async fn open_selected(&mut self) -> Result<()> {
        if let Some(article) = self.selected_article() {
            self.open_article(&article.id).await?;
        }
        Ok(())
    }

    pub fn close_article(&mut self) {
        self.view = View::Home;
        self.open_article = None;
        self.comments.clear();
        self.compose = None;
        self.scroll_offset = 0;
    }

    // ========================================================================
    // Comments
    // ========================================================================

    pub fn start_compose(&mut self) {
        if self.open_article.is_some() {
            self.compose = Some(ComposeState::default());
        }
    }

    pub fn cancel_compose(&mut self) {
        self.compose = None;
    }

    /// Submit the compose form. Blank text keeps the form open with a status
    /// hint; success persists, reloads the thread, and closes the form.
    pub async fn submit_comment(&mut self) -> Result<()> {
        let Some(id) = self.open_article.clone() else {
            return Ok(());
        };
        let Some(form) = self.compose.clone() else {
            return Ok(());
        };

        match self.db.append_comment(&id, &form.author, &form.text).await? {
            Some(_) => {
                self.comments = self.db.get_comments(&id).await?;
                self.compose = None;
                self.set_status("Comment posted");
            }
            None => {
                self.set_status("Comment text is empty");
            }
        }
        Ok(())
    }

    // ========================================================================
    // Share
    // ========================================================================

    /// Put a share link for the current story into the status bar.
    ///
    /// In the article view this is the open story; on Home it is the card
    /// under the cursor.
    pub fn share_current(&mut self) {
        let id = match self.view {
            View::Article => self.open_article.clone(),
            View::Home => self.selected_article().map(|a| a.id),
        };
        match id {
            Some(id) => {
                let link = share_link(&id);
                self.set_status(format!("Share: {}", link));
            }
            None => self.set_status("Nothing to share"),
        }
    }

    // ========================================================================
    // Scrolling (article view)
    // ========================================================================

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(MAX_SCROLL);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Cycle to the next theme variant. Returns the new variant's name for
    /// status display; persisting the preference is the caller's job.
    pub fn cycle_theme(&mut self) -> &'static str {
        self.set_theme(self.theme_variant.next());
        self.theme_variant.name()
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
    }

    // ========================================================================
    // Status Messages
    // ========================================================================

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds)
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
