//! Feed filtering and pagination.
//!
//! The home feed is a derived view of the catalog: filter by category, filter
//! by search query, then window the result with a "load more" page counter.
//! All of it is synchronous and lives in an explicit [`FeedState`] value so
//! the pipeline can be unit tested without a rendering surface.

use std::sync::Arc;

use crate::catalog::{Article, ALL_CATEGORIES};

/// Articles revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Current filter and pagination state for the home feed.
///
/// Invariants:
/// - `page >= 1`, and resets to 1 whenever category or query changes.
/// - `filtered` is `None` only before the first recompute; an empty filter
///   result is `Some` of an empty vec, which is a different thing.
#[derive(Debug, Clone)]
pub struct FeedState {
    category: String,
    query: String,
    page: usize,
    page_size: usize,
    filtered: Option<Arc<Vec<Article>>>,
}

/// Snapshot of the visible window, handed to the renderer.
#[derive(Debug, Clone)]
pub struct FeedView {
    articles: Arc<Vec<Article>>,
    visible: usize,
    total: usize,
}

impl FeedView {
    /// The articles currently revealed, in catalog order.
    pub fn items(&self) -> &[Article] {
        &self.articles[..self.visible]
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Total matches for the active filter, shown next to the load-more
    /// affordance.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether a further "load more" would reveal anything.
    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl FeedState {
    pub fn new(page_size: usize) -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
            page: 1,
            // A zero page size would make the window permanently empty
            page_size: page_size.max(1),
            filtered: None,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Whether the filtered sequence has been computed at least once.
    pub fn is_computed(&self) -> bool {
        self.filtered.is_some()
    }

    /// Select a category and recompute. Passing the "All" sentinel clears the
    /// category filter. Always resets the window to the first page.
    pub fn set_category(&mut self, articles: &[Article], category: &str) {
        self.category = category.to_string();
        self.recompute(articles);
    }

    /// Set the search query and recompute. The query is stored lowercased;
    /// an empty query clears the search filter. Always resets the window to
    /// the first page.
    pub fn set_query(&mut self, articles: &[Article], query: &str) {
        self.query = query.to_lowercase();
        self.recompute(articles);
    }

    /// Advance the window by one page. Returns false (and changes nothing)
    /// when everything is already visible.
    pub fn request_more(&mut self) -> bool {
        if self.visible_count() < self.total() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// The current visible window. Before the first recompute this is an
    /// empty view; callers that care use [`FeedState::is_computed`].
    pub fn view(&self) -> FeedView {
        let articles = self
            .filtered
            .clone()
            .unwrap_or_else(|| Arc::new(Vec::new()));
        let total = articles.len();
        FeedView {
            visible: self.visible_count().min(total),
            total,
            articles,
        }
    }

    fn visible_count(&self) -> usize {
        (self.page * self.page_size).min(self.total())
    }

    fn total(&self) -> usize {
        self.filtered.as_ref().map_or(0, |f| f.len())
    }

    /// Re-run both predicates over the catalog, replace the cached sequence,
    /// and reset pagination. The filter is stable: catalog order is preserved
    /// and nothing is re-sorted.
    fn recompute(&mut self, articles: &[Article]) {
        let result: Vec<Article> = articles
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect();
        self.filtered = Some(Arc::new(result));
        self.page = 1;
    }

    /// AND of the category predicate and the search predicate.
    fn matches(&self, article: &Article) -> bool {
        self.matches_category(article) && self.matches_query(article)
    }

    fn matches_category(&self, article: &Article) -> bool {
        self.category == ALL_CATEGORIES || article.category == self.category
    }

    /// Case-insensitive substring match against title OR excerpt OR category.
    /// An empty query passes everything.
    fn matches_query(&self, article: &Article) -> bool {
        if self.query.is_empty() {
            return true;
        }
        article.title.to_lowercase().contains(&self.query)
            || article.excerpt.to_lowercase().contains(&self.query)
            || article.category.to_lowercase().contains(&self.query)
    }
}
