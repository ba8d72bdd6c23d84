//! Trending updater event processing.

use crate::app::App;
use crate::trending::TrendingEvent;

/// Apply a trending updater event to application state.
///
/// The updater drives a two-phase cycle: `TransitionBegin` dims the panel,
/// `DataUpdated` swaps in the new figures while still dimmed, and
/// `TransitionEnd` restores normal rendering.
pub fn handle_trending_event(app: &mut App, event: TrendingEvent) {
    match event {
        TrendingEvent::TransitionBegin => {
            app.trending_updating = true;
        }
        TrendingEvent::DataUpdated(topics) => {
            app.trending = topics;
        }
        TrendingEvent::TransitionEnd => {
            app.trending_updating = false;
        }
    }
}
