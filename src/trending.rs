//! Trending topics and their periodic mock refresh.
//!
//! A background task owns the topic list and drifts the view counters on a
//! fixed interval. Each tick is bracketed by transition events so the UI can
//! fade the panel around the mutation; the UI only ever receives complete
//! snapshots, never a half-updated list.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::mpsc;

/// Floor for the drifting view counter, in millions.
const MIN_VIEWS: f64 = 0.1;

/// How far a counter moves per tick, in millions.
const DRIFT_STEP: f64 = 0.1;

/// Chance per tick that the whole list is reshuffled.
const SHUFFLE_PROBABILITY: f64 = 0.2;

/// A ranked display item in the trending sidebar. `views` is a formatted
/// magnitude string ("1.2M"); it is parsed back to a float on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingTopic {
    pub id: i64,
    pub title: String,
    pub views: String,
}

impl TrendingTopic {
    pub fn new(id: i64, title: &str, views: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            views: views.to_string(),
        }
    }
}

/// Events emitted by the updater task, in strict begin → update → end order.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendingEvent {
    /// The panel should start its fade-out.
    TransitionBegin,
    /// The new full topic list, ready to render.
    DataUpdated(Vec<TrendingTopic>),
    /// The panel should fade back in.
    TransitionEnd,
}

/// Parse the leading decimal magnitude of a formatted views string.
/// `"1.2M"` → 1.2, `"900K"` → 900.0. Anything without a numeric prefix
/// parses as 0.0 and gets clamped up on the next drift.
fn parse_views(views: &str) -> f64 {
    let numeric: &str = views
        .trim_start()
        .split(|c: char| !c.is_ascii_digit() && c != '.')
        .next()
        .unwrap_or("");
    numeric.parse().unwrap_or(0.0)
}

fn format_views(value: f64) -> String {
    format!("{value:.1}M")
}

/// One refresh tick: drift every counter by ±0.1 (clamped at 0.1) and, with
/// probability 0.2, reshuffle the whole list. The two effects are independent.
/// The original unit suffix is discarded; everything reformats as "M".
pub fn advance_tick<R: Rng + ?Sized>(topics: &mut [TrendingTopic], rng: &mut R) {
    for topic in topics.iter_mut() {
        let mut value = parse_views(&topic.views);
        if rng.random_bool(0.5) {
            value += DRIFT_STEP;
        } else {
            value = (value - DRIFT_STEP).max(MIN_VIEWS);
        }
        topic.views = format_views(value);
    }

    if rng.random::<f64>() > 1.0 - SHUFFLE_PROBABILITY {
        topics.shuffle(rng);
    }
}

/// Run the periodic updater until the receiver side goes away.
///
/// The task owns `topics`; every tick emits `TransitionBegin`, waits out the
/// fade delay, mutates, then emits `DataUpdated` with a fresh snapshot
/// followed by `TransitionEnd`. `MissedTickBehavior::Delay` guarantees a late
/// tick is postponed rather than run concurrently with the previous one, so
/// the event ordering never interleaves across ticks.
pub async fn run_updater(
    mut topics: Vec<TrendingTopic>,
    period: Duration,
    fade: Duration,
    tx: mpsc::Sender<TrendingEvent>,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first interval tick fires immediately; the seed list is already
    // on screen, so skip it.
    interval.tick().await;

    loop {
        interval.tick().await;

        if tx.send(TrendingEvent::TransitionBegin).await.is_err() {
            return;
        }
        tokio::time::sleep(fade).await;

        {
            let mut rng = rand::rng();
            advance_tick(&mut topics, &mut rng);
        }
        tracing::debug!(topics = topics.len(), "Trending data refreshed");

        if tx.send(TrendingEvent::DataUpdated(topics.clone())).await.is_err() {
            return;
        }
        if tx.send(TrendingEvent::TransitionEnd).await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seed_topics() -> Vec<TrendingTopic> {
        vec![
            TrendingTopic::new(1, "Global Market Rally", "1.2M"),
            TrendingTopic::new(2, "New EV Regulations", "900K"),
            TrendingTopic::new(3, "Championship Finals", "0.1M"),
        ]
    }

    #[test]
    fn parse_handles_units_and_garbage() {
        assert_eq!(parse_views("1.2M"), 1.2);
        assert_eq!(parse_views("900K"), 900.0);
        assert_eq!(parse_views("0.1M"), 0.1);
        assert_eq!(parse_views("n/a"), 0.0);
    }

    #[test]
    fn drift_moves_each_counter_by_exactly_one_step() {
        let mut topics = seed_topics();
        let before: Vec<f64> = topics.iter().map(|t| parse_views(&t.views)).collect();

        let mut rng = StdRng::seed_from_u64(7);
        advance_tick(&mut topics, &mut rng);

        for topic in &topics {
            let prior = topics_before_value(&before, topic.id);
            let now = parse_views(&topic.views);
            let expected_up = (prior + DRIFT_STEP) * 10.0;
            let expected_down = (prior - DRIFT_STEP).max(MIN_VIEWS) * 10.0;
            let scaled = now * 10.0;
            assert!(
                (scaled - expected_up).abs() < 1e-6 || (scaled - expected_down).abs() < 1e-6,
                "topic {} moved from {prior} to {now}",
                topic.id
            );
        }
    }

    fn topics_before_value(before: &[f64], id: i64) -> f64 {
        // Seed order is by id, so index by id - 1 even after a shuffle.
        before[(id - 1) as usize]
    }

    #[test]
    fn drift_clamps_at_floor() {
        let mut topics = vec![TrendingTopic::new(1, "Flatline", "0.1M")];
        // Run enough ticks that a decrease is certain to have occurred.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            advance_tick(&mut topics, &mut rng);
            assert!(parse_views(&topics[0].views) >= MIN_VIEWS - 1e-9);
        }
    }

    #[test]
    fn views_always_reformat_with_one_decimal_and_m_suffix() {
        let mut topics = seed_topics();
        let mut rng = StdRng::seed_from_u64(3);
        advance_tick(&mut topics, &mut rng);

        for topic in &topics {
            assert!(topic.views.ends_with('M'), "got {}", topic.views);
            let numeric = &topic.views[..topic.views.len() - 1];
            let decimals = numeric.split('.').nth(1).unwrap_or("");
            assert_eq!(decimals.len(), 1, "got {}", topic.views);
        }
    }

    #[test]
    fn shuffle_preserves_the_set_of_topics() {
        let mut topics = seed_topics();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            advance_tick(&mut topics, &mut rng);
        }
        let mut ids: Vec<i64> = topics.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn updater_emits_begin_update_end_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let handle = tokio::spawn(run_updater(
            seed_topics(),
            Duration::from_secs(5),
            Duration::from_millis(300),
            tx,
        ));

        // Nothing arrives before the first period elapses.
        tokio::time::advance(Duration::from_millis(4999)).await;
        assert!(rx.try_recv().is_err());

        // Cross the period boundary plus the fade delay.
        tokio::time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.recv().await, Some(TrendingEvent::TransitionBegin));

        tokio::time::advance(Duration::from_millis(300)).await;
        match rx.recv().await {
            Some(TrendingEvent::DataUpdated(topics)) => assert_eq!(topics.len(), 3),
            other => panic!("expected DataUpdated, got {other:?}"),
        }
        assert_eq!(rx.recv().await, Some(TrendingEvent::TransitionEnd));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn updater_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(run_updater(
            seed_topics(),
            Duration::from_secs(5),
            Duration::from_millis(300),
            tx,
        ));
        drop(rx);

        tokio::time::advance(Duration::from_secs(6)).await;
        tokio::task::yield_now().await;
        // The task returns after its first failed send.
        tokio::time::advance(Duration::from_secs(60)).await;
        let joined = handle.await;
        assert!(joined.is_ok());
    }
}
