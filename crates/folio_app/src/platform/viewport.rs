//! Viewport reveal capability.
//!
//! A real UI would back this with platform visibility callbacks. The
//! headless surface simulates cards scrolling into view on a staggered
//! schedule. Observation is one-shot: after the first visibility report
//! the state machine unsubscribes, and cancellation drops any pending
//! report.

use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use folio_core::{CardId, Msg};

pub(crate) type SubscriptionId = u64;

pub(crate) trait Viewport {
    /// Starts watching a card; visibility arrives as `Msg::CardShown`.
    fn observe(&self, card_id: CardId) -> SubscriptionId;
    /// Stops watching; a not-yet-delivered report is dropped.
    fn cancel(&self, card_id: CardId);
}

const REVEAL_STAGGER: Duration = Duration::from_millis(75);

/// Simulated viewport: the n-th observed card becomes visible after
/// `n * 75ms`, like a grid easing in as the page scrolls.
pub(crate) struct StaggeredViewport {
    msg_tx: mpsc::Sender<Msg>,
    inner: Arc<Mutex<ViewportInner>>,
}

#[derive(Default)]
struct ViewportInner {
    next_subscription: SubscriptionId,
    active: HashMap<CardId, SubscriptionId>,
    observed: u32,
}

impl StaggeredViewport {
    pub(crate) fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            msg_tx,
            inner: Arc::new(Mutex::new(ViewportInner::default())),
        }
    }
}

impl Viewport for StaggeredViewport {
    fn observe(&self, card_id: CardId) -> SubscriptionId {
        let (subscription, delay) = {
            let mut inner = self.inner.lock().expect("lock viewport");
            let subscription = inner.next_subscription;
            inner.next_subscription += 1;
            let ordinal = inner.observed;
            inner.observed += 1;
            inner.active.insert(card_id, subscription);
            (subscription, REVEAL_STAGGER * ordinal)
        };

        let msg_tx = self.msg_tx.clone();
        let inner = self.inner.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            let still_active = inner
                .lock()
                .map(|inner| inner.active.get(&card_id) == Some(&subscription))
                .unwrap_or(false);
            if still_active {
                let _ = msg_tx.send(Msg::CardShown { card_id });
            }
        });

        subscription
    }

    fn cancel(&self, card_id: CardId) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.active.remove(&card_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use folio_core::Msg;

    use super::{StaggeredViewport, Viewport};

    #[test]
    fn observed_card_is_reported_shown() {
        let (tx, rx) = mpsc::channel();
        let viewport = StaggeredViewport::new(tx);

        viewport.observe(1);

        let msg = rx.recv_timeout(Duration::from_secs(2)).expect("reveal");
        assert_eq!(msg, Msg::CardShown { card_id: 1 });
    }

    #[test]
    fn cancelled_observation_is_dropped() {
        let (tx, rx) = mpsc::channel();
        let viewport = StaggeredViewport::new(tx);

        // Second card carries a 75ms stagger, leaving room to cancel it.
        viewport.observe(1);
        viewport.observe(2);
        viewport.cancel(2);

        let first = rx.recv_timeout(Duration::from_secs(2)).expect("reveal");
        assert_eq!(first, Msg::CardShown { card_id: 1 });
        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }
}
