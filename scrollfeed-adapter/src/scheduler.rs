use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// One minute, the default polling period for refreshing relative timestamps and feeds.
pub const DEFAULT_INTERVAL_MS: u64 = 60_000;

/// Handle returned by [`Scheduler::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(u64)>;

/// An adapter-driven periodic ticker with a subscriber list.
///
/// The scheduler owns no timer. Adapters call [`Scheduler::tick`] with the current time from
/// whatever clock they have (a frame loop, an event loop timer, a test). Each due tick calls
/// every subscriber with the running tick count.
///
/// Late ticks are coalesced: one call fires at most once, however many periods have passed.
pub struct Scheduler {
    interval_ms: u64,
    next_due: Option<u64>,
    ticks: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

impl Scheduler {
    /// Creates a stopped scheduler. A zero interval is bumped to 1ms.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due: None,
            ticks: 0,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// The time at which the next tick fires, if running.
    pub fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    /// Number of ticks fired since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// (Re)starts the period at `now_ms`. Starting a running scheduler restarts its period.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn subscribe(&mut self, f: impl FnMut(u64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Fires subscribers if a period has elapsed. Returns whether it fired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now_ms < due {
            return false;
        }

        let missed = (now_ms - due) / self.interval_ms;
        let next = due.saturating_add(self.interval_ms.saturating_mul(missed.saturating_add(1)));
        self.next_due = Some(next);
        self.ticks = self.ticks.wrapping_add(1);
        atrace!(
            ticks = self.ticks,
            subscribers = self.subscribers.len(),
            "Scheduler::tick"
        );

        let ticks = self.ticks;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(ticks);
        }
        true
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("interval_ms", &self.interval_ms)
            .field("next_due", &self.next_due)
            .field("ticks", &self.ticks)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
