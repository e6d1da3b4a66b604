//! Virtual-clock timer queue.
//!
//! The scheduler stands in for the host event loop: every deferred step of
//! the interactive layer (typewriter steps, toast dismissal) is a timer
//! registered here and identified by a [`TimerHandle`]. Time only moves when
//! the host advances it, which makes every behavior testable without real
//! sleeps.

use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    /// Handle the timer was scheduled under
    pub handle: TimerHandle,
    /// Payload passed to [`Scheduler::schedule`]
    pub payload: T,
    /// Virtual time at which the timer fired
    pub at: Duration,
}

/// Cooperative timer queue driven by a virtual clock.
///
/// Timers are ordered by due time; timers due at the same instant fire in
/// the order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    /// Keyed by (due time, handle) so iteration order is firing order
    queue: BTreeMap<(Duration, TimerHandle), T>,
}

impl<T> Scheduler<T> {
    /// Creates a scheduler with the clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if `handle` is still scheduled.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.queue.keys().any(|(_, h)| *h == handle)
    }

    /// Schedules `payload` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.queue.insert((self.now + delay, handle), payload);
        handle
    }

    /// Cancels a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self.queue.keys().find(|(_, h)| *h == handle).copied();
        key.is_some_and(|key| self.queue.remove(&key).is_some())
    }

    /// Drops every pending timer.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    /// Pops the earliest timer due at or before `until`.
    ///
    /// The clock moves to the timer's due time, so timers scheduled while
    /// handling the returned one are measured from the moment it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<T>> {
        let (&(at, handle), _) = self.queue.first_key_value()?;
        if at > until {
            return None;
        }
        let payload = self.queue.remove(&(at, handle))?;
        self.now = self.now.max(at);
        Some(Fired {
            handle,
            payload,
            at,
        })
    }

    /// Moves the clock forward to `until`.
    ///
    /// Call after draining [`Scheduler::pop_due`]; the clock never moves
    /// backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
