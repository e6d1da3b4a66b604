//! Short-lived notification toast.

use std::time::Duration;

use super::layer::Task;
use super::scheduler::{Scheduler, TimerHandle};

/// How long a toast stays up.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Message shown when the visitor asks for a resume.
pub const RESUME_REQUEST_MESSAGE: &str = "For resume, please contact me.";

/// At most one message, dismissed by its own timer.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: Option<String>,
    timer: Option<TimerHandle>,
}

impl Toast {
    /// Creates an empty toast.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: None,
            timer: None,
        }
    }

    /// Message currently displayed.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handle of the pending dismissal, if a message is up.
    pub const fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Shows `message`, replacing any current one and restarting the
    /// dismissal timer. Empty messages are ignored.
    pub fn show(&mut self, message: impl Into<String>, scheduler: &mut Scheduler<Task>) -> bool {
        let message = message.into();
        if message.is_empty() {
            return false;
        }
        self.cancel(scheduler);
        self.timer = Some(scheduler.schedule(DISMISS_AFTER, Task::DismissToast));
        self.message = Some(message);
        true
    }

    /// Handles a fired dismissal timer. Stale handles are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            return false;
        }
        self.timer = None;
        self.message = None;
        true
    }

    /// Drops the message and its pending timer.
    pub fn cancel(&mut self, scheduler: &mut Scheduler<Task>) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Fires due timers into the toast, returning how many dismissals ran.
    fn run_until(toast: &mut Toast, sched: &mut Scheduler<Task>, until: Duration) -> usize {
        let mut dismissed = 0;
        while let Some(fired) = sched.pop_due(until) {
            if toast.on_timer(fired.handle) {
                dismissed += 1;
            }
        }
        sched.advance_to(until);
        dismissed
    }

    #[test]
    fn test_visible_until_deadline() {
        let mut sched = Scheduler::new();
        let mut toast = Toast::new();
        sched.advance_to(ms(1000));
        assert!(toast.show("hello", &mut sched));

        run_until(&mut toast, &mut sched, ms(3999));
        assert_eq!(toast.message(), Some("hello"));

        assert_eq!(run_until(&mut toast, &mut sched, ms(4000)), 1);
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn test_last_message_wins_single_dismissal() {
        let mut sched = Scheduler::new();
        let mut toast = Toast::new();
        toast.show("X", &mut sched);
        run_until(&mut toast, &mut sched, ms(1500));
        toast.show("Y", &mut sched);

        assert_eq!(sched.pending(), 1, "old timer was cancelled");
        assert_eq!(run_until(&mut toast, &mut sched, ms(4000)), 0);
        assert_eq!(toast.message(), Some("Y"));
        assert_eq!(run_until(&mut toast, &mut sched, ms(4500)), 1);
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn test_empty_message_ignored() {
        let mut sched = Scheduler::new();
        let mut toast = Toast::new();
        assert!(!toast.show("", &mut sched));
        assert_eq!(toast.message(), None);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_stale_handle_ignored() {
        let mut sched = Scheduler::new();
        let mut toast = Toast::new();
        toast.show("first", &mut sched);
        let stale = toast.timer().unwrap();
        toast.show("second", &mut sched);
        assert!(!toast.on_timer(stale));
        assert_eq!(toast.message(), Some("second"));
    }
}
