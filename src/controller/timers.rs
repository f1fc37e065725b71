//! Cancellable deadline timers driven by the UI loop

use crate::state::ToastId;
use std::time::Instant;

/// What to do when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Close the success overlay
    OverlayDismiss,
    /// Start the exit transition of a toast
    ToastExit(ToastId),
    /// Remove a toast once its exit transition is over
    ToastRemove(ToastId),
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    seq: u64,
    kind: TimerKind,
    due: Instant,
}

/// Pending timers. Nothing fires on its own: the owner calls `take_due`.
#[derive(Debug, Default)]
pub struct Timers {
    next_seq: u64,
    pending: Vec<Scheduled>,
}

impl Timers {
    pub fn schedule(&mut self, kind: TimerKind, due: Instant) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { seq, kind, due });
    }

    /// Cancel every pending timer of this kind. Returns how many were dropped.
    pub fn cancel(&mut self, kind: TimerKind) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.kind != kind);
        before - self.pending.len()
    }

    /// Cancel both timers attached to a toast
    pub fn cancel_toast(&mut self, id: ToastId) {
        self.pending.retain(|t| {
            !matches!(t.kind, TimerKind::ToastExit(i) | TimerKind::ToastRemove(i) if i == id)
        });
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Remove and return every timer due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = pending;
        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter().map(|t| t.kind).collect()
    }
}

#[cfg(test)]
impl Timers {
    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_nothing_due_before_deadline() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.schedule(TimerKind::OverlayDismiss, start + Duration::from_secs(5));

        assert!(timers.take_due(start + Duration::from_millis(4999)).is_empty());
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_due_at_deadline_fires_once() {
        let start = Instant::now();
        let due = start + Duration::from_secs(5);
        let mut timers = Timers::default();
        timers.schedule(TimerKind::OverlayDismiss, due);

        assert_eq!(timers.take_due(due), vec![TimerKind::OverlayDismiss]);
        assert!(timers.take_due(due).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.schedule(TimerKind::ToastRemove(1), start + Duration::from_millis(300));
        timers.schedule(TimerKind::ToastExit(2), start + Duration::from_millis(100));
        timers.schedule(TimerKind::OverlayDismiss, start + Duration::from_millis(100));

        assert_eq!(
            timers.take_due(start + Duration::from_secs(1)),
            vec![
                TimerKind::ToastExit(2),
                TimerKind::OverlayDismiss,
                TimerKind::ToastRemove(1)
            ]
        );
    }

    #[test]
    fn test_cancel_by_kind() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.schedule(TimerKind::OverlayDismiss, start);
        timers.schedule(TimerKind::ToastExit(1), start);

        assert_eq!(timers.cancel(TimerKind::OverlayDismiss), 1);
        assert!(!timers.is_scheduled(TimerKind::OverlayDismiss));
        assert!(timers.is_scheduled(TimerKind::ToastExit(1)));
    }

    #[test]
    fn test_cancel_toast_drops_both_timers() {
        let start = Instant::now();
        let mut timers = Timers::default();
        timers.schedule(TimerKind::ToastExit(1), start);
        timers.schedule(TimerKind::ToastRemove(1), start);
        timers.schedule(TimerKind::ToastExit(2), start);

        timers.cancel_toast(1);

        assert_eq!(timers.take_due(start), vec![TimerKind::ToastExit(2)]);
    }

    #[test]
    fn test_clear() {
        let mut timers = Timers::default();
        timers.schedule(TimerKind::OverlayDismiss, Instant::now());
        timers.clear();
        assert!(timers.is_empty());
    }
}
