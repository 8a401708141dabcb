//! Deferred actions for presentation pacing.
//!
//! The controller never sleeps. It hands each delayed step to a
//! `Scheduler` and applies whatever the scheduler reports as due. The
//! tick-driven scheduler paces the real game; the immediate one lets tests
//! and tools run a whole scoring cycle synchronously.

use std::collections::VecDeque;

/// A step the controller performs later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimedAction {
    /// Finish the scoring run that is in progress.
    CompleteRun,
    /// Open the tutor after a failed run.
    OpenFeedback,
    /// Move the tutor to its next question.
    AdvanceDialogue,
}

pub trait Scheduler: Send {
    /// Request `action` to fire `delay_ticks` after `now_tick`.
    fn schedule(&mut self, now_tick: u64, delay_ticks: u64, action: TimedAction);

    /// Remove and return every action due at `now_tick`, in firing order.
    fn drain_due(&mut self, now_tick: u64) -> Vec<TimedAction>;

    /// Drop every pending instance of `action`.
    fn cancel(&mut self, action: TimedAction);

    /// Drop everything pending.
    fn clear(&mut self);

    /// Number of pending actions.
    fn pending(&self) -> usize;
}

/// Fires actions once the tick clock reaches their due tick.
#[derive(Debug, Default)]
pub struct TickScheduler {
    /// (due tick, insertion sequence, action)
    queue: Vec<(u64, u64, TimedAction)>,
    next_seq: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TickScheduler {
    fn schedule(&mut self, now_tick: u64, delay_ticks: u64, action: TimedAction) {
        self.queue
            .push((now_tick.saturating_add(delay_ticks), self.next_seq, action));
        self.next_seq += 1;
    }

    fn drain_due(&mut self, now_tick: u64) -> Vec<TimedAction> {
        let mut due: Vec<(u64, u64, TimedAction)> = Vec::new();
        self.queue.retain(|entry| {
            if entry.0 <= now_tick {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(tick, seq, _)| (*tick, *seq));
        due.into_iter().map(|(_, _, action)| action).collect()
    }

    fn cancel(&mut self, action: TimedAction) {
        self.queue.retain(|(_, _, a)| *a != action);
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Ignores delays: everything scheduled is due on the next drain.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    queue: VecDeque<TimedAction>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ImmediateScheduler {
    fn schedule(&mut self, _now_tick: u64, _delay_ticks: u64, action: TimedAction) {
        self.queue.push_back(action);
    }

    fn drain_due(&mut self, _now_tick: u64) -> Vec<TimedAction> {
        self.queue.drain(..).collect()
    }

    fn cancel(&mut self, action: TimedAction) {
        self.queue.retain(|a| *a != action);
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_scheduler_waits_for_due_tick() {
        let mut s = TickScheduler::new();
        s.schedule(10, 60, TimedAction::CompleteRun);
        assert!(s.drain_due(69).is_empty());
        assert_eq!(s.drain_due(70), vec![TimedAction::CompleteRun]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn tick_scheduler_orders_by_due_then_insertion() {
        let mut s = TickScheduler::new();
        s.schedule(0, 30, TimedAction::OpenFeedback);
        s.schedule(0, 10, TimedAction::CompleteRun);
        s.schedule(0, 30, TimedAction::AdvanceDialogue);
        assert_eq!(
            s.drain_due(100),
            vec![
                TimedAction::CompleteRun,
                TimedAction::OpenFeedback,
                TimedAction::AdvanceDialogue
            ]
        );
    }

    #[test]
    fn cancel_removes_only_matching_action() {
        let mut s = TickScheduler::new();
        s.schedule(0, 5, TimedAction::AdvanceDialogue);
        s.schedule(0, 5, TimedAction::OpenFeedback);
        s.cancel(TimedAction::AdvanceDialogue);
        assert_eq!(s.pending(), 1);
        assert_eq!(s.drain_due(5), vec![TimedAction::OpenFeedback]);
    }

    #[test]
    fn huge_delay_saturates_instead_of_overflowing() {
        let mut s = TickScheduler::new();
        s.schedule(10, u64::MAX, TimedAction::OpenFeedback);
        assert!(s.drain_due(1_000_000).is_empty());
        assert_eq!(s.drain_due(u64::MAX), vec![TimedAction::OpenFeedback]);
    }

    #[test]
    fn immediate_scheduler_ignores_delay() {
        let mut s = ImmediateScheduler::new();
        s.schedule(0, 1_000, TimedAction::CompleteRun);
        assert_eq!(s.pending(), 1);
        assert_eq!(s.drain_due(0), vec![TimedAction::CompleteRun]);
        s.schedule(0, 1, TimedAction::OpenFeedback);
        s.clear();
        assert!(s.drain_due(0).is_empty());
    }
}
