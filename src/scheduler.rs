// SPDX-License-Identifier: MPL-2.0
//! Deterministic delayed-task scheduler.
//!
//! Deferred work (background refresh, deletion settle, progress ticks) is
//! queued on a logical clock that only moves when the host drains it towards a
//! deadline with [`Scheduler::pop_due_by`] and [`Scheduler::advance_to`]. Due
//! tasks come out in timestamp order; tasks due at the same instant come out
//! in the order they were scheduled. Popping a task moves the clock to its due
//! time, so a task rescheduled while it runs keeps its cadence.
//!
//! Tasks carry indices and session ids only, never derived data, so a task
//! that fires late acts on the state current at fire time.

use crate::domain::video::SessionId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Delays of deferred gallery work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSettings {
    pub background_refresh_delay: Duration,
    pub delete_settle_delay: Duration,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            background_refresh_delay: Duration::from_millis(
                crate::config::DEFAULT_BACKGROUND_REFRESH_DELAY_MS,
            ),
            delete_settle_delay: Duration::from_millis(
                crate::config::DEFAULT_DELETE_SETTLE_DELAY_MS,
            ),
        }
    }
}

/// Work re-entering the lightbox once its delay elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Show the primary image of `page` as background, if it is still current.
    RefreshBackground { page: usize },
    /// Apply the pending deletion.
    SettleDeletion,
    /// Emit a progress update for `session`, if it is still active.
    ProgressTick { session: SessionId },
}

struct Entry {
    due: Duration,
    seq: u64,
    task: ScheduledTask,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed: BinaryHeap is a max-heap, the earliest entry must be on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-heap of tasks keyed by logical due time.
#[derive(Default)]
pub struct Scheduler {
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Entry>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedules `task` to fire after `delay`.
    pub fn schedule(&mut self, task: ScheduledTask, delay: Duration) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Entry {
            due: self.now.saturating_add(delay),
            seq,
            task,
        });
    }

    /// Clock value `elapsed` after the current time.
    #[must_use]
    pub fn deadline_after(&self, elapsed: Duration) -> Duration {
        self.now.saturating_add(elapsed)
    }

    /// Pops the earliest task due at or before `deadline` and moves the clock
    /// to its due time.
    pub fn pop_due_by(&mut self, deadline: Duration) -> Option<ScheduledTask> {
        if self.pending.peek()?.due > deadline {
            return None;
        }
        let entry = self.pending.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry.task)
    }

    /// Moves the clock to `deadline`. The clock never goes backwards.
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Time until the next task is due, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .peek()
            .map(|entry| entry.due.saturating_sub(self.now))
    }

    /// Whether a task equal to `task` is pending.
    #[must_use]
    pub fn contains(&self, task: &ScheduledTask) -> bool {
        self.pending.iter().any(|entry| entry.task == *task)
    }

    /// Drops every pending task for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&ScheduledTask) -> bool) {
        self.pending.retain(|entry| keep(&entry.task));
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Runs the clock forward by `elapsed`, collecting every due task.
    fn advance(scheduler: &mut Scheduler, elapsed: Duration) -> Vec<ScheduledTask> {
        let deadline = scheduler.deadline_after(elapsed);
        let due = std::iter::from_fn(|| scheduler.pop_due_by(deadline)).collect();
        scheduler.advance_to(deadline);
        due
    }

    #[test]
    fn nothing_fires_before_due_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ScheduledTask::SettleDeletion, ms(500));
        assert!(advance(&mut scheduler, ms(499)).is_empty());
        assert_eq!(scheduler.next_due_in(), Some(ms(1)));

        assert_eq!(
            advance(&mut scheduler, ms(1)),
            vec![ScheduledTask::SettleDeletion]
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn tasks_fire_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ScheduledTask::SettleDeletion, ms(500));
        scheduler.schedule(ScheduledTask::RefreshBackground { page: 1 }, ms(125));
        assert_eq!(
            advance(&mut scheduler, ms(1_000)),
            vec![
                ScheduledTask::RefreshBackground { page: 1 },
                ScheduledTask::SettleDeletion
            ]
        );
    }

    #[test]
    fn equal_due_times_keep_insertion_order() {
        let mut scheduler = Scheduler::new();
        for page in 0..5 {
            scheduler.schedule(ScheduledTask::RefreshBackground { page }, ms(100));
        }
        let pages: Vec<usize> = advance(&mut scheduler, ms(100))
            .into_iter()
            .map(|task| match task {
                ScheduledTask::RefreshBackground { page } => page,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(pages, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut scheduler = Scheduler::new();
        advance(&mut scheduler, ms(300));
        assert_eq!(scheduler.now(), ms(300));
        scheduler.schedule(ScheduledTask::SettleDeletion, ms(100));
        assert!(advance(&mut scheduler, ms(99)).is_empty());
        assert_eq!(advance(&mut scheduler, ms(1)).len(), 1);
    }

    #[test]
    fn popping_moves_clock_to_due_time() {
        let mut scheduler = Scheduler::new();
        let session = SessionId::new(1);
        let tick = ScheduledTask::ProgressTick { session };
        scheduler.schedule(tick, ms(100));

        // A task rescheduled while draining keeps a fixed cadence
        let deadline = scheduler.deadline_after(ms(1_000));
        let mut fired = Vec::new();
        while let Some(task) = scheduler.pop_due_by(deadline) {
            fired.push(scheduler.now());
            scheduler.schedule(task, ms(100));
        }
        scheduler.advance_to(deadline);

        assert_eq!(fired, (1..=10).map(|i| ms(i * 100)).collect::<Vec<_>>());
        assert_eq!(scheduler.now(), ms(1_000));
        assert_eq!(scheduler.next_due_in(), Some(ms(100)));
    }

    #[test]
    fn clock_never_goes_backwards() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(ms(500));
        scheduler.advance_to(ms(200));
        assert_eq!(scheduler.now(), ms(500));
    }

    #[test]
    fn retain_purges_matching_tasks() {
        let mut scheduler = Scheduler::new();
        let old = SessionId::new(1);
        let current = SessionId::new(2);
        scheduler.schedule(ScheduledTask::ProgressTick { session: old }, ms(100));
        scheduler.schedule(ScheduledTask::ProgressTick { session: current }, ms(100));
        scheduler.schedule(ScheduledTask::SettleDeletion, ms(100));

        scheduler.retain(|task| *task != ScheduledTask::ProgressTick { session: old });
        assert_eq!(scheduler.len(), 2);
        assert!(!scheduler.contains(&ScheduledTask::ProgressTick { session: old }));
        assert!(scheduler.contains(&ScheduledTask::ProgressTick { session: current }));
    }
}
