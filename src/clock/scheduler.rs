//! Single-threaded task queue driven by virtual time.
//!
//! Delayed transitions are not threads or real timers. They are entries in
//! a `TaskQueue`, each tagged with the session that scheduled it. The host
//! moves time forward and the owner pops whatever has come due.
//!
//! ## Ordering
//!
//! Tasks run in due-time order. Tasks due at the same instant run in the
//! order they were scheduled.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::clock::TaskQueue;
//! use memory_match::core::SessionId;
//!
//! let mut queue = TaskQueue::new();
//! let session = SessionId::new(1);
//! queue.schedule(session, Duration::from_millis(700), "announce");
//! queue.schedule(session, Duration::from_millis(300), "flip back");
//!
//! let until = Duration::from_secs(1);
//! let first = queue.pop_due(until).unwrap();
//! assert_eq!(first.task, "flip back");
//! assert_eq!(queue.pop_due(until).unwrap().task, "announce");
//! assert!(queue.pop_due(until).is_none());
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use rustc_hash::FxHashSet;

use crate::core::SessionId;

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A task that has come due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask<T> {
    pub id: TimerId,
    pub session: SessionId,
    /// Virtual time the task was due at.
    pub due: Duration,
    pub task: T,
}

// Heap entry; ordered so the earliest (due, id) sits on top.
struct Entry<T>(ScheduledTask<T>);

impl<T> Entry<T> {
    fn key(&self) -> (Duration, TimerId) {
        (self.0.due, self.0.id)
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Virtual-time task queue.
pub struct TaskQueue<T> {
    now: Duration,
    next_id: u64,
    heap: BinaryHeap<Entry<T>>,
    cancelled: FxHashSet<TimerId>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            heap: BinaryHeap::new(),
            cancelled: FxHashSet::default(),
        }
    }
}

impl<T> std::fmt::Debug for TaskQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("now", &self.now)
            .field("pending", &self.pending())
            .finish()
    }
}

impl<T> TaskQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to run `delay` from now.
    pub fn schedule(&mut self, session: SessionId, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.heap.push(Entry(ScheduledTask {
            id,
            session,
            due: self.now.saturating_add(delay),
            task,
        }));
        id
    }

    /// Cancel a task that has not run yet.
    ///
    /// Returns false if the task already ran or was already cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let queued = self.heap.iter().any(|entry| entry.0.id == id);
        queued && self.cancelled.insert(id)
    }

    /// Pop the earliest task due at or before `until`, skipping cancelled
    /// ones. Virtual time moves to the task's due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTask<T>> {
        loop {
            if self.heap.peek()?.0.due > until {
                return None;
            }
            let Entry(task) = self.heap.pop()?;
            if self.cancelled.remove(&task.id) {
                continue;
            }
            self.now = self.now.max(task.due);
            return Some(task);
        }
    }

    /// Move virtual time forward without running anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Due time of the next live task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.heap
            .iter()
            .filter(|entry| !self.cancelled.contains(&entry.0.id))
            .map(|entry| entry.0.due)
            .min()
    }

    /// Number of live (not cancelled) tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.heap.len() - self.cancelled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S1: SessionId = SessionId::new(1);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_due_order() {
        let mut queue = TaskQueue::new();
        queue.schedule(S1, ms(1000), 'c');
        queue.schedule(S1, ms(10), 'a');
        queue.schedule(S1, ms(700), 'b');

        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(5000)))
            .map(|t| t.task)
            .collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_ties_run_in_schedule_order() {
        let mut queue = TaskQueue::new();
        for task in 0..5 {
            queue.schedule(S1, ms(100), task);
        }

        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(100)))
            .map(|t| t.task)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut queue = TaskQueue::new();
        queue.schedule(S1, ms(1000), ());

        assert!(queue.pop_due(ms(999)).is_none());
        assert_eq!(queue.pending(), 1);

        let task = queue.pop_due(ms(1000)).unwrap();
        assert_eq!(task.due, ms(1000));
        assert_eq!(queue.now(), ms(1000));
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut queue = TaskQueue::new();
        queue.advance_to(ms(500));
        queue.schedule(S1, ms(200), ());

        assert_eq!(queue.next_due(), Some(ms(700)));
    }

    #[test]
    fn test_cancel() {
        let mut queue = TaskQueue::new();
        let tick = queue.schedule(S1, ms(100), "tick");
        queue.schedule(S1, ms(200), "other");

        assert!(queue.cancel(tick));
        assert!(!queue.cancel(tick));
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.next_due(), Some(ms(200)));

        let task = queue.pop_due(ms(1000)).unwrap();
        assert_eq!(task.task, "other");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_after_run_is_noop() {
        let mut queue = TaskQueue::new();
        let id = queue.schedule(S1, ms(1), ());
        queue.pop_due(ms(1)).unwrap();

        assert!(!queue.cancel(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_session_tag_is_kept() {
        let mut queue = TaskQueue::new();
        queue.schedule(SessionId::new(7), ms(1), ());
        assert_eq!(queue.pop_due(ms(1)).unwrap().session, SessionId::new(7));
    }

    #[test]
    fn test_time_never_moves_backwards() {
        let mut queue: TaskQueue<()> = TaskQueue::new();
        queue.advance_to(ms(50));
        queue.advance_to(ms(10));
        assert_eq!(queue.now(), ms(50));
    }
}
