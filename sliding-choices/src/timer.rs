//! Cancelable scheduled tasks.
//!
//! Timers are plain deadline entries owned by whoever schedules them. Nothing
//! runs on its own: the owner calls [`Timers::take_due`] with the current time
//! and acts on the returned tasks. Cancelling is removing the entry, and
//! dropping the owner drops every pending entry with it.

use std::time::Instant;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    deadline: Instant,
    task: T,
}

/// A small deadline queue.
#[derive(Debug, Clone)]
pub struct Timers<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, deadline, task });
        id
    }

    /// Cancel a pending task. Returns true if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// Cancel every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Remove and return every task due at `now`, earliest first.
    ///
    /// Tasks with equal deadlines come out in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TimerId, T)> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;

        due.sort_by_key(|entry| (entry.deadline, entry.id));
        due.into_iter().map(|entry| (entry.id, entry.task)).collect()
    }
}
