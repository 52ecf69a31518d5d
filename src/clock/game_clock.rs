//! Elapsed-time counter for a running game.
//!
//! The clock keeps exactly one tick scheduled while it runs. Stopping it
//! cancels that tick on the queue, so a finished session never keeps
//! counting in the background.
//!
//! Elapsed seconds are read off the queue's virtual time, not counted per
//! tick. The tick interval only sets how often the reading is refreshed.

use std::time::Duration;

use log::trace;

use super::scheduler::{TaskQueue, TimerId};
use crate::core::SessionId;

/// Whole seconds of virtual time since `start`, refreshed on each tick.
#[derive(Clone, Debug)]
pub struct GameClock {
    interval: Duration,
    started: Duration,
    elapsed_secs: u64,
    handle: Option<TimerId>,
}

impl GameClock {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            started: Duration::ZERO,
            elapsed_secs: 0,
            handle: None,
        }
    }

    /// Zero the counter and schedule the first tick.
    ///
    /// Restarts from zero if already running.
    pub fn start<T>(&mut self, queue: &mut TaskQueue<T>, session: SessionId, tick: T) {
        self.stop(queue);
        self.started = queue.now();
        self.elapsed_secs = 0;
        self.handle = Some(queue.schedule(session, self.interval, tick));
    }

    /// Cancel the pending tick, settling the reading at the current time.
    pub fn stop<T>(&mut self, queue: &mut TaskQueue<T>) {
        if let Some(handle) = self.handle.take() {
            queue.cancel(handle);
            self.settle(queue.now());
        }
    }

    /// Handle a fired tick: refresh the reading and schedule the next one.
    ///
    /// Returns false for a tick this clock no longer owns.
    pub fn on_tick<T>(
        &mut self,
        queue: &mut TaskQueue<T>,
        session: SessionId,
        fired: TimerId,
        next: T,
    ) -> bool {
        if self.handle != Some(fired) {
            return false;
        }
        self.settle(queue.now());
        self.handle = Some(queue.schedule(session, self.interval, next));
        trace!("{session}: {}s", self.elapsed_secs);
        true
    }

    fn settle(&mut self, now: Duration) {
        self.elapsed_secs = now.saturating_sub(self.started).as_secs();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }
}
