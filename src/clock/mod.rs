//! Timing: the virtual-time task queue and the game clock.
//!
//! Everything time-based in the engine (clock ticks, mismatch flip-back,
//! win announcement) is a task on a `TaskQueue`. Nothing runs until the
//! host advances time, which keeps every delay deterministic under test.

pub mod game_clock;
pub mod scheduler;

pub use game_clock::GameClock;
pub use scheduler::{ScheduledTask, TaskQueue, TimerId};
