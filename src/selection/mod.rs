//! Turn selection: which cards are face-up and unresolved.

pub mod tracker;

pub use tracker::{Selection, SelectionTracker};
