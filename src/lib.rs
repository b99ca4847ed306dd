//! fzmpd - fuzzy-select MPD tracks into the play queue
//!
//! Parses MPD's database dump, presents every track as one fixed-width line
//! in a terminal fuzzy finder, and splices the selection into the play queue
//! via mpc: stale occurrences are removed first, then the chosen tracks are
//! inserted after the one currently playing.

pub mod error;
pub mod format;
pub mod model;
pub mod mpd;
pub mod queue;
pub mod select;
pub mod term;

pub use queue::QueueReconciler;
pub use select::SelectorSession;
