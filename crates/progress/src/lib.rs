//! Progress tracking and recommendation engine.
//!
//! Maintains a local persistent model of a reader's interaction with the
//! fixed curriculum and derives a ranked "what to read next" list from
//! it. Single-threaded, write-through, no caching of derived values.

#![warn(missing_docs)]

pub mod clock;
pub mod format;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::format_time_spent;
pub use store::{unit_id_from_page_id, ProgressStore};
