//! Station directory and feedback store.
//!
//! Lines, stations and their best-exit coach numbers, seeded from a JSON
//! fixture at startup. Also holds the crowd-sourced verified counters and
//! thumbs-up/down feedback.

mod error;
mod feedback;
mod seed;
mod stations;

pub use error::DirectoryError;
pub use feedback::{FeedbackStore, FeedbackSummary, StationFeedback};
pub use seed::{RouteSeed, SeedData, StationSeed};
pub use stations::{Recommendation, StationDirectory};
