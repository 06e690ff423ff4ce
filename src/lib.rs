#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI application runner shared by the binary and integration tests.
pub mod app;
/// Ratings file decoding and encoding.
pub mod codec;
/// Split configuration types.
pub mod config;
/// Centralized constants used across codec, splits, and the CLI app.
pub mod constants;
/// Rating record types.
pub mod data;
/// Partition policies over loaded ratings.
pub mod splits;
/// Shared type aliases.
pub mod types;

mod errors;

pub use app::{SplitSummary, run_split_ratings, split_ratings_file};
pub use config::{SplitConfig, SplitRatios};
pub use data::RatingRecord;
pub use errors::SplitError;
pub use splits::{SplitOutcome, SplitPolicy, split_global, split_per_user, split_records};
pub use types::{Fraction, ItemId, RatingValue, Timestamp, UserId};
