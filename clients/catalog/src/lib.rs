//! Vidora video catalog
//!
//! Typed video records as returned by the Vidora REST API, plus the pure
//! filter/sort engine that turns an unordered collection into a deterministic
//! display list.

pub mod filter;
pub mod models;

pub use filter::{
    CategoryFilter, DisplayList, DurationBucket, FilterCriteria, SortKey, filter_and_sort,
};
pub use models::{Category, Filmmaker, RatingSummary, Video};
