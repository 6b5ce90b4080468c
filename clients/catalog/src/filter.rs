//! Deterministic filter/sort engine for video listings
//!
//! A pure transformation from an input collection plus criteria to a
//! display-ordered collection. The input is never mutated; every call
//! produces a fresh ordering. Sorts are stable, so ties keep input order.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Video};

/// Durations under this many seconds are "short"
pub const SHORT_MAX_SECS: u32 = 300;
/// Durations of at least this many seconds are "long"
pub const LONG_MIN_SECS: u32 = 900;

/// Category criterion: everything, or one exact category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a record with the given category is retained
    ///
    /// [`Category::Unknown`] never matches a specific filter, so records with
    /// unrecognized categories disappear as soon as any filter is active.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(Category::Unknown) => false,
            CategoryFilter::Only(wanted) => category == wanted,
        }
    }
}

/// Duration criterion, with half-open bucket boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    #[default]
    All,
    /// Under 5 minutes
    Short,
    /// 5 to 15 minutes: `300 <= duration < 900`
    Medium,
    /// 15 minutes and over
    Long,
}

impl DurationBucket {
    /// Whether a record with the given duration is retained
    ///
    /// A missing duration matches no bucket other than [`DurationBucket::All`].
    pub fn matches(self, duration: Option<u32>) -> bool {
        match (self, duration) {
            (DurationBucket::All, _) => true,
            (_, None) => false,
            (DurationBucket::Short, Some(d)) => d < SHORT_MAX_SECS,
            (DurationBucket::Medium, Some(d)) => (SHORT_MAX_SECS..LONG_MIN_SECS).contains(&d),
            (DurationBucket::Long, Some(d)) => d >= LONG_MIN_SECS,
        }
    }
}

/// Display ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Popular,
    Rating,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
        }
    }
}

/// The complete filter/sort criteria for one listing
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub duration: DurationBucket,
    pub sort: SortKey,
}

/// Result of filtering: either an ordered list or an explicit empty state
///
/// The empty case is its own variant so callers render a "no videos match"
/// message instead of silently passing through an empty collection.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayList {
    Empty,
    Videos(Vec<Video>),
}

impl DisplayList {
    pub fn len(&self) -> usize {
        match self {
            DisplayList::Empty => 0,
            DisplayList::Videos(videos) => videos.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayList::Empty)
    }

    /// The ordered records; an empty slice for the empty state
    pub fn videos(&self) -> &[Video] {
        match self {
            DisplayList::Empty => &[],
            DisplayList::Videos(videos) => videos,
        }
    }
}

/// Produce the display ordering for a collection of videos
///
/// Category and duration filters are applied first, then exactly one stable
/// sort. The source slice is left untouched.
pub fn filter_and_sort(videos: &[Video], criteria: &FilterCriteria) -> DisplayList {
    let mut result: Vec<Video> = videos
        .iter()
        .filter(|video| criteria.category.matches(video.category))
        .filter(|video| criteria.duration.matches(video.duration))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::Newest => result.sort_by_key(|video| Reverse(upload_instant(video))),
        SortKey::Oldest => result.sort_by_key(upload_instant),
        SortKey::Popular => result.sort_by_key(|video| Reverse(video.views)),
        SortKey::Rating => {
            result.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
        }
    }

    if result.is_empty() {
        DisplayList::Empty
    } else {
        DisplayList::Videos(result)
    }
}

/// Sort instant for a video; records without a timestamp sort as the oldest
/// possible upload
fn upload_instant(video: &Video) -> DateTime<Utc> {
    video.upload_date.unwrap_or(DateTime::<Utc>::MIN_UTC)
}
