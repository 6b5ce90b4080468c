//! Video models and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The six fixed video categories
///
/// Records carrying a category the client does not know about deserialize to
/// [`Category::Unknown`], which never matches a specific category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ShortFilm,
    Commercial,
    MusicVideo,
    IndieFilm,
    Promotional,
    Event,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Category {
    /// All categories a video can actually be uploaded under
    pub const ALL: [Category; 6] = [
        Category::ShortFilm,
        Category::Commercial,
        Category::MusicVideo,
        Category::IndieFilm,
        Category::Promotional,
        Category::Event,
    ];

    /// The wire identifier, e.g. `short-film`
    pub fn as_str(self) -> &'static str {
        match self {
            Category::ShortFilm => "short-film",
            Category::Commercial => "commercial",
            Category::MusicVideo => "music-video",
            Category::IndieFilm => "indie-film",
            Category::Promotional => "promotional",
            Category::Event => "event",
            Category::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filmmaker reference embedded in a video record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filmmaker {
    pub id: String,
    pub name: String,
}

/// A video record
///
/// Immutable from the client's perspective; rating and view updates are
/// echoed locally after the corresponding mutation call succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    /// Duration in seconds; absent for records still being processed
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub views: u64,
    /// Average rating, 0.5 to 5.0 in 0.5 increments
    #[serde(default)]
    pub average_rating: f32,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub share_count: u64,
    pub filmmaker: Filmmaker,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub awards: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Rating totals returned after rating a video
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average_rating: f32,
    pub rating_count: u32,
}
