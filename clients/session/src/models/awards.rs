//! Awards, leaderboard and hall-of-fame models

use serde::{Deserialize, Serialize};

/// Ranking window for the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Month,
    Year,
    All,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Month => "month",
            Timeframe::Year => "year",
            Timeframe::All => "all",
        }
    }
}

/// Filmmaker reference on an award entry; looser than the catalog one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardFilmmaker {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub school: Option<String>,
}

/// Summary of an awarded film
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardFilm {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f32>,
    #[serde(default)]
    pub views: Option<u64>,
    pub filmmaker: AwardFilmmaker,
}

/// Winners for one award year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearWinners {
    pub year: i32,
    #[serde(default)]
    pub film_of_the_year: Option<AwardFilm>,
    #[serde(default)]
    pub runner_ups: Vec<AwardFilm>,
    #[serde(default)]
    pub student_filmmaker: Option<AwardFilm>,
}

/// Hall of fame payload: the current year plus past winners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFame {
    pub current_year: YearWinners,
    #[serde(default)]
    pub past_years: Vec<YearWinners>,
}

/// Winners for a specific month, ranked best-first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyWinners {
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub winners: Vec<catalog::Video>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn hall_of_fame_payloads_deserialize() {
        let hall: HallOfFame = serde_json::from_value(json!({
            "currentYear": {
                "year": 2023,
                "filmOfTheYear": {
                    "id": "video1",
                    "title": "Amazing Short Film",
                    "averageRating": 4.8,
                    "views": 5000,
                    "filmmaker": {"id": "user123", "name": "Test Filmmaker"}
                },
                "runnerUps": [],
                "studentFilmmaker": {
                    "id": "video3",
                    "title": "Student Project",
                    "filmmaker": {"name": "Film Student", "school": "NYU Tisch School of the Arts"}
                }
            },
            "pastYears": [
                {"year": 2022, "filmOfTheYear": {
                    "id": "past1",
                    "title": "Last Year's Winner",
                    "filmmaker": {"name": "Past Director"}
                }}
            ]
        }))
        .expect("deserialize");

        assert_eq!(hall.current_year.year, 2023);
        let student = hall
            .current_year
            .student_filmmaker
            .expect("student winner present");
        assert_eq!(student.filmmaker.id, None);
        assert_eq!(
            student.filmmaker.school.as_deref(),
            Some("NYU Tisch School of the Arts")
        );
        assert_eq!(hall.past_years.len(), 1);
        assert!(hall.past_years[0].student_filmmaker.is_none());
    }

    #[test]
    fn timeframes_serialize_lowercase() {
        assert_eq!(Timeframe::Month.as_str(), "month");
        assert_eq!(
            serde_json::to_value(Timeframe::All).expect("serialize"),
            json!("all")
        );
    }
}
