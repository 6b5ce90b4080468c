//! Awards provider: leaderboard, hall of fame, monthly winners

use std::sync::Arc;

use api::{ApiClient, QueryParams, RequestOptions};
use catalog::{Category, CategoryFilter, Video};
use common::ApiResult;

use crate::decode;
use crate::models::{HallOfFame, MonthlyWinners, Timeframe};

pub struct AwardsProvider {
    client: Arc<ApiClient>,
}

impl AwardsProvider {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Current leaderboard, best-rated first
    ///
    /// The category parameter is omitted entirely when the filter is
    /// [`CategoryFilter::All`].
    pub async fn leaderboard(
        &self,
        category: CategoryFilter,
        timeframe: Timeframe,
        limit: u32,
    ) -> ApiResult<Vec<Video>> {
        let category = match category {
            CategoryFilter::All | CategoryFilter::Only(Category::Unknown) => None,
            CategoryFilter::Only(category) => Some(category.as_str()),
        };
        let params = QueryParams::new()
            .set_opt("category", category)
            .set("timeframe", timeframe.as_str())
            .set("limit", limit);
        let response = self
            .client
            .get("/awards/leaderboard", &params, RequestOptions::new())
            .await?;
        decode(response)
    }

    /// Film of the year and student filmmaker awards, current and past
    pub async fn hall_of_fame(&self) -> ApiResult<HallOfFame> {
        let response = self
            .client
            .get(
                "/awards/hall-of-fame",
                &QueryParams::new(),
                RequestOptions::new(),
            )
            .await?;
        decode(response)
    }

    /// Ranked winners for a month; defaults to the current month server-side
    pub async fn monthly_winners(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> ApiResult<MonthlyWinners> {
        let params = QueryParams::new()
            .set_opt("month", month)
            .set_opt("year", year);
        let response = self
            .client
            .get("/awards/monthly-winners", &params, RequestOptions::new())
            .await?;
        decode(response)
    }
}
