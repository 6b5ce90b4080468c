//! Video provider
//!
//! Thin, typed wrappers over the request client for the video endpoints.
//! Analytics calls (view tracking, watch history, watch time, shares) go
//! through the best-effort path and never surface errors to the caller.

use std::sync::Arc;

use api::{ApiClient, ProgressFn, QueryParams, RequestOptions, UploadRequest};
use catalog::{Category, RatingSummary, SortKey, Video};
use common::{ApiError, ApiResult};
use serde_json::json;
use tokio::task::JoinHandle;

use crate::analytics::best_effort;
use crate::models::VideoUpload;
use crate::{decode, validation};

/// Paging and ordering options for listing endpoints
#[derive(Debug, Clone, Default)]
pub struct VideoQuery {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub sort: Option<SortKey>,
}

impl VideoQuery {
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .set_opt("limit", self.limit)
            .set_opt("page", self.page)
            .set_opt("sort", self.sort.map(SortKey::as_str))
    }
}

pub struct VideoProvider {
    client: Arc<ApiClient>,
}

impl VideoProvider {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List videos in one of the six fixed categories
    pub async fn fetch_videos_by_category(
        &self,
        category: Category,
        query: &VideoQuery,
    ) -> ApiResult<Vec<Video>> {
        if category == Category::Unknown {
            return Err(ApiError::Validation("Unknown video category".to_string()));
        }
        let endpoint = format!("/videos/category/{}", category.as_str());
        let response = self
            .client
            .get(&endpoint, &query.to_params(), RequestOptions::new())
            .await?;
        decode(response)
    }

    /// Videos featured on the landing page
    pub async fn fetch_featured_videos(&self) -> ApiResult<Vec<Video>> {
        let response = self
            .client
            .get("/videos/featured", &QueryParams::new(), RequestOptions::new())
            .await?;
        decode(response)
    }

    /// Most viewed videos in the given window
    pub async fn fetch_popular_videos(
        &self,
        timeframe: Option<&str>,
        limit: Option<u32>,
    ) -> ApiResult<Vec<Video>> {
        let params = QueryParams::new()
            .set_opt("timeframe", timeframe)
            .set_opt("limit", limit);
        let response = self
            .client
            .get("/videos/popular", &params, RequestOptions::new())
            .await?;
        decode(response)
    }

    /// A single video by id
    pub async fn fetch_video(&self, video_id: &str) -> ApiResult<Video> {
        let endpoint = format!("/videos/{video_id}");
        let response = self
            .client
            .get(&endpoint, &QueryParams::new(), RequestOptions::new())
            .await?;
        decode(response)
    }

    /// Full-text search over the catalog
    pub async fn search_videos(&self, text: &str, query: &VideoQuery) -> ApiResult<Vec<Video>> {
        validation::validate_required("Search query", text).map_err(ApiError::Validation)?;
        let params = query.to_params().set("query", text);
        let response = self
            .client
            .get("/videos/search", &params, RequestOptions::new())
            .await?;
        decode(response)
    }

    /// Rate a video; the returned totals are echoed onto local copies
    pub async fn rate_video(&self, video_id: &str, rating: f32) -> ApiResult<RatingSummary> {
        validation::validate_rating(rating).map_err(ApiError::Validation)?;
        let endpoint = format!("/videos/{video_id}/rate");
        let body = json!({"rating": rating});
        let response = self
            .client
            .post(&endpoint, Some(&body), RequestOptions::new())
            .await?;
        decode(response)
    }

    /// Publish a new video, optionally reporting upload progress
    pub async fn upload_video(
        &self,
        upload: VideoUpload,
        on_progress: Option<ProgressFn>,
    ) -> ApiResult<Video> {
        validation::validate_required("Title", &upload.title).map_err(ApiError::Validation)?;
        if upload.category == Category::Unknown {
            return Err(ApiError::Validation("Please choose a category".to_string()));
        }
        let max_bytes = self.client.config().max_upload_size_bytes();
        if upload.total_bytes() > max_bytes {
            return Err(ApiError::Validation(format!(
                "Upload exceeds the {} MB limit",
                self.client.config().max_upload_size_mb
            )));
        }

        let mut request = UploadRequest::new()
            .text("title", &upload.title)
            .text("description", &upload.description)
            .text("category", upload.category.as_str())
            .text("isPublic", upload.is_public)
            .file(upload.video);
        if !upload.tags.is_empty() {
            request = request.text("tags", upload.tags.join(","));
        }
        if let Some(thumbnail) = upload.thumbnail {
            request = request.file(thumbnail);
        }

        let response = self
            .client
            .upload("/videos/upload", request, on_progress, RequestOptions::new())
            .await?;
        serde_json::from_value(response).map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Count a view. Best-effort: failures are logged, never surfaced.
    pub fn track_video_view(&self, video_id: &str) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let endpoint = format!("/videos/{video_id}/view");
        best_effort("view tracking", async move {
            client.post(&endpoint, None, RequestOptions::new()).await
        })
    }

    /// Record playback progress in the watch history. Best-effort.
    pub fn update_watch_history(&self, video_id: &str, progress: f32) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let body = json!({"videoId": video_id, "progress": progress});
        best_effort("watch history", async move {
            client
                .post("/users/history", Some(&body), RequestOptions::new())
                .await
        })
    }

    /// Record watched seconds for analytics. Best-effort.
    pub fn record_watch_time(
        &self,
        video_id: &str,
        seconds: u32,
        percentage: f32,
    ) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let body = json!({
            "videoId": video_id,
            "watchTimeSeconds": seconds,
            "percentageWatched": percentage,
        });
        best_effort("watch time", async move {
            client
                .post("/analytics/watch-time", Some(&body), RequestOptions::new())
                .await
        })
    }

    /// Count a share to the given platform. Best-effort.
    pub fn record_share(&self, video_id: &str, platform: &str) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let body = json!({"videoId": video_id, "platform": platform});
        best_effort("share tracking", async move {
            client
                .post("/analytics/shares", Some(&body), RequestOptions::new())
                .await
        })
    }
}
