//! Vidora session and provider layer
//!
//! Thin, dependency-injected wrappers over the request client: the auth
//! state machine, the auth/video/awards providers, client-side form
//! validation, and the best-effort path for analytics calls.

use common::{ApiError, ApiResult};
use serde::Serialize;
use serde_json::Value;

pub mod analytics;
pub mod auth;
pub mod awards;
pub mod models;
pub mod state;
pub mod validation;
pub mod videos;

pub use analytics::best_effort;
pub use auth::AuthProvider;
pub use awards::AwardsProvider;
pub use models::{
    AuthResponse, HallOfFame, MonthlyWinners, ProfileUpdate, SignupRequest, SubscriptionTier,
    Timeframe, User, VideoUpload,
};
pub use state::{AuthState, SessionState};
pub use videos::{VideoProvider, VideoQuery};

/// Deserialize a response body, treating an absent body as a decode failure
pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Option<Value>) -> ApiResult<T> {
    let value = value.ok_or_else(|| ApiError::Decode("empty response body".to_string()))?;
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Serialize a request payload into a JSON body
pub(crate) fn to_body<T: Serialize>(payload: &T) -> ApiResult<Value> {
    serde_json::to_value(payload).map_err(|err| ApiError::Decode(err.to_string()))
}
