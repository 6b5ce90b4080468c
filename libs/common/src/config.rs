//! Client configuration
//!
//! Configuration is read from environment variables with sensible development
//! defaults, mirroring how the rest of the platform is configured.

use crate::error::{ApiError, ApiResult};

/// Feature flags for optional parts of the platform
#[derive(Debug, Clone, Default)]
pub struct FeatureFlags {
    pub student_filmmaker: bool,
    pub hall_of_fame: bool,
    pub analytics_dashboard: bool,
}

/// Configuration for the Vidora API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Vidora REST API, without a trailing slash
    pub api_url: String,
    /// Base URL of the web application (login redirects point here)
    pub app_url: String,
    /// Deployment environment name
    pub environment: String,
    /// Maximum accepted upload size, in megabytes
    pub max_upload_size_mb: u64,
    /// Feature flags
    pub features: FeatureFlags,
}

impl ClientConfig {
    /// Create a configuration pointing at the given API base URL, with
    /// defaults for everything else
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_trailing_slash(api_url.into()),
            app_url: "http://localhost:3000".to_string(),
            environment: "development".to_string(),
            max_upload_size_mb: 500,
            features: FeatureFlags::default(),
        }
    }

    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `VIDORA_API_URL`: API base URL (default: `http://localhost:8000/api`)
    /// - `VIDORA_APP_URL`: Application base URL (default: `http://localhost:3000`)
    /// - `VIDORA_ENVIRONMENT`: Environment name (default: `development`)
    /// - `VIDORA_MAX_UPLOAD_SIZE`: Maximum upload size in MB (default: 500)
    /// - `VIDORA_FEATURE_STUDENT_FILMMAKER`: `true` to enable student accounts
    /// - `VIDORA_FEATURE_HALL_OF_FAME`: `true` to enable the hall of fame
    /// - `VIDORA_FEATURE_ANALYTICS_DASHBOARD`: `true` to enable analytics
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let api_url = lookup("VIDORA_API_URL")
            .unwrap_or_else(|| "http://localhost:8000/api".to_string());
        let app_url =
            lookup("VIDORA_APP_URL").unwrap_or_else(|| "http://localhost:3000".to_string());
        let environment =
            lookup("VIDORA_ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let max_upload_size_mb = match lookup("VIDORA_MAX_UPLOAD_SIZE") {
            Some(raw) => raw.parse().map_err(|_| {
                ApiError::Config(format!("VIDORA_MAX_UPLOAD_SIZE is not a number: {raw}"))
            })?,
            None => 500,
        };

        let flag = |key: &str| lookup(key).is_some_and(|v| v == "true");

        Ok(Self {
            api_url: trim_trailing_slash(api_url),
            app_url,
            environment,
            max_upload_size_mb,
            features: FeatureFlags {
                student_filmmaker: flag("VIDORA_FEATURE_STUDENT_FILMMAKER"),
                hall_of_fame: flag("VIDORA_FEATURE_HALL_OF_FAME"),
                analytics_dashboard: flag("VIDORA_FEATURE_ANALYTICS_DASHBOARD"),
            },
        })
    }

    /// Maximum accepted upload size, in bytes
    pub fn max_upload_size_bytes(&self) -> u64 {
        self.max_upload_size_mb * 1024 * 1024
    }

    /// Destination of the client-side redirect performed on a 401 response
    pub fn login_url(&self) -> String {
        format!("{}/login", self.app_url)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
