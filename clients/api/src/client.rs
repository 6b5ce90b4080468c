//! The request client
//!
//! Every network call from the Vidora client crates goes through
//! [`ApiClient`]. It attaches the bearer token when one is stored, maps
//! responses onto the shared [`ApiError`] taxonomy, and performs no retries:
//! every failure is surfaced to the caller, who decides how to recover.

use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::atomic::AtomicU64;
use std::time::Duration;

use common::{ApiError, ApiResult, ClientConfig};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::query::QueryParams;
use crate::token::TokenStore;
use crate::upload::{ProgressFn, UploadRequest, progress_stream};

/// Shared HTTP client for all Vidora requests (connection pooling)
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build shared HTTP client")
});

/// Hook invoked after a 401 response, once the token has been cleared
///
/// The embedding UI uses this to navigate to the login page. The client never
/// retries on its own; the rejected call still fails with
/// [`ApiError::Unauthorized`] after the hook runs.
pub trait UnauthorizedHook: Send + Sync {
    fn on_unauthorized(&self);
}

/// Per-request options: extra headers and an optional cancellation token
#[derive(Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    cancel: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom header to this request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Cancel the request when this token is triggered
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// HTTP client for the Vidora REST API
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
    on_unauthorized: Option<Arc<dyn UnauthorizedHook>>,
}

impl ApiClient {
    /// Create a new client over the shared connection pool
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: SHARED_CLIENT.clone(),
            config,
            tokens,
            on_unauthorized: None,
        }
    }

    /// Install the hook invoked after a 401 response
    pub fn with_unauthorized_hook(mut self, hook: Arc<dyn UnauthorizedHook>) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shared token store, also used by the auth provider to persist logins
    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.tokens)
    }

    /// Uploads report progress; plain requests do not
    pub const fn supports_progress(&self) -> bool {
        true
    }

    /// Issue a GET request; `None`-valued params are omitted from the URL
    pub async fn get(
        &self,
        endpoint: &str,
        params: &QueryParams,
        opts: RequestOptions,
    ) -> ApiResult<Option<Value>> {
        self.send(Method::GET, endpoint, Some(params), None, &opts)
            .await
    }

    /// Issue a POST request with an optional JSON body
    pub async fn post(
        &self,
        endpoint: &str,
        body: Option<&Value>,
        opts: RequestOptions,
    ) -> ApiResult<Option<Value>> {
        self.send(Method::POST, endpoint, None, body, &opts).await
    }

    /// Issue a PUT request with an optional JSON body
    pub async fn put(
        &self,
        endpoint: &str,
        body: Option<&Value>,
        opts: RequestOptions,
    ) -> ApiResult<Option<Value>> {
        self.send(Method::PUT, endpoint, None, body, &opts).await
    }

    /// Issue a PATCH request with an optional JSON body
    pub async fn patch(
        &self,
        endpoint: &str,
        body: Option<&Value>,
        opts: RequestOptions,
    ) -> ApiResult<Option<Value>> {
        self.send(Method::PATCH, endpoint, None, body, &opts).await
    }

    /// Issue a DELETE request
    pub async fn delete(&self, endpoint: &str, opts: RequestOptions) -> ApiResult<Option<Value>> {
        self.send(Method::DELETE, endpoint, None, None, &opts).await
    }

    /// Upload a multipart form
    ///
    /// The content type header is left to the transport so the multipart
    /// boundary is set correctly. When a progress callback is supplied it
    /// receives the integer percentage of payload bytes sent on each chunk.
    /// Resolves with the parsed JSON response, falling back to the raw text
    /// when the body is not valid JSON.
    pub async fn upload(
        &self,
        endpoint: &str,
        request: UploadRequest,
        on_progress: Option<ProgressFn>,
        opts: RequestOptions,
    ) -> ApiResult<Value> {
        let total = request.total_bytes();
        let sent = Arc::new(AtomicU64::new(0));

        let mut form = Form::new();
        for (name, value) in request.fields {
            form = form.text(name, value);
        }
        for file in request.files {
            let part = match &on_progress {
                Some(callback) => {
                    let len = file.len();
                    let stream =
                        progress_stream(file.data, Arc::clone(&sent), total, Arc::clone(callback));
                    Part::stream_with_length(Body::wrap_stream(stream), len)
                }
                None => Part::bytes(file.data.to_vec()),
            };
            let part = part
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|err| {
                    ApiError::Validation(format!("Invalid upload content type: {err}"))
                })?;
            form = form.part(file.field, part);
        }

        let url = self.url_for(endpoint, None);
        debug!("UPLOAD {} ({} bytes)", url, total);
        let builder = self.apply_headers(self.http.post(&url).multipart(form), &opts);
        let response = self.dispatch(builder, opts.cancel.as_ref()).await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(self.handle_unauthorized());
        }
        let text = response.text().await.map_err(ApiError::Network)?;
        if !status.is_success() {
            return Err(http_error(status, serde_json::from_str(&text).ok()));
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&QueryParams>,
        body: Option<&Value>,
        opts: &RequestOptions,
    ) -> ApiResult<Option<Value>> {
        let url = self.url_for(endpoint, params);
        debug!("{} {}", method, url);

        let mut builder = self.http.request(method, &url);
        builder = self.apply_headers(builder, opts);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = self.dispatch(builder, opts.cancel.as_ref()).await?;
        self.process_response(response).await
    }

    fn url_for(&self, endpoint: &str, params: Option<&QueryParams>) -> String {
        let mut url = if endpoint.starts_with('/') {
            format!("{}{}", self.config.api_url, endpoint)
        } else {
            format!("{}/{}", self.config.api_url, endpoint)
        };
        if let Some(params) = params
            && !params.is_empty()
        {
            url.push('?');
            url.push_str(&params.encode());
        }
        url
    }

    fn apply_headers(&self, mut builder: RequestBuilder, opts: &RequestOptions) -> RequestBuilder {
        if let Some(token) = self.tokens.get() {
            builder = builder.bearer_auth(token);
        }
        for (name, value) in &opts.headers {
            builder = builder.header(name, value);
        }
        builder
    }

    async fn dispatch(
        &self,
        builder: RequestBuilder,
        cancel: Option<&CancellationToken>,
    ) -> ApiResult<Response> {
        let request = builder.send();
        let result = match cancel {
            Some(token) => tokio::select! {
                () = token.cancelled() => return Err(ApiError::Cancelled),
                result = request => result,
            },
            None => request.await,
        };
        result.map_err(ApiError::Network)
    }

    async fn process_response(&self, response: Response) -> ApiResult<Option<Value>> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(self.handle_unauthorized());
        }
        if !status.is_success() {
            return Err(http_error(status, response.json().await.ok()));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await.map_err(ApiError::Network)?;
        let value = serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(Some(value))
    }

    /// Token teardown and redirect on a 401. The token is cleared before the
    /// hook runs so the hook observes an anonymous session.
    fn handle_unauthorized(&self) -> ApiError {
        self.tokens.clear();
        warn!(
            "Session rejected by server, redirecting to {}",
            self.config.login_url()
        );
        if let Some(hook) = &self.on_unauthorized {
            hook.on_unauthorized();
        }
        ApiError::Unauthorized
    }
}

/// Best-effort error message: JSON `message`/`detail` field, then status
/// text, then a generic fallback
fn http_error(status: StatusCode, body: Option<Value>) -> ApiError {
    let message = body
        .as_ref()
        .and_then(|b| b.get("message").or_else(|| b.get("detail")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("An error occurred")
                .to_string()
        });
    ApiError::Http {
        status: status.as_u16(),
        message,
        body,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use common::ClientConfig;
    use serde_json::json;

    use super::*;
    use crate::token::MemoryTokenStore;

    fn client() -> ApiClient {
        ApiClient::new(
            ClientConfig::new("http://localhost:8000/api"),
            Arc::new(MemoryTokenStore::new()),
        )
    }

    #[test]
    fn endpoints_are_joined_with_a_single_slash() {
        let client = client();
        assert_eq!(
            client.url_for("/videos/featured", None),
            "http://localhost:8000/api/videos/featured"
        );
        assert_eq!(
            client.url_for("videos/featured", None),
            "http://localhost:8000/api/videos/featured"
        );
    }

    #[test]
    fn query_params_are_appended_when_present() {
        let client = client();
        let params = QueryParams::new().set("limit", 5).set_opt("page", None::<u32>);
        assert_eq!(
            client.url_for("/videos", Some(&params)),
            "http://localhost:8000/api/videos?limit=5"
        );

        let empty = QueryParams::new();
        assert_eq!(
            client.url_for("/videos", Some(&empty)),
            "http://localhost:8000/api/videos"
        );
    }

    #[test]
    fn error_messages_prefer_the_json_body() {
        let err = http_error(
            StatusCode::BAD_REQUEST,
            Some(json!({"message": "Rating must be between 0.5 and 5"})),
        );
        assert_eq!(
            err.to_string(),
            "HTTP 400: Rating must be between 0.5 and 5"
        );

        let err = http_error(StatusCode::NOT_FOUND, Some(json!({"detail": "Video not found"})));
        assert_eq!(err.to_string(), "HTTP 404: Video not found");

        let err = http_error(StatusCode::BAD_GATEWAY, None);
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn progress_capability_is_advertised() {
        assert!(client().supports_progress());
    }
}
