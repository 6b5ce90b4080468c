//! Authentication provider
//!
//! Owns all transitions of the session state machine. The token store lives
//! behind the injected [`ApiClient`]; the invariant is that the token and the
//! user state change together: login persists both, logout and a 401 clear
//! both.

use std::sync::Arc;

use api::{ApiClient, RequestOptions};
use common::{ApiError, ApiResult};
use serde_json::{Value, json};
use tracing::info;

use crate::models::{AuthResponse, ProfileUpdate, SignupRequest, User};
use crate::state::{AuthState, SessionState};
use crate::{decode, to_body, validation};

pub struct AuthProvider {
    client: Arc<ApiClient>,
    state: SessionState,
}

impl AuthProvider {
    pub fn new(client: Arc<ApiClient>, state: SessionState) -> Self {
        Self { client, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Log in with email and password
    ///
    /// Validates locally first; invalid input never reaches the network.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        validation::validate_email(email).map_err(ApiError::Validation)?;
        validation::validate_required("Password", password).map_err(ApiError::Validation)?;

        let body = json!({"email": email, "password": password});
        self.authenticate("/auth/login", body).await
    }

    /// Create a new account and sign in
    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<User> {
        validation::validate_required("Name", &request.name).map_err(ApiError::Validation)?;
        validation::validate_email(&request.email).map_err(ApiError::Validation)?;
        validation::validate_password(&request.password).map_err(ApiError::Validation)?;
        validation::validate_password_confirmation(&request.password, &request.confirm_password)
            .map_err(ApiError::Validation)?;

        let body = to_body(request)?;
        self.authenticate("/auth/register", body).await
    }

    /// Drop the session: token and user state are cleared together
    pub fn logout(&self) {
        info!("Logging out");
        self.client.tokens().clear();
        self.state.transition(AuthState::Anonymous);
    }

    /// Submit the emailed student verification code
    pub async fn verify_student_code(&self, email: &str, code: &str) -> ApiResult<()> {
        validation::validate_student_code(code).map_err(ApiError::Validation)?;

        let body = json!({"email": email, "code": code});
        self.client
            .post("/auth/verify-student", Some(&body), RequestOptions::new())
            .await?;

        // Echo the verification onto the signed-in user
        self.state.update_user(|user| user.is_verified = true);
        info!("Student account verified");
        Ok(())
    }

    /// Update the signed-in user's profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        let body = to_body(update)?;
        let response = self
            .client
            .put("/users/profile", Some(&body), RequestOptions::new())
            .await?;
        let user: User = decode(response)?;

        self.state.update_user(|current| *current = user.clone());
        Ok(user)
    }

    async fn authenticate(&self, endpoint: &str, body: Value) -> ApiResult<User> {
        self.state.transition(AuthState::Authenticating);
        match self.exchange(endpoint, &body).await {
            Ok(user) => {
                info!("Authenticated as {}", user.id);
                self.state.transition(AuthState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.state.transition(AuthState::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    async fn exchange(&self, endpoint: &str, body: &Value) -> ApiResult<User> {
        let response = self
            .client
            .post(endpoint, Some(body), RequestOptions::new())
            .await?;
        let auth: AuthResponse = decode(response)?;
        self.client.tokens().set(&auth.access_token);
        Ok(auth.user)
    }
}
