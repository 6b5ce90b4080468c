//! User model and related functionality

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription tiers offered by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SubscriptionTier {
    #[default]
    Basic,
    Pro,
    Elite,
    Student,
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub subscription: SubscriptionTier,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub social_links: HashMap<String, String>,
    #[serde(default)]
    pub join_date: Option<DateTime<Utc>>,
    /// Uploads left this month under the current subscription
    #[serde(default)]
    pub uploads_remaining: Option<u32>,
    /// Streaming minutes left this month under the current subscription
    #[serde(default)]
    pub minutes_remaining: Option<u32>,
}

/// Successful login/signup response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

/// New account payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    pub is_student: bool,
}

/// Profile update payload; only the set fields are sent
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn users_deserialize_from_auth_payloads() {
        let response: AuthResponse = serde_json::from_value(json!({
            "access_token": "tok-1",
            "token_type": "bearer",
            "user": {
                "id": "student1",
                "name": "Film Student",
                "email": "student@example.com",
                "isStudent": true,
                "isVerified": false,
                "subscription": "Student",
                "school": "NYU Tisch School of the Arts"
            }
        }))
        .expect("deserialize");

        assert_eq!(response.access_token, "tok-1");
        assert!(response.user.is_student);
        assert!(!response.user.is_verified);
        assert_eq!(response.user.subscription, SubscriptionTier::Student);
        assert_eq!(response.user.uploads_remaining, None);
    }

    #[test]
    fn profile_updates_only_send_set_fields() {
        let update = ProfileUpdate {
            bio: Some("Award-winning filmmaker".to_string()),
            ..ProfileUpdate::default()
        };
        let body = serde_json::to_value(&update).expect("serialize");
        assert_eq!(body, json!({"bio": "Award-winning filmmaker"}));
    }

    #[test]
    fn signup_requests_never_serialize_the_confirmation() {
        let request = SignupRequest {
            name: "New Filmmaker".to_string(),
            email: "new@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
            is_student: false,
        };
        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            body,
            json!({
                "name": "New Filmmaker",
                "email": "new@example.com",
                "password": "hunter2hunter2",
                "isStudent": false
            })
        );
    }
}
