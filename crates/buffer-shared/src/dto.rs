//! Data Transfer Objects - request/response types for the API.
//!
//! Response types are explicit allow-lists: a field that is not declared here
//! never reaches a client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public representation of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub image: Option<String>,
    pub title: String,
    pub content: String,
    pub post_type: i32,
    pub date_posted: DateTime<Utc>,
    pub author: i32,
}

/// Public representation of a post type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTypeResponse {
    pub id: i32,
    pub name: String,
}

/// Public representation of a user.
///
/// Credentials and privilege flags are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub date_joined: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub is_active: bool,
}

/// Post fields after type extraction, checked against column limits.
#[derive(Debug, Clone, Default, Validate)]
pub struct PostPayload {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub image: Option<String>,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub post_type: Option<i32>,
    pub author: Option<i32>,
}

/// Post type fields after type extraction.
#[derive(Debug, Clone, Default, Validate)]
pub struct PostTypePayload {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub name: Option<String>,
}

/// Registration fields after type extraction.
#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterUserPayload {
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub username: Option<String>,
    #[validate(length(min = 8, message = "Ensure this field has at least 8 characters."))]
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_has_no_secret_fields() {
        let now = Utc::now();
        let json = serde_json::to_value(UserResponse {
            id: 1,
            email: "ada@example.com".into(),
            username: "ada".into(),
            date_joined: now,
            last_login: now,
            is_active: true,
        })
        .unwrap();

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for hidden in ["password", "password_hash", "is_admin", "is_staff", "is_superuser"] {
            assert!(!keys.contains(&hidden), "{hidden} leaked");
        }
    }

    #[test]
    fn register_payload_checks_email_and_password() {
        let payload = RegisterUserPayload {
            email: Some("not-an-email".into()),
            username: Some("ada".into()),
            password: Some("short".into()),
            is_active: None,
        };

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("username"));
    }

    #[test]
    fn absent_optional_fields_pass() {
        assert!(PostPayload::default().validate().is_ok());
    }
}
