//! Authentication payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::UserId;
use crate::statistics::AdminStatistics;
use crate::users::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub successmessage: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// User summary returned by the admin sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginPayload {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// User summary returned by the parent sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginPayload {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub has_children: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSigninResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AdminLoginPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserLoginPayload>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfileResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub admin: Option<AdminProfile>,
    #[serde(default)]
    pub statistics: Option<AdminStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentProfileResponse {
    #[serde(default)]
    pub parent: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signin_request_validation() {
        let valid = SigninRequest {
            email: "admin@example.com".into(),
            password: "pw".into(),
        };
        assert!(valid.validate().is_ok());

        let no_password = SigninRequest {
            email: "admin@example.com".into(),
            password: String::new(),
        };
        assert!(no_password.validate().is_err());
    }

    #[test]
    fn test_admin_signin_response() {
        let response: AdminSigninResponse = serde_json::from_value(json!({
            "message": "Welcome",
            "token": "jwt.token.value",
            "user": {"_id": "a1", "name": "Root", "email": "root@example.com", "role": "admin"}
        }))
        .unwrap();
        assert_eq!(response.token.as_deref(), Some("jwt.token.value"));
        assert_eq!(response.user.unwrap().role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_admin_profile_response() {
        let response: AdminProfileResponse = serde_json::from_value(json!({
            "admin": {"id": "a1", "email": "root@example.com"},
            "statistics": {"totalUsers": 12, "activeUsers": 10}
        }))
        .unwrap();
        assert_eq!(response.admin.unwrap().id, "a1");
        assert_eq!(response.statistics.unwrap().active_users, Some(10));
    }
}
