//! User models: parent accounts as seen by the admin dashboard.
//!
//! A parent and a generic user share one shape; the admin endpoints add the
//! parent's children (and aggregate scores) on top of it.

use chrono::{DateTime, Utc};
use linguaboard_core::serde::deserialize_optional_string;
use linguaboard_core::QueryParams;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::ids::{ChildId, UserId};
use crate::refs::Identified;
use crate::search::Searchable;
use crate::value_types::{ParentPin, ParentStatus, PreferredLanguage, SubscriptionStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<PreferredLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parent account profile.
pub type ParentProfile = User;

impl User {
    /// Accounts without an explicit flag are shown as inactive.
    #[must_use]
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}

impl Identified for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), Some(self.email.as_str()), self.phone.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Child summary embedded in parent listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentChild {
    #[serde(rename = "_id", alias = "id")]
    pub id: ChildId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Parent profile together with its children, as returned by the admin
/// parent endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentWithChildren {
    #[serde(flatten)]
    pub parent: ParentProfile,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ParentChild>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_count: Option<u32>,
    /// Combined score of all children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_children_score: Option<f64>,
}

/// Detailed parent record of `GET /api/user/parents/{id}`.
pub type ParentWithDetails = ParentWithChildren;

impl ParentWithChildren {
    /// Reported child count, falling back to the embedded list.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children_count
            .map(|c| c as usize)
            .unwrap_or(self.children.len())
    }
}

impl Searchable for ParentWithChildren {
    fn search_fields(&self) -> Vec<&str> {
        self.parent.search_fields()
    }
}

fn validate_pin(pin: &str) -> Result<(), ValidationError> {
    ParentPin::validate(pin).map_err(|e| {
        let mut error = ValidationError::new("pin");
        error.message = Some(e.to_string().into());
        error
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateParentDto {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_pin"))]
    pub parent_pin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<PreferredLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateParentDto {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.password.is_none()
            && self.is_active.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedParentInfo {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedParent {
    #[serde(default)]
    pub deleted_parent: Option<DeletedParentInfo>,
    #[serde(default)]
    pub deleted_children_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentStatusCounts {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub active_count: Option<u64>,
    #[serde(default)]
    pub inactive_count: Option<u64>,
    #[serde(default)]
    pub requested_status: Option<String>,
}

/// Response of `GET /api/user/parents-by-status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentsByStatus {
    #[serde(default)]
    pub successmessage: Option<String>,
    #[serde(default)]
    pub data: Vec<ParentWithChildren>,
    #[serde(default)]
    pub statistics: Option<ParentStatusCounts>,
}

/// Query of `GET /api/user/parents-by-status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParentStatusFilter {
    pub status: ParentStatus,
}

impl ParentStatusFilter {
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with("status", self.status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    #[validate(length(min = 1, message = "avatar is required"))]
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyParentPinRequest {
    pub user_id: UserId,
    #[validate(custom(function = "validate_pin"))]
    pub pin: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_dto() -> CreateParentDto {
        CreateParentDto {
            name: "Awa Diop".into(),
            email: "awa@example.com".into(),
            password: "secret123".into(),
            phone: None,
            parent_pin: "4821".into(),
            preferred_language: Some(PreferredLanguage::Fr),
            country: None,
            timezone: None,
            subscription_status: None,
        }
    }

    #[test]
    fn test_parent_with_children_flattens_profile() {
        let parent: ParentWithChildren = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Awa",
            "email": "awa@example.com",
            "phone": "+221770000000",
            "isActive": true,
            "subscriptionStatus": "premium",
            "children": [{"_id": "c1", "name": "Fatou", "age": 7, "score": 120}],
            "totalChildrenScore": 120
        }))
        .unwrap();

        assert_eq!(parent.parent.id, "p1");
        assert!(parent.parent.active());
        assert_eq!(
            parent.parent.subscription_status,
            Some(SubscriptionStatus::Premium)
        );
        assert_eq!(parent.child_count(), 1);
        assert_eq!(parent.children[0].age, Some(7));
    }

    #[test]
    fn test_missing_active_flag_is_inactive() {
        let user: User =
            serde_json::from_value(json!({"_id": "p2", "name": "X", "email": "x@y.z"})).unwrap();
        assert!(!user.active());
    }

    #[test]
    fn test_parent_search_fields() {
        let user: User = serde_json::from_value(json!({
            "_id": "p3",
            "name": "Jean Dupont",
            "email": "jean@example.fr",
            "phone": "+33600000000"
        }))
        .unwrap();
        assert!(user.matches("dupont"));
        assert!(user.matches("EXAMPLE.FR"));
        assert!(user.matches("+336"));
        assert!(!user.matches("marie"));
    }

    #[test]
    fn test_create_parent_dto_validation() {
        assert!(create_dto().validate().is_ok());

        let bad_email = CreateParentDto {
            email: "not-an-email".into(),
            ..create_dto()
        };
        assert!(bad_email.validate().is_err());

        let bad_pin = CreateParentDto {
            parent_pin: "12".into(),
            ..create_dto()
        };
        let errors = bad_pin.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("parent_pin"));
    }

    #[test]
    fn test_create_parent_dto_wire_names() {
        let value = serde_json::to_value(create_dto()).unwrap();
        assert_eq!(value["parentPin"], "4821");
        assert_eq!(value["preferredLanguage"], "fr");
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn test_update_parent_dto() {
        let dto = UpdateParentDto {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(!dto.is_empty());
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({"isActive": false}));
        assert!(UpdateParentDto::default().is_empty());
    }

    #[test]
    fn test_status_filter_defaults_to_all() {
        let query = ParentStatusFilter::default().to_query();
        assert_eq!(query.get("status"), Some("all"));
    }

    #[test]
    fn test_parents_by_status() {
        let response: ParentsByStatus = serde_json::from_value(json!({
            "data": [],
            "statistics": {"totalCount": 10, "activeCount": 7, "inactiveCount": 3, "requestedStatus": "all"}
        }))
        .unwrap();
        let stats = response.statistics.unwrap();
        assert_eq!(stats.active_count, Some(7));
    }
}
