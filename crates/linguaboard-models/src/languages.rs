//! Language domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::children::Child;
use crate::ids::{ChildId, LanguageId};
use crate::refs::Identified;
use crate::search::Searchable;

/// A language offered to learners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(rename = "_id", alias = "id")]
    pub id: LanguageId,
    /// Short code, stored uppercase by the backend (`EN`, `FR`).
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Language {
    type Id = LanguageId;

    fn id(&self) -> &LanguageId {
        &self.id
    }
}

impl Searchable for Language {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLanguageDto {
    #[validate(length(min = 1, max = 10, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLanguageDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 10))]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}

impl UpdateLanguageDto {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedLanguage {
    #[serde(default)]
    pub deleted_language: Option<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectLanguageRequest {
    pub child_id: ChildId,
    pub language_id: LanguageId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectLanguageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub selected_language: Option<Language>,
    #[serde(default)]
    pub child: Option<Child>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_deserialize() {
        let language: Language = serde_json::from_value(json!({
            "_id": "1",
            "code": "EN",
            "name": "English",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(language.id, "1");
        assert_eq!(language.code, "EN");
        assert!(language.created_at.is_some());
        assert!(language.updated_at.is_none());
    }

    #[test]
    fn test_language_serializes_without_absent_timestamps() {
        let language = Language {
            id: LanguageId::new("1"),
            code: "EN".into(),
            name: "English".into(),
            created_at: None,
            updated_at: None,
        };
        assert_eq!(
            serde_json::to_value(&language).unwrap(),
            json!({"_id": "1", "code": "EN", "name": "English"})
        );
    }

    #[test]
    fn test_language_search() {
        let language = Language {
            id: LanguageId::new("2"),
            code: "FR".into(),
            name: "French".into(),
            created_at: None,
            updated_at: None,
        };
        assert!(language.matches("fr"));
        assert!(language.matches("ench"));
        assert!(!language.matches("wolof"));
    }

    #[test]
    fn test_create_language_dto_validation() {
        let valid = CreateLanguageDto {
            code: "en".into(),
            name: "English".into(),
        };
        assert!(valid.validate().is_ok());

        let empty_code = CreateLanguageDto {
            code: "".into(),
            name: "English".into(),
        };
        assert!(empty_code.validate().is_err());

        let long_code = CreateLanguageDto {
            code: "x".repeat(11),
            name: "English".into(),
        };
        assert!(long_code.validate().is_err());
    }

    #[test]
    fn test_update_language_dto_skips_absent_fields() {
        let dto = UpdateLanguageDto {
            name: Some("Français".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        assert!(!dto.is_empty());
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"name": "Français"})
        );
    }
}
