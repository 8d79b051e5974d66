//! Domain (thematic unit) models, forms and filters.
//!
//! Domains are created and updated with `multipart/form-data` because they
//! carry an optional cover image, so their DTOs convert into a [`FormData`]
//! instead of serializing to JSON.

use chrono::{DateTime, Utc};
use linguaboard_core::serde::{deserialize_optional_lenient_i64, deserialize_optional_string};
use linguaboard_core::{FilePart, FormData, QueryParams};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{DomainId, LanguageId};
use crate::languages::Language;
use crate::refs::{Identified, Ref};
use crate::search::Searchable;
use crate::value_types::Difficulty;

pub type LanguageRef = Ref<LanguageId, Language>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(rename = "_id", alias = "id")]
    pub id: DomainId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub lesson_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_levels: Vec<Difficulty>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Domain {
    /// Code of the owning language when it was expanded, else its id.
    #[must_use]
    pub fn language_label(&self) -> Option<String> {
        self.language.as_ref().map(|lang| match lang.expanded() {
            Some(language) if !language.code.is_empty() => language.code.clone(),
            Some(language) => language.name.clone(),
            None => lang.id().to_string(),
        })
    }
}

impl Identified for Domain {
    type Id = DomainId;

    fn id(&self) -> &DomainId {
        &self.id
    }
}

impl Searchable for Domain {
    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.description.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateDomainForm {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    /// Code of the language the domain belongs to.
    #[validate(length(min = 1, max = 10, message = "language code is required"))]
    pub language_code: String,
    pub description: Option<String>,
    pub image: Option<FilePart>,
    pub lesson_count: Option<u32>,
}

impl CreateDomainForm {
    #[must_use]
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .text("name", &self.name)
            .text("languageCode", &self.language_code)
            .opt_text("description", self.description.as_ref())
            .opt_file("image", self.image.clone())
            .opt_text("lessonCount", self.lesson_count)
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateDomainForm {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub language_code: Option<String>,
    pub description: Option<String>,
    pub image: Option<FilePart>,
    pub lesson_count: Option<u32>,
    pub is_active: Option<bool>,
}

impl UpdateDomainForm {
    #[must_use]
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .opt_text("name", self.name.as_ref())
            .opt_text("languageCode", self.language_code.as_ref())
            .opt_text("description", self.description.as_ref())
            .opt_file("image", self.image.clone())
            .opt_text("lessonCount", self.lesson_count)
            .opt_text("isActive", self.is_active)
    }
}

/// Filters of the admin domain listing (`GET /api/domaines/all`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainFilter {
    /// Substring of the domain name.
    pub name: Option<String>,
    /// Language code to restrict to.
    pub filter_language: Option<String>,
}

impl DomainFilter {
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("name", non_blank(self.name.as_deref()))
            .with_opt("filterLanguage", non_blank(self.filter_language.as_deref()))
    }
}

// Empty filter inputs mean "no filter", not "match the empty string".
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linguaboard_core::FormValue;
    use serde_json::json;

    #[test]
    fn test_domain_with_language_id() {
        let domain: Domain = serde_json::from_value(json!({
            "_id": "d1",
            "name": "Animals",
            "language": "l1",
            "lessonCount": 4
        }))
        .unwrap();
        assert_eq!(domain.language_label().as_deref(), Some("l1"));
        assert_eq!(domain.lesson_count, Some(4));
        assert!(domain.available_levels.is_empty());
    }

    #[test]
    fn test_domain_echoed_from_multipart() {
        let domain: Domain = serde_json::from_value(json!({
            "_id": "d1",
            "name": "Animals",
            "image": "",
            "lessonCount": "4",
            "order": "2"
        }))
        .unwrap();
        assert!(domain.image.is_none());
        assert_eq!(domain.lesson_count, Some(4));
        assert_eq!(domain.order, Some(2));
    }

    #[test]
    fn test_domain_with_expanded_language() {
        let domain: Domain = serde_json::from_value(json!({
            "_id": "d1",
            "name": "Animals",
            "language": {"_id": "l1", "code": "FR", "name": "French"},
            "availableLevels": ["easy", "hard"],
            "isActive": true
        }))
        .unwrap();
        assert_eq!(domain.language_label().as_deref(), Some("FR"));
        assert_eq!(
            domain.available_levels,
            vec![Difficulty::Easy, Difficulty::Hard]
        );
    }

    #[test]
    fn test_create_form_fields() {
        let form = CreateDomainForm {
            name: "Food".into(),
            language_code: "EN".into(),
            description: None,
            image: Some(FilePart::new("food.png", "image/png", vec![1, 2])),
            lesson_count: Some(3),
        }
        .to_form();

        let keys: Vec<_> = form.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "languageCode", "image", "lessonCount"]);
        assert!(matches!(form.get("image"), Some(FormValue::File(_))));
        assert_eq!(form.get("lessonCount"), Some(&FormValue::Text("3".into())));
    }

    #[test]
    fn test_update_form_stringifies_booleans() {
        let form = UpdateDomainForm {
            is_active: Some(false),
            ..Default::default()
        }
        .to_form();
        assert_eq!(form.len(), 1);
        assert_eq!(form.get("isActive"), Some(&FormValue::Text("false".into())));
    }

    #[test]
    fn test_create_form_validation() {
        let form = CreateDomainForm {
            name: String::new(),
            language_code: "EN".into(),
            description: None,
            image: None,
            lesson_count: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_filter_omits_blank_values() {
        let query = DomainFilter {
            name: Some("  ".into()),
            filter_language: Some("EN".into()),
        }
        .to_query();
        let pairs: Vec<_> = query.pairs().collect();
        assert_eq!(pairs, vec![("filterLanguage", "EN")]);
    }
}
