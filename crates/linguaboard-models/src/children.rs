//! Child (learner profile) models and the request/response shapes of the
//! `/api/children` endpoints.

use chrono::{DateTime, Utc};
use linguaboard_core::serde::deserialize_optional_string;
use linguaboard_core::{FilePart, FormData, QueryParams};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{ChildId, DomainId, LanguageId, UserId};
use crate::languages::Language;
use crate::learning::{ChildLanguageInfo, LanguageProgressSummary, ScoreHistory};
use crate::refs::{Identified, Ref};
use crate::value_types::LeaderboardPeriod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    #[serde(rename = "_id", alias = "id")]
    pub id: ChildId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_languages: Vec<Ref<LanguageId, Language>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_first_login: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Child {
    type Id = ChildId;

    fn id(&self) -> &ChildId {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddChildRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 1, max = 18))]
    pub age: u32,
}

/// `{ message, child, token }` returned by child creation, login and most
/// child updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub child: Option<Child>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildrenList {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildSearch {
    pub search: Option<String>,
}

impl ChildSearch {
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with_opt("search", self.search.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildLoginRequest {
    pub child_id: ChildId,
}

#[derive(Debug, Clone, Default)]
pub struct ChildSettingsForm {
    pub avatar: Option<FilePart>,
    pub selected_language: Option<String>,
    pub is_first_login: Option<bool>,
}

impl ChildSettingsForm {
    #[must_use]
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .opt_file("avatar", self.avatar.clone())
            .opt_text("selectedLanguage", self.selected_language.as_ref())
            .opt_text("isFirstLogin", self.is_first_login)
    }
}

#[derive(Debug, Clone)]
pub struct ChildAvatarForm {
    pub avatar: FilePart,
}

impl ChildAvatarForm {
    #[must_use]
    pub fn to_form(&self) -> FormData {
        FormData::new().file("avatar", self.avatar.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardFilter {
    pub period: LeaderboardPeriod,
}

impl LeaderboardFilter {
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with("period", self.period)
    }
}

/// Profile of the signed-in child (`GET /api/children/me`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildMe {
    #[serde(default)]
    pub id: Option<ChildId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub selected_language: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub is_first_login: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProgress {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub current_level: Option<String>,
    #[serde(default)]
    pub score_history: Vec<ScoreHistory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetLessonScoreRequest {
    pub child_id: ChildId,
    pub domain: String,
    pub lesson_number: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDomainRequest {
    pub language_id: LanguageId,
    pub domain_id: DomainId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageIdRequest {
    pub language_id: LanguageId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainIdRequest {
    pub domain_id: DomainId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildLanguages {
    #[serde(default)]
    pub languages: Vec<ChildLanguageInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableLanguages {
    #[serde(default)]
    pub available_languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageProgress {
    #[serde(default)]
    pub summary: Option<LanguageProgressSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLanguage {
    #[serde(default)]
    pub current_language: Option<Language>,
}
