//! Sentence models, DTOs and list filters.

use chrono::{DateTime, Utc};
use linguaboard_core::pagination::DEFAULT_LIMIT;
use linguaboard_core::serde::deserialize_optional_string;
use linguaboard_core::{QueryParams, SortOrder};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{DomainId, LessonId, SentenceId, WordId};
use crate::lessons::DEFAULT_SORT_BY;
use crate::refs::{Identified, Ref};
use crate::search::Searchable;
use crate::words::{LessonRef, Word};

pub type WordRef = Ref<WordId, Word>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    #[serde(rename = "_id", alias = "id")]
    pub id: SentenceId,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_word: Option<WordRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson: Option<LessonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Sentence {
    #[must_use]
    pub fn lesson_id(&self) -> Option<&LessonId> {
        self.lesson.as_ref().map(Ref::id)
    }

    #[must_use]
    pub fn lesson_title(&self) -> Option<&str> {
        self.lesson
            .as_ref()
            .and_then(Ref::expanded)
            .map(|lesson| lesson.title.as_str())
    }

    /// Domain of the owning lesson, known only when both were expanded.
    #[must_use]
    pub fn domain_id(&self) -> Option<&DomainId> {
        self.lesson
            .as_ref()
            .and_then(Ref::expanded)
            .and_then(|lesson| lesson.domain_id())
    }
}

impl Identified for Sentence {
    type Id = SentenceId;

    fn id(&self) -> &SentenceId {
        &self.id
    }
}

impl Searchable for Sentence {
    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.text.as_str())
            .chain(self.phonetic.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSentenceDto {
    #[validate(length(min = 1, message = "lesson is required"))]
    pub lesson_id: String,
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_word_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSentenceDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_word_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
}

/// Filters of the admin sentence listing (`GET /api/sentences/admin`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceFilter {
    pub lesson_id: Option<LessonId>,
    pub base_word_id: Option<WordId>,
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub domain_id: Option<DomainId>,
}

impl Default for SentenceFilter {
    fn default() -> Self {
        Self {
            lesson_id: None,
            base_word_id: None,
            search: None,
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::Desc,
            domain_id: None,
        }
    }
}

impl SentenceFilter {
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("lessonId", self.lesson_id.as_ref())
            .with_opt("baseWordId", self.base_word_id.as_ref())
            .with_opt("search", self.search.as_deref())
            .with("page", self.page)
            .with("limit", self.limit)
            .with("sortBy", &self.sort_by)
            .with("sortOrder", self.sort_order)
            .with_opt("domainId", self.domain_id.as_ref())
    }
}
