//! Fill-in-the-blank paragraph models, DTOs and list filters.

use chrono::{DateTime, Utc};
use linguaboard_core::pagination::DEFAULT_LIMIT;
use linguaboard_core::serde::deserialize_optional_string;
use linguaboard_core::{QueryParams, SortOrder};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{DomainId, LessonId, ParagraphId};
use crate::lessons::DEFAULT_SORT_BY;
use crate::refs::{Identified, Ref};
use crate::search::Searchable;
use crate::words::LessonRef;

/// Character span of one blank inside `textIncomplete`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
}

impl BlankPosition {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(rename = "_id", alias = "id")]
    pub id: ParagraphId,
    #[serde(default)]
    pub text_incomplete: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers_ordered: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blank_positions: Vec<BlankPosition>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson: Option<LessonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Paragraph {
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

    #[must_use]
    pub fn domain_id(&self) -> Option<&DomainId> {
        self.lesson
            .as_ref()
            .and_then(Ref::expanded)
            .and_then(|lesson| lesson.domain_id())
    }
}

impl Identified for Paragraph {
    type Id = ParagraphId;

    fn id(&self) -> &ParagraphId {
        &self.id
    }
}

impl Searchable for Paragraph {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.text_incomplete.as_str()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphDto {
    #[validate(length(min = 1, message = "lesson is required"))]
    pub lesson_id: String,
    #[validate(length(min = 1, message = "text is required"))]
    pub text_incomplete: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub answers_ordered: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blank_positions: Vec<BlankPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub text_incomplete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers_ordered: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blank_positions: Option<Vec<BlankPosition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
}

/// Filters of the admin paragraph listing (`GET /api/paragraphs/admin`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphFilter {
    pub lesson_id: Option<LessonId>,
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub domain_id: Option<DomainId>,
}

impl Default for ParagraphFilter {
    fn default() -> Self {
        Self {
            lesson_id: None,
            search: None,
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::Desc,
            domain_id: None,
        }
    }
}

impl ParagraphFilter {
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("lessonId", self.lesson_id.as_ref())
            .with_opt("search", self.search.as_deref())
            .with("page", self.page)
            .with("limit", self.limit)
            .with("sortBy", &self.sort_by)
            .with("sortOrder", self.sort_order)
            .with_opt("domainId", self.domain_id.as_ref())
    }
}
