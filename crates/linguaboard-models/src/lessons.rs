//! Lesson domain models, DTOs and list filters.

use chrono::{DateTime, Utc};
use linguaboard_core::pagination::{DEFAULT_LIMIT, MAX_LIMIT};
use linguaboard_core::{QueryParams, SortOrder};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domains::Domain;
use crate::ids::{DomainId, LessonId};
use crate::refs::{Identified, Ref};
use crate::search::Searchable;
use crate::value_types::{Difficulty, LessonType, LessonTypeFilter};

pub type DomainRef = Ref<DomainId, Domain>;

/// Default sort column of the admin listings.
pub const DEFAULT_SORT_BY: &str = "createdAt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id", alias = "id")]
    pub id: LessonId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub lesson_type: Option<LessonType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Lesson {
    #[must_use]
    pub fn domain_id(&self) -> Option<&DomainId> {
        self.domain.as_ref().map(Ref::id)
    }
}

impl Identified for Lesson {
    type Id = LessonId;

    fn id(&self) -> &LessonId {
        &self.id
    }
}

impl Searchable for Lesson {
    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.description.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "domain is required"))]
    pub domain_id: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub lesson_type: Option<LessonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filters of the admin lesson listing (`GET /api/lesson/admin`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonFilter {
    pub domain_id: Option<DomainId>,
    pub difficulty: Option<Difficulty>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub lesson_type: LessonTypeFilter,
}

impl Default for LessonFilter {
    fn default() -> Self {
        Self {
            domain_id: None,
            difficulty: None,
            is_active: None,
            search: None,
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::Desc,
            lesson_type: LessonTypeFilter::All,
        }
    }
}

impl LessonFilter {
    /// A single page large enough to hold every lesson, as used to populate
    /// lesson pickers.
    #[must_use]
    pub fn everything(lesson_type: LessonTypeFilter) -> Self {
        Self {
            limit: MAX_LIMIT,
            lesson_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("domainId", self.domain_id.as_ref())
            .with_opt("difficulty", self.difficulty)
            .with_opt("isActive", self.is_active)
            .with_opt("search", self.search.as_deref())
            .with("page", self.page)
            .with("limit", self.limit)
            .with("sortBy", &self.sort_by)
            .with("sortOrder", self.sort_order)
            .with("type", self.lesson_type)
    }
}

/// Filters of the learner lesson listing (`GET /api/lesson`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLessonFilter {
    pub domain_id: Option<DomainId>,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ActiveLessonFilter {
    fn default() -> Self {
        Self {
            domain_id: None,
            difficulty: None,
            search: None,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ActiveLessonFilter {
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("domainId", self.domain_id.as_ref())
            .with_opt("difficulty", self.difficulty)
            .with_opt("search", self.search.as_deref())
            .with("page", self.page)
            .with("limit", self.limit)
    }
}
