//! Word models, multipart forms and list filters.

use chrono::{DateTime, Utc};
use linguaboard_core::pagination::DEFAULT_LIMIT;
use linguaboard_core::serde::deserialize_optional_string;
use linguaboard_core::{FilePart, FormData, QueryParams, SortOrder};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{DomainId, LessonId, WordId};
use crate::lessons::{DEFAULT_SORT_BY, Lesson};
use crate::refs::{Identified, Ref};
use crate::search::Searchable;
use crate::value_types::{Difficulty, SentenceDifficulty};

pub type LessonRef = Ref<LessonId, Lesson>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    #[serde(rename = "_id", alias = "id")]
    pub id: WordId,
    #[serde(default)]
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub word_audio: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_phonetic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_difficulty: Option<SentenceDifficulty>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sentence_audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson: Option<LessonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Word {
    /// Title of the owning lesson when it was expanded.
    #[must_use]
    pub fn lesson_title(&self) -> Option<&str> {
        self.lesson
            .as_ref()
            .and_then(Ref::expanded)
            .map(|lesson| lesson.title.as_str())
    }
}

impl Identified for Word {
    type Id = WordId;

    fn id(&self) -> &WordId {
        &self.id
    }
}

impl Searchable for Word {
    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.word.as_str())
            .chain(self.sentence.as_deref())
            .collect()
    }
}

/// Payload of word creation, single or bulk.
#[derive(Debug, Clone, Validate)]
pub struct CreateWordForm {
    #[validate(length(min = 1, message = "lesson is required"))]
    pub lesson_id: String,
    #[validate(length(min = 1, max = 200, message = "word is required"))]
    pub word: String,
    pub sentence: Option<String>,
    pub phonetic: Option<String>,
    pub images: Vec<FilePart>,
}

impl CreateWordForm {
    #[must_use]
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .text("lessonId", &self.lesson_id)
            .text("word", &self.word)
            .opt_text("sentence", self.sentence.as_ref())
            .opt_text("phonetic", self.phonetic.as_ref())
            .files("images", self.images.iter().cloned())
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateWordForm {
    pub lesson_id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub word: Option<String>,
    pub sentence: Option<String>,
    pub phonetic: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub word_audio: Option<String>,
    pub sentence_phonetic: Option<String>,
    pub sentence_difficulty: Option<SentenceDifficulty>,
    pub sentence_audio: Option<String>,
    /// Replace the stored images instead of appending to them.
    pub replace_images: Option<bool>,
    pub images: Vec<FilePart>,
}

impl UpdateWordForm {
    #[must_use]
    pub fn to_form(&self) -> FormData {
        FormData::new()
            .opt_text("lessonId", self.lesson_id.as_ref())
            .opt_text("word", self.word.as_ref())
            .opt_text("sentence", self.sentence.as_ref())
            .opt_text("phonetic", self.phonetic.as_ref())
            .opt_text("difficulty", self.difficulty)
            .opt_text("wordAudio", self.word_audio.as_ref())
            .opt_text("sentencePhonetic", self.sentence_phonetic.as_ref())
            .opt_text("sentenceDifficulty", self.sentence_difficulty)
            .opt_text("sentenceAudio", self.sentence_audio.as_ref())
            .opt_text("replaceImages", self.replace_images)
            .files("images", self.images.iter().cloned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedWord {
    #[serde(default)]
    pub domain_id: Option<DomainId>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Result of `POST /api/words/admin/bulk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkWordResult {
    #[serde(default)]
    pub successmessage: Option<String>,
    #[serde(default)]
    pub created_count: Option<u64>,
    #[serde(default)]
    pub skipped: Vec<SkippedWord>,
    #[serde(default)]
    pub data: Vec<Word>,
}

/// Filters of the admin word listing (`GET /api/words/admin`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFilter {
    pub difficulty: Option<Difficulty>,
    pub lesson_id: Option<LessonId>,
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub domain_id: Option<DomainId>,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            difficulty: None,
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

impl WordFilter {
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("difficulty", self.difficulty)
            .with_opt("lessonId", self.lesson_id.as_ref())
            .with_opt("search", self.search.as_deref())
            .with("page", self.page)
            .with("limit", self.limit)
            .with("sortBy", &self.sort_by)
            .with("sortOrder", self.sort_order)
            .with_opt("domainId", self.domain_id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linguaboard_core::FormValue;
    use serde_json::json;

    fn image(name: &str) -> FilePart {
        FilePart::new(name, "image/jpeg", vec![0xFF, 0xD8])
    }

    #[test]
    fn test_word_deserialize() {
        let word: Word = serde_json::from_value(json!({
            "_id": "w1",
            "word": "chat",
            "difficulty": "easy",
            "wordAudio": null,
            "images": ["https://cdn/img/1.jpg"],
            "sentenceDifficulty": "Hard",
            "lesson": {"_id": "l1", "title": "Pets"}
        }))
        .unwrap();
        assert_eq!(word.word_audio, None);
        assert_eq!(word.sentence_difficulty, Some(SentenceDifficulty::Hard));
        assert_eq!(word.lesson_title(), Some("Pets"));
    }

    #[test]
    fn test_word_blank_audio_is_unset() {
        let word: Word = serde_json::from_value(json!({
            "_id": "w1",
            "word": "chat",
            "wordAudio": "",
            "sentenceAudio": "uploads/chat.mp3"
        }))
        .unwrap();
        assert_eq!(word.word_audio, None);
        assert_eq!(word.sentence_audio.as_deref(), Some("uploads/chat.mp3"));
    }

    #[test]
    fn test_create_form_repeats_images() {
        let form = CreateWordForm {
            lesson_id: "l1".into(),
            word: "chien".into(),
            sentence: Some("Le chien dort".into()),
            phonetic: None,
            images: vec![image("a.jpg"), image("b.jpg")],
        }
        .to_form();

        let keys: Vec<_> = form.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["lessonId", "word", "sentence", "images", "images"]);
    }

    #[test]
    fn test_update_form_text_values() {
        let form = UpdateWordForm {
            difficulty: Some(Difficulty::Medium),
            sentence_difficulty: Some(SentenceDifficulty::Easy),
            replace_images: Some(true),
            ..Default::default()
        }
        .to_form();

        assert_eq!(form.get("difficulty"), Some(&FormValue::Text("medium".into())));
        assert_eq!(
            form.get("sentenceDifficulty"),
            Some(&FormValue::Text("Easy".into()))
        );
        assert_eq!(form.get("replaceImages"), Some(&FormValue::Text("true".into())));
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn test_create_form_validation() {
        let form = CreateWordForm {
            lesson_id: String::new(),
            word: "x".into(),
            sentence: None,
            phonetic: None,
            images: Vec::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_bulk_result() {
        let result: BulkWordResult = serde_json::from_value(json!({
            "successmessage": "Words created",
            "createdCount": 2,
            "skipped": [{"domainId": "d3", "reason": "duplicate"}],
            "data": [{"_id": "w1", "word": "a"}, {"_id": "w2", "word": "b"}]
        }))
        .unwrap();
        assert_eq!(result.created_count, Some(2));
        assert_eq!(result.skipped[0].reason.as_deref(), Some("duplicate"));
        assert_eq!(result.data.len(), 2);
    }

    #[test]
    fn test_filter_query() {
        let query = WordFilter {
            lesson_id: Some(LessonId::new("l1")),
            search: Some("ch".into()),
            ..Default::default()
        }
        .to_query();
        let keys: Vec<_> = query.pairs().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["lessonId", "search", "page", "limit", "sortBy", "sortOrder"]
        );
    }
}
