//! Learner-side payloads.
//!
//! The backend does not publish schemas for lesson content, reviews, tests
//! and progress history, so they are carried as raw JSON and handed through
//! untouched.

use linguaboard_core::{FilePart, FormData};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type LessonContent = Value;
pub type LessonReview = Value;
pub type LessonFinish = Value;
pub type TestWords = Value;
pub type TestFinish = Value;
pub type TestHistory = Value;
pub type TestRecap = Value;
pub type Test = Value;
pub type TestStatistics = Value;
pub type ScoreHistory = Value;
pub type ChildLanguageInfo = Value;
pub type LanguageProgressSummary = Value;

/// `{ message, score }` returned when a lesson or test is finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PronunciationResult {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Recording submitted to the pronunciation checker.
#[derive(Debug, Clone, Default)]
pub struct PronunciationForm {
    pub audio: Option<FilePart>,
}

impl PronunciationForm {
    #[must_use]
    pub fn to_form(&self) -> FormData {
        FormData::new().opt_file("audio", self.audio.clone())
    }
}
