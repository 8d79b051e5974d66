//! # Linguaboard Models
//!
//! Domain models and DTOs for the Linguaboard API.
//!
//! This crate provides the data shapes exchanged with the backend: entity
//! records, response envelopes, request DTOs with their validation rules,
//! multipart forms and list filters.
//!
//! # Modules
//!
//! - [`auth`]: Sign-in/sign-up payloads and profiles
//! - [`children`]: Learner profiles and the child endpoints
//! - [`domains`]: Thematic domains, their forms and filters
//! - [`envelope`]: `successmessage`/`data` response envelopes
//! - [`ids`]: Strongly-typed identifiers
//! - [`languages`]: Languages
//! - [`learning`]: Opaque lesson and test payloads
//! - [`lessons`], [`words`], [`sentences`], [`paragraphs`]: Learning content
//! - [`statistics`]: Dashboard aggregates
//! - [`users`]: Parent accounts
//!
//! # Example
//!
//! ```ignore
//! use linguaboard_models::lessons::LessonFilter;
//! use linguaboard_models::value_types::LessonTypeFilter;
//! use linguaboard_models::users::CreateParentDto;
//! use validator::Validate;
//!
//! let query = LessonFilter::everything(LessonTypeFilter::Paragraph).to_query();
//! dto.validate()?;
//! ```

pub mod auth;
pub mod children;
pub mod domains;
pub mod envelope;
pub mod ids;
pub mod languages;
pub mod learning;
pub mod lessons;
pub mod paragraphs;
pub mod refs;
pub mod search;
pub mod sentences;
pub mod statistics;
pub mod users;
pub mod value_types;
pub mod words;

// Re-export commonly used types at crate root for convenience
pub use envelope::{DataEnvelope, DeletedId, ListEnvelope, MessageResponse};
pub use refs::{Identified, Ref};
pub use search::{Searchable, filter_search};

pub use auth::{
    AdminProfile, AdminProfileResponse, AdminSigninResponse, SigninRequest, SigninResponse,
    SignupRequest,
};
pub use domains::{CreateDomainForm, Domain, DomainFilter, UpdateDomainForm};
pub use languages::{CreateLanguageDto, DeletedLanguage, Language, UpdateLanguageDto};
pub use lessons::{ActiveLessonFilter, CreateLessonDto, Lesson, LessonFilter};
pub use paragraphs::{
    BlankPosition, CreateParagraphDto, Paragraph, ParagraphFilter, UpdateParagraphDto,
};
pub use sentences::{CreateSentenceDto, Sentence, SentenceFilter, UpdateSentenceDto};
pub use statistics::{AdminStatistics, ChildrenStatistics, DashboardStatistics, ParentStatistics};
pub use users::{
    CreateParentDto, DeletedParent, ParentProfile, ParentStatusFilter, ParentWithChildren,
    ParentWithDetails, ParentsByStatus, UpdateParentDto, User,
};
pub use words::{BulkWordResult, CreateWordForm, UpdateWordForm, Word, WordFilter};
