use linguaboard_models::envelope::{ListEnvelope, MessageResponse};
use linguaboard_models::ids::DomainId;
use linguaboard_models::learning::{LessonContent, LessonFinish, LessonReview, ScoreResponse};
use linguaboard_models::lessons::{ActiveLessonFilter, Lesson};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

/// Learner-side lesson endpoints.
pub struct LessonService;

impl LessonService {
    pub fn content(
        client: &ApiClient,
        domain_id: &DomainId,
        lesson_number: u32,
    ) -> ApiCall<LessonContent> {
        client.call(
            &endpoints::LESSONS_CONTENT,
            RequestParams::new()
                .path("domainId", domain_id)
                .path("lessonNumber", lesson_number),
        )
    }

    pub fn review(client: &ApiClient) -> ApiCall<LessonReview> {
        client.call(&endpoints::LESSONS_REVIEW, RequestParams::new())
    }

    pub fn finish(client: &ApiClient, body: &LessonFinish) -> ApiCall<ScoreResponse> {
        call_json(client, &endpoints::LESSONS_FINISH, RequestParams::new(), body)
    }

    pub fn finish_sentence(client: &ApiClient, body: &LessonFinish) -> ApiCall<ScoreResponse> {
        call_json(
            client,
            &endpoints::LESSONS_FINISH_SENTENCE,
            RequestParams::new(),
            body,
        )
    }

    /// Active lessons, paged by the server. Uses `message` rather than
    /// `successmessage` in its envelope.
    pub fn list_active(
        client: &ApiClient,
        filter: &ActiveLessonFilter,
    ) -> ApiCall<ListEnvelope<Lesson>> {
        client.call(
            &endpoints::LESSONS_LIST_ACTIVE,
            RequestParams::new().query(filter.to_query()),
        )
    }

    pub fn reset_score(client: &ApiClient) -> ApiCall<MessageResponse> {
        client.call(&endpoints::LESSONS_RESET_SCORE, RequestParams::new())
    }
}
