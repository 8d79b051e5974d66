use linguaboard_models::envelope::{DataEnvelope, ListEnvelope};
use linguaboard_models::lessons::{CreateLessonDto, Lesson, LessonFilter};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct AdminLessonService;

impl AdminLessonService {
    pub fn list(client: &ApiClient, filter: &LessonFilter) -> ApiCall<ListEnvelope<Lesson>> {
        client.call(
            &endpoints::LESSONS_ADMIN_LIST,
            RequestParams::new().query(filter.to_query()),
        )
    }

    pub fn create(client: &ApiClient, dto: &CreateLessonDto) -> ApiCall<DataEnvelope<Lesson>> {
        call_json(
            client,
            &endpoints::LESSONS_ADMIN_CREATE,
            RequestParams::new(),
            dto,
        )
    }
}
