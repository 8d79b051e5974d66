use linguaboard_models::envelope::{DataEnvelope, DeletedId, ListEnvelope};
use linguaboard_models::ids::WordId;
use linguaboard_models::words::{BulkWordResult, CreateWordForm, UpdateWordForm, Word, WordFilter};

use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

/// Word management. Writes are multipart so images travel with the word.
pub struct AdminWordService;

impl AdminWordService {
    pub fn list(client: &ApiClient, filter: &WordFilter) -> ApiCall<ListEnvelope<Word>> {
        client.call(
            &endpoints::WORDS_LIST,
            RequestParams::new().query(filter.to_query()),
        )
    }

    pub fn create(client: &ApiClient, form: &CreateWordForm) -> ApiCall<DataEnvelope<Word>> {
        client.call(
            &endpoints::WORDS_CREATE,
            RequestParams::new().form(form.to_form()),
        )
    }

    /// Creates the word in every lesson equivalent to `form.lesson_id`
    /// across domains and languages.
    pub fn bulk_create(client: &ApiClient, form: &CreateWordForm) -> ApiCall<BulkWordResult> {
        client.call(
            &endpoints::WORDS_BULK_CREATE,
            RequestParams::new().form(form.to_form()),
        )
    }

    pub fn get(client: &ApiClient, id: &WordId) -> ApiCall<DataEnvelope<Word>> {
        client.call(&endpoints::WORDS_GET, RequestParams::new().path("id", id))
    }

    pub fn update(
        client: &ApiClient,
        id: &WordId,
        form: &UpdateWordForm,
    ) -> ApiCall<DataEnvelope<Word>> {
        client.call(
            &endpoints::WORDS_UPDATE,
            RequestParams::new().path("id", id).form(form.to_form()),
        )
    }

    pub fn delete(client: &ApiClient, id: &WordId) -> ApiCall<DataEnvelope<DeletedId<WordId>>> {
        client.call(&endpoints::WORDS_DELETE, RequestParams::new().path("id", id))
    }
}
