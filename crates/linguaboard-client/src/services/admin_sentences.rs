use linguaboard_models::envelope::{DataEnvelope, DeletedId, ListEnvelope};
use linguaboard_models::ids::SentenceId;
use linguaboard_models::sentences::{
    CreateSentenceDto, Sentence, SentenceFilter, UpdateSentenceDto,
};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct AdminSentenceService;

impl AdminSentenceService {
    pub fn list(client: &ApiClient, filter: &SentenceFilter) -> ApiCall<ListEnvelope<Sentence>> {
        client.call(
            &endpoints::SENTENCES_LIST,
            RequestParams::new().query(filter.to_query()),
        )
    }

    pub fn create(client: &ApiClient, dto: &CreateSentenceDto) -> ApiCall<DataEnvelope<Sentence>> {
        call_json(client, &endpoints::SENTENCES_CREATE, RequestParams::new(), dto)
    }

    pub fn update(
        client: &ApiClient,
        id: &SentenceId,
        dto: &UpdateSentenceDto,
    ) -> ApiCall<DataEnvelope<Sentence>> {
        call_json(
            client,
            &endpoints::SENTENCES_UPDATE,
            RequestParams::new().path("id", id),
            dto,
        )
    }

    pub fn delete(
        client: &ApiClient,
        id: &SentenceId,
    ) -> ApiCall<DataEnvelope<DeletedId<SentenceId>>> {
        client.call(&endpoints::SENTENCES_DELETE, RequestParams::new().path("id", id))
    }
}
