use linguaboard_models::envelope::{DataEnvelope, DeletedId, ListEnvelope};
use linguaboard_models::ids::ParagraphId;
use linguaboard_models::paragraphs::{
    CreateParagraphDto, Paragraph, ParagraphFilter, UpdateParagraphDto,
};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct AdminParagraphService;

impl AdminParagraphService {
    pub fn list(client: &ApiClient, filter: &ParagraphFilter) -> ApiCall<ListEnvelope<Paragraph>> {
        client.call(
            &endpoints::PARAGRAPHS_LIST,
            RequestParams::new().query(filter.to_query()),
        )
    }

    pub fn create(
        client: &ApiClient,
        dto: &CreateParagraphDto,
    ) -> ApiCall<DataEnvelope<Paragraph>> {
        call_json(client, &endpoints::PARAGRAPHS_CREATE, RequestParams::new(), dto)
    }

    pub fn update(
        client: &ApiClient,
        id: &ParagraphId,
        dto: &UpdateParagraphDto,
    ) -> ApiCall<DataEnvelope<Paragraph>> {
        call_json(
            client,
            &endpoints::PARAGRAPHS_UPDATE,
            RequestParams::new().path("id", id),
            dto,
        )
    }

    pub fn delete(
        client: &ApiClient,
        id: &ParagraphId,
    ) -> ApiCall<DataEnvelope<DeletedId<ParagraphId>>> {
        client.call(&endpoints::PARAGRAPHS_DELETE, RequestParams::new().path("id", id))
    }
}
