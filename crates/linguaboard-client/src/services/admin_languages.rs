use linguaboard_models::envelope::DataEnvelope;
use linguaboard_models::ids::LanguageId;
use linguaboard_models::languages::{
    CreateLanguageDto, DeletedLanguage, Language, UpdateLanguageDto,
};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct AdminLanguageService;

impl AdminLanguageService {
    pub fn create(client: &ApiClient, dto: &CreateLanguageDto) -> ApiCall<DataEnvelope<Language>> {
        call_json(client, &endpoints::LANGUAGES_CREATE, RequestParams::new(), dto)
    }

    pub fn get(client: &ApiClient, id: &LanguageId) -> ApiCall<DataEnvelope<Language>> {
        client.call(&endpoints::LANGUAGES_GET, RequestParams::new().path("id", id))
    }

    pub fn update(
        client: &ApiClient,
        id: &LanguageId,
        dto: &UpdateLanguageDto,
    ) -> ApiCall<DataEnvelope<Language>> {
        call_json(
            client,
            &endpoints::LANGUAGES_UPDATE,
            RequestParams::new().path("id", id),
            dto,
        )
    }

    pub fn delete(client: &ApiClient, id: &LanguageId) -> ApiCall<DataEnvelope<DeletedLanguage>> {
        client.call(&endpoints::LANGUAGES_DELETE, RequestParams::new().path("id", id))
    }
}
