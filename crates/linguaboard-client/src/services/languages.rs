use linguaboard_models::languages::{Language, SelectLanguageRequest, SelectLanguageResponse};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct LanguageService;

impl LanguageService {
    /// All languages, as a bare array.
    pub fn list(client: &ApiClient) -> ApiCall<Vec<Language>> {
        client.call(&endpoints::LANGUAGES_LIST, RequestParams::new())
    }

    /// Selects the language a child learns; answers with a refreshed token.
    pub fn select(
        client: &ApiClient,
        body: &SelectLanguageRequest,
    ) -> ApiCall<SelectLanguageResponse> {
        call_json(client, &endpoints::LANGUAGES_SELECT, RequestParams::new(), body)
    }
}
