use linguaboard_models::domains::{CreateDomainForm, Domain, DomainFilter, UpdateDomainForm};
use linguaboard_models::envelope::{ListEnvelope, MessageResponse};
use linguaboard_models::ids::DomainId;

use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

/// Domain management. Create and update are multipart so an image can be
/// uploaded with the record; both answer with the bare domain.
pub struct AdminDomainService;

impl AdminDomainService {
    pub fn list_all(client: &ApiClient, filter: &DomainFilter) -> ApiCall<ListEnvelope<Domain>> {
        client.call(
            &endpoints::DOMAINS_LIST_ALL,
            RequestParams::new().query(filter.to_query()),
        )
    }

    pub fn create(client: &ApiClient, form: &CreateDomainForm) -> ApiCall<Domain> {
        client.call(
            &endpoints::DOMAINS_CREATE,
            RequestParams::new().form(form.to_form()),
        )
    }

    pub fn get(client: &ApiClient, id: &DomainId) -> ApiCall<Domain> {
        client.call(&endpoints::DOMAINS_GET, RequestParams::new().path("id", id))
    }

    pub fn update(client: &ApiClient, id: &DomainId, form: &UpdateDomainForm) -> ApiCall<Domain> {
        client.call(
            &endpoints::DOMAINS_UPDATE,
            RequestParams::new().path("id", id).form(form.to_form()),
        )
    }

    pub fn delete(client: &ApiClient, id: &DomainId) -> ApiCall<MessageResponse> {
        client.call(&endpoints::DOMAINS_DELETE, RequestParams::new().path("id", id))
    }
}
