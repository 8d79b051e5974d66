use linguaboard_models::domains::Domain;

use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct DomainService;

impl DomainService {
    /// Active domains visible to learners.
    pub fn list(client: &ApiClient) -> ApiCall<Vec<Domain>> {
        client.call(&endpoints::DOMAINS_LIST, RequestParams::new())
    }
}
