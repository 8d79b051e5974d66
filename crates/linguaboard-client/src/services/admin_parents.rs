use linguaboard_models::envelope::{DataEnvelope, ListEnvelope};
use linguaboard_models::ids::UserId;
use linguaboard_models::users::{
    CreateParentDto, DeletedParent, ParentProfile, ParentStatusFilter, ParentWithChildren,
    ParentWithDetails, ParentsByStatus, UpdateParentDto,
};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

/// Parent account management (admin only).
pub struct AdminParentService;

impl AdminParentService {
    /// Every parent with their children, in one page.
    pub fn list(client: &ApiClient) -> ApiCall<ListEnvelope<ParentWithChildren>> {
        client.call(&endpoints::PARENTS_LIST, RequestParams::new())
    }

    pub fn create(client: &ApiClient, dto: &CreateParentDto) -> ApiCall<DataEnvelope<ParentProfile>> {
        call_json(client, &endpoints::PARENTS_CREATE, RequestParams::new(), dto)
    }

    pub fn get(client: &ApiClient, id: &UserId) -> ApiCall<DataEnvelope<ParentWithDetails>> {
        client.call(&endpoints::PARENTS_GET, RequestParams::new().path("id", id))
    }

    pub fn update(
        client: &ApiClient,
        id: &UserId,
        dto: &UpdateParentDto,
    ) -> ApiCall<DataEnvelope<ParentProfile>> {
        call_json(
            client,
            &endpoints::PARENTS_UPDATE,
            RequestParams::new().path("id", id),
            dto,
        )
    }

    /// Deletes the parent and all of their children.
    pub fn delete(client: &ApiClient, id: &UserId) -> ApiCall<DataEnvelope<DeletedParent>> {
        client.call(&endpoints::PARENTS_DELETE, RequestParams::new().path("id", id))
    }

    pub fn activate(client: &ApiClient, id: &UserId) -> ApiCall<DataEnvelope<ParentProfile>> {
        client.call(&endpoints::PARENTS_ACTIVATE, RequestParams::new().path("id", id))
    }

    pub fn deactivate(client: &ApiClient, id: &UserId) -> ApiCall<DataEnvelope<ParentProfile>> {
        client.call(&endpoints::PARENTS_DEACTIVATE, RequestParams::new().path("id", id))
    }

    pub fn list_by_status(
        client: &ApiClient,
        filter: &ParentStatusFilter,
    ) -> ApiCall<ParentsByStatus> {
        client.call(
            &endpoints::PARENTS_BY_STATUS,
            RequestParams::new().query(filter.to_query()),
        )
    }
}
