use linguaboard_models::envelope::{DataEnvelope, MessageResponse};
use linguaboard_models::users::{UpdateAvatarRequest, User, VerifyParentPinRequest};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct UserService;

impl UserService {
    pub fn update_avatar(
        client: &ApiClient,
        body: &UpdateAvatarRequest,
    ) -> ApiCall<DataEnvelope<User>> {
        call_json(client, &endpoints::USER_UPDATE_AVATAR, RequestParams::new(), body)
    }

    /// Checks a parent's PIN. A wrong PIN is a 401.
    pub fn verify_parent_pin(
        client: &ApiClient,
        body: &VerifyParentPinRequest,
    ) -> ApiCall<MessageResponse> {
        call_json(
            client,
            &endpoints::USER_VERIFY_PARENT_PIN,
            RequestParams::new(),
            body,
        )
    }
}
