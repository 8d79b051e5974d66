use linguaboard_models::auth::{
    AdminProfileResponse, AdminSigninResponse, ParentProfileResponse, SigninRequest,
    SigninResponse, SignupRequest, SignupResponse,
};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct AuthService;

impl AuthService {
    pub fn signup(client: &ApiClient, body: &SignupRequest) -> ApiCall<SignupResponse> {
        call_json(client, &endpoints::AUTH_SIGNUP, RequestParams::new(), body)
    }

    pub fn signin(client: &ApiClient, body: &SigninRequest) -> ApiCall<SigninResponse> {
        call_json(client, &endpoints::AUTH_SIGNIN, RequestParams::new(), body)
    }

    /// Signs in an administrator. Non-admin accounts are rejected with 403.
    pub fn signin_admin(client: &ApiClient, body: &SigninRequest) -> ApiCall<AdminSigninResponse> {
        call_json(client, &endpoints::AUTH_SIGNIN_ADMIN, RequestParams::new(), body)
    }

    pub fn admin_profile(client: &ApiClient) -> ApiCall<AdminProfileResponse> {
        client.call(&endpoints::AUTH_ADMIN_PROFILE, RequestParams::new())
    }

    pub fn parent_profile(client: &ApiClient) -> ApiCall<ParentProfileResponse> {
        client.call(&endpoints::AUTH_PARENT_PROFILE, RequestParams::new())
    }
}
