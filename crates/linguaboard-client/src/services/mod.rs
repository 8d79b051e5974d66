//! Service namespaces.
//!
//! One unit struct per backend area, each method a thin typed call into
//! [`ApiClient::call`](crate::ApiClient::call) using its endpoint
//! descriptor. Services add no behavior of their own: errors from the
//! request layer pass through unchanged.

mod admin_domains;
mod admin_languages;
mod admin_lessons;
mod admin_paragraphs;
mod admin_parents;
mod admin_sentences;
mod admin_statistics;
mod admin_words;
mod auth;
mod children;
mod domains;
mod languages;
mod lessons;
mod testing;
mod users;

pub use admin_domains::AdminDomainService;
pub use admin_languages::AdminLanguageService;
pub use admin_lessons::AdminLessonService;
pub use admin_paragraphs::AdminParagraphService;
pub use admin_parents::AdminParentService;
pub use admin_sentences::AdminSentenceService;
pub use admin_statistics::AdminStatisticsService;
pub use admin_words::AdminWordService;
pub use auth::AuthService;
pub use children::ChildService;
pub use domains::DomainService;
pub use languages::LanguageService;
pub use lessons::LessonService;
pub use testing::TestService;
pub use users::UserService;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::request::RequestParams;

/// Calls `endpoint` with `body` as its JSON payload.
fn call_json<T, B>(
    client: &ApiClient,
    endpoint: &'static Endpoint,
    params: RequestParams,
    body: &B,
) -> ApiCall<T>
where
    T: DeserializeOwned + Send + 'static,
    B: Serialize + ?Sized,
{
    match params.json(body) {
        Ok(params) => client.call(endpoint, params),
        Err(e) => ApiCall::failed(e),
    }
}
