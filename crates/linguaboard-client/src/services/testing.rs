use linguaboard_models::ids::{ChildId, TestId};
use linguaboard_models::learning::{
    PronunciationForm, PronunciationResult, ScoreResponse, Test, TestFinish, TestHistory,
    TestRecap, TestStatistics, TestWords,
};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

/// Learner tests (vocabulary and pronunciation).
pub struct TestService;

impl TestService {
    pub fn words(client: &ApiClient) -> ApiCall<TestWords> {
        client.call(&endpoints::TESTS_WORDS, RequestParams::new())
    }

    pub fn check_pronunciation(
        client: &ApiClient,
        form: &PronunciationForm,
    ) -> ApiCall<PronunciationResult> {
        client.call(
            &endpoints::TESTS_CHECK_PRONUNCIATION,
            RequestParams::new().form(form.to_form()),
        )
    }

    pub fn finish(client: &ApiClient, body: &TestFinish) -> ApiCall<ScoreResponse> {
        call_json(client, &endpoints::TESTS_FINISH, RequestParams::new(), body)
    }

    pub fn history(client: &ApiClient) -> ApiCall<Vec<TestHistory>> {
        client.call(&endpoints::TESTS_HISTORY, RequestParams::new())
    }

    pub fn recap(client: &ApiClient, child_id: &ChildId) -> ApiCall<TestRecap> {
        client.call(
            &endpoints::TESTS_RECAP,
            RequestParams::new().path("childId", child_id),
        )
    }

    pub fn get(client: &ApiClient, id: &TestId) -> ApiCall<Test> {
        client.call(&endpoints::TESTS_GET, RequestParams::new().path("id", id))
    }

    pub fn statistics_by_language(client: &ApiClient) -> ApiCall<TestStatistics> {
        client.call(&endpoints::TESTS_STATISTICS_BY_LANGUAGE, RequestParams::new())
    }
}
