use linguaboard_models::children::{
    AddChildRequest, AvailableLanguages, ChildAvatarForm, ChildLanguages, ChildLoginRequest,
    ChildMe, ChildProgress, ChildResponse, ChildSearch, ChildSettingsForm, ChildrenList,
    CurrentLanguage, DomainIdRequest, LanguageIdRequest, LanguageProgress, LeaderboardEntry,
    LeaderboardFilter, ResetLessonScoreRequest, SelectDomainRequest, UpdateProgressRequest,
};
use linguaboard_models::envelope::MessageResponse;
use linguaboard_models::ids::{ChildId, LanguageId};

use super::call_json;
use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

/// Child profiles, called with a parent or child token.
pub struct ChildService;

fn child(child_id: &ChildId) -> RequestParams {
    RequestParams::new().path("childId", child_id)
}

impl ChildService {
    pub fn add(client: &ApiClient, body: &AddChildRequest) -> ApiCall<ChildResponse> {
        call_json(client, &endpoints::CHILDREN_ADD, RequestParams::new(), body)
    }

    pub fn list(client: &ApiClient, search: &ChildSearch) -> ApiCall<ChildrenList> {
        client.call(
            &endpoints::CHILDREN_LIST,
            RequestParams::new().query(search.to_query()),
        )
    }

    /// Deletes a child and answers with the remaining children.
    pub fn delete(client: &ApiClient, child_id: &ChildId) -> ApiCall<ChildrenList> {
        client.call(&endpoints::CHILDREN_DELETE, child(child_id))
    }

    pub fn login(client: &ApiClient, body: &ChildLoginRequest) -> ApiCall<ChildResponse> {
        call_json(client, &endpoints::CHILDREN_LOGIN, RequestParams::new(), body)
    }

    pub fn settings(
        client: &ApiClient,
        child_id: &ChildId,
        form: &ChildSettingsForm,
    ) -> ApiCall<ChildResponse> {
        client.call(
            &endpoints::CHILDREN_SETTINGS,
            child(child_id).form(form.to_form()),
        )
    }

    pub fn avatar(
        client: &ApiClient,
        child_id: &ChildId,
        form: &ChildAvatarForm,
    ) -> ApiCall<ChildResponse> {
        client.call(
            &endpoints::CHILDREN_AVATAR,
            child(child_id).form(form.to_form()),
        )
    }

    pub fn leaderboard(
        client: &ApiClient,
        filter: &LeaderboardFilter,
    ) -> ApiCall<Vec<LeaderboardEntry>> {
        client.call(
            &endpoints::CHILDREN_LEADERBOARD,
            RequestParams::new().query(filter.to_query()),
        )
    }

    pub fn me(client: &ApiClient) -> ApiCall<ChildMe> {
        client.call(&endpoints::CHILDREN_ME, RequestParams::new())
    }

    pub fn progress(client: &ApiClient) -> ApiCall<ChildProgress> {
        client.call(&endpoints::CHILDREN_PROGRESS, RequestParams::new())
    }

    pub fn reset_lesson_score(
        client: &ApiClient,
        body: &ResetLessonScoreRequest,
    ) -> ApiCall<MessageResponse> {
        call_json(
            client,
            &endpoints::CHILDREN_RESET_LESSON_SCORE,
            RequestParams::new(),
            body,
        )
    }

    pub fn update_progress(
        client: &ApiClient,
        child_id: &ChildId,
        body: &UpdateProgressRequest,
    ) -> ApiCall<ChildResponse> {
        call_json(
            client,
            &endpoints::CHILDREN_UPDATE_PROGRESS,
            child(child_id),
            body,
        )
    }

    pub fn select_domain(
        client: &ApiClient,
        child_id: &ChildId,
        body: &SelectDomainRequest,
    ) -> ApiCall<MessageResponse> {
        call_json(
            client,
            &endpoints::CHILDREN_SELECT_DOMAIN,
            child(child_id),
            body,
        )
    }

    pub fn languages(client: &ApiClient, child_id: &ChildId) -> ApiCall<ChildLanguages> {
        client.call(&endpoints::CHILDREN_LANGUAGES, child(child_id))
    }

    pub fn add_language(
        client: &ApiClient,
        child_id: &ChildId,
        body: &LanguageIdRequest,
    ) -> ApiCall<ChildResponse> {
        call_json(
            client,
            &endpoints::CHILDREN_ADD_LANGUAGE,
            child(child_id),
            body,
        )
    }

    pub fn remove_language(
        client: &ApiClient,
        child_id: &ChildId,
        language_id: &LanguageId,
    ) -> ApiCall<ChildResponse> {
        client.call(
            &endpoints::CHILDREN_REMOVE_LANGUAGE,
            child(child_id).path("languageId", language_id),
        )
    }

    pub fn primary_language(
        client: &ApiClient,
        child_id: &ChildId,
        body: &LanguageIdRequest,
    ) -> ApiCall<ChildResponse> {
        call_json(
            client,
            &endpoints::CHILDREN_PRIMARY_LANGUAGE,
            child(child_id),
            body,
        )
    }

    pub fn available_languages(
        client: &ApiClient,
        child_id: &ChildId,
    ) -> ApiCall<AvailableLanguages> {
        client.call(&endpoints::CHILDREN_AVAILABLE_LANGUAGES, child(child_id))
    }

    pub fn current_domain(
        client: &ApiClient,
        child_id: &ChildId,
        body: &DomainIdRequest,
    ) -> ApiCall<ChildResponse> {
        call_json(
            client,
            &endpoints::CHILDREN_CURRENT_DOMAIN,
            child(child_id),
            body,
        )
    }

    pub fn language_progress(client: &ApiClient, child_id: &ChildId) -> ApiCall<LanguageProgress> {
        client.call(&endpoints::CHILDREN_LANGUAGE_PROGRESS, child(child_id))
    }

    pub fn current_language(client: &ApiClient, child_id: &ChildId) -> ApiCall<CurrentLanguage> {
        client.call(&endpoints::CHILDREN_CURRENT_LANGUAGE, child(child_id))
    }

    pub fn set_current_language(
        client: &ApiClient,
        child_id: &ChildId,
        body: &LanguageIdRequest,
    ) -> ApiCall<ChildResponse> {
        call_json(
            client,
            &endpoints::CHILDREN_SET_CURRENT_LANGUAGE,
            child(child_id),
            body,
        )
    }
}
