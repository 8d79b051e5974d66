//! Endpoint descriptor table.
//!
//! Every backend operation is described once: HTTP method, path template
//! with `{param}` placeholders, request media type and the operation's
//! error table (status code to the message the backend documents for it).
//! Service namespaces only pick a descriptor and fill in its parameters.

use reqwest::Method;

/// Request body encoding declared by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Json,
    Multipart,
}

impl MediaType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Multipart => "multipart/form-data",
        }
    }
}

/// Static description of one API operation.
#[derive(Debug)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub media_type: Option<MediaType>,
    pub errors: &'static [(u16, &'static str)],
}

impl Endpoint {
    /// Message declared for `status`, if any.
    #[must_use]
    pub fn error_message(&self, status: u16) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, message)| *message)
    }

    /// Names of the `{param}` placeholders in the path template.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        let path = self.path;
        path.split('{')
            .skip(1)
            .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
    }
}

const ACCESS_DENIED: &str = "Access denied - admin privileges required";
const SERVER_ERROR: &str = "Server error";
const INVALID_INPUT: &str = "Invalid input data";

macro_rules! media_type {
    () => {
        None
    };
    (json) => {
        Some(MediaType::Json)
    };
    (multipart) => {
        Some(MediaType::Multipart)
    };
}

macro_rules! endpoints {
    ($(
        $(#[$meta:meta])*
        $name:ident = $method:ident $path:literal $(as $media:ident)? $(=> { $($status:literal: $message:expr),* $(,)? })?;
    )*) => {
        $(
            $(#[$meta])*
            pub static $name: Endpoint = Endpoint {
                name: stringify!($name),
                method: Method::$method,
                path: $path,
                media_type: media_type!($($media)?),
                errors: &[$($(($status, $message)),*)?],
            };
        )*
    };
}

// Auth
endpoints! {
    AUTH_SIGNUP = POST "/api/auth/signup" as json;
    AUTH_SIGNIN = POST "/api/auth/signin" as json;
    AUTH_SIGNIN_ADMIN = POST "/api/auth/signin-admin" as json => {
        400: "Invalid credentials",
        403: "Access denied - not an admin",
    };
    AUTH_ADMIN_PROFILE = GET "/api/auth/admin-profile" => { 403: ACCESS_DENIED };
    AUTH_PARENT_PROFILE = GET "/api/auth/parent-profile";
}

// Parent accounts (admin)
endpoints! {
    PARENTS_LIST = GET "/api/user/parents" => { 403: ACCESS_DENIED };
    PARENTS_CREATE = POST "/api/user/parents" as json => {
        400: INVALID_INPUT,
        403: ACCESS_DENIED,
    };
    PARENTS_GET = GET "/api/user/parents/{id}" => {
        403: ACCESS_DENIED,
        404: "Parent not found",
    };
    PARENTS_UPDATE = PUT "/api/user/parents/{id}" as json => {
        400: INVALID_INPUT,
        403: ACCESS_DENIED,
        404: "Parent not found",
    };
    PARENTS_DELETE = DELETE "/api/user/parents/{id}" => {
        403: ACCESS_DENIED,
        404: "Parent not found",
        500: SERVER_ERROR,
    };
    PARENTS_ACTIVATE = PATCH "/api/user/parents/{id}/activate" => {
        403: ACCESS_DENIED,
        404: "Parent not found",
        500: SERVER_ERROR,
    };
    PARENTS_DEACTIVATE = PATCH "/api/user/parents/{id}/deactivate" => {
        403: ACCESS_DENIED,
        404: "Parent not found",
        500: SERVER_ERROR,
    };
    PARENTS_BY_STATUS = GET "/api/user/parents-by-status" => {
        403: ACCESS_DENIED,
        500: SERVER_ERROR,
    };
}

// Languages
endpoints! {
    LANGUAGES_LIST = GET "/api/languages" => {
        403: ACCESS_DENIED,
        500: SERVER_ERROR,
    };
    LANGUAGES_SELECT = POST "/api/languages/select" as json;
    LANGUAGES_CREATE = POST "/api/languages" as json => {
        400: "Invalid input data or language already exists",
        403: ACCESS_DENIED,
        500: SERVER_ERROR,
    };
    LANGUAGES_GET = GET "/api/languages/{id}" => {
        400: "Invalid language ID format",
        403: ACCESS_DENIED,
        404: "Language not found",
        500: SERVER_ERROR,
    };
    LANGUAGES_UPDATE = PUT "/api/languages/{id}" as json => {
        400: "Invalid input data or duplicate code",
        403: ACCESS_DENIED,
        404: "Language not found",
        500: SERVER_ERROR,
    };
    LANGUAGES_DELETE = DELETE "/api/languages/{id}" => {
        400: "Invalid language ID format",
        403: ACCESS_DENIED,
        404: "Language not found",
        500: SERVER_ERROR,
    };
}

// Domains
endpoints! {
    DOMAINS_LIST = GET "/api/domaines";
    DOMAINS_LIST_ALL = GET "/api/domaines/all" => {
        403: ACCESS_DENIED,
        500: SERVER_ERROR,
    };
    DOMAINS_CREATE = POST "/api/domaines" as multipart => {
        400: INVALID_INPUT,
        403: ACCESS_DENIED,
        500: SERVER_ERROR,
    };
    DOMAINS_GET = GET "/api/domaines/{id}" => {
        403: ACCESS_DENIED,
        404: "Domain not found",
        500: SERVER_ERROR,
    };
    DOMAINS_UPDATE = PUT "/api/domaines/{id}" as multipart => {
        400: INVALID_INPUT,
        403: ACCESS_DENIED,
        404: "Domain not found",
        500: SERVER_ERROR,
    };
    DOMAINS_DELETE = DELETE "/api/domaines/{id}" => {
        403: ACCESS_DENIED,
        404: "Domain not found",
        500: SERVER_ERROR,
    };
}

// Lessons
endpoints! {
    LESSONS_ADMIN_LIST = GET "/api/lesson/admin" => { 403: ACCESS_DENIED };
    LESSONS_ADMIN_CREATE = POST "/api/lesson/admin" as json => {
        400: INVALID_INPUT,
        403: ACCESS_DENIED,
    };
    LESSONS_CONTENT = GET "/api/lesson/{domainId}/{lessonNumber}";
    LESSONS_REVIEW = GET "/api/lesson/review";
    LESSONS_FINISH = POST "/api/lesson/finish" as json;
    LESSONS_FINISH_SENTENCE = POST "/api/lesson/finish-sentence" as json;
    LESSONS_LIST_ACTIVE = GET "/api/lesson";
    LESSONS_RESET_SCORE = POST "/api/lesson/reset-score";
}

// Words
endpoints! {
    WORDS_LIST = GET "/api/words/admin" => { 403: ACCESS_DENIED };
    WORDS_CREATE = POST "/api/words/admin" as multipart => {
        400: "Invalid input",
        403: ACCESS_DENIED,
        404: "Lesson not found",
    };
    WORDS_BULK_CREATE = POST "/api/words/admin/bulk" as multipart => {
        400: "Invalid input",
        403: ACCESS_DENIED,
        404: "Source lesson not found",
    };
    WORDS_GET = GET "/api/words/admin/{id}" => {
        403: ACCESS_DENIED,
        404: "Word not found",
    };
    WORDS_UPDATE = PUT "/api/words/admin/{id}" as multipart => {
        403: ACCESS_DENIED,
        404: "Word not found",
    };
    WORDS_DELETE = DELETE "/api/words/admin/{id}" => {
        403: ACCESS_DENIED,
        404: "Word not found",
    };
}

// Sentences
endpoints! {
    SENTENCES_LIST = GET "/api/sentences/admin" => { 403: ACCESS_DENIED };
    SENTENCES_CREATE = POST "/api/sentences/admin" as json => { 403: ACCESS_DENIED };
    SENTENCES_UPDATE = PUT "/api/sentences/admin/{id}" as json => {
        403: ACCESS_DENIED,
        404: "Sentence not found",
    };
    SENTENCES_DELETE = DELETE "/api/sentences/admin/{id}" => {
        403: ACCESS_DENIED,
        404: "Sentence not found",
    };
}

// Paragraphs
endpoints! {
    PARAGRAPHS_LIST = GET "/api/paragraphs/admin" => { 403: ACCESS_DENIED };
    PARAGRAPHS_CREATE = POST "/api/paragraphs/admin" as json => { 403: ACCESS_DENIED };
    PARAGRAPHS_UPDATE = PUT "/api/paragraphs/admin/{id}" as json => {
        403: ACCESS_DENIED,
        404: "Paragraph not found",
    };
    PARAGRAPHS_DELETE = DELETE "/api/paragraphs/admin/{id}" => {
        403: ACCESS_DENIED,
        404: "Paragraph not found",
    };
}

// Statistics
endpoints! {
    STATISTICS_DASHBOARD = GET "/api/statistics/dashboard" => {
        403: ACCESS_DENIED,
        500: SERVER_ERROR,
    };
    STATISTICS_PARENTS = GET "/api/statistics/parents" => {
        403: ACCESS_DENIED,
        500: SERVER_ERROR,
    };
    STATISTICS_CHILDREN = GET "/api/statistics/children" => {
        403: ACCESS_DENIED,
        500: SERVER_ERROR,
    };
}

// Children
endpoints! {
    CHILDREN_ADD = POST "/api/children/add-child" as json;
    CHILDREN_LIST = GET "/api/children";
    CHILDREN_DELETE = DELETE "/api/children/{childId}";
    CHILDREN_LOGIN = POST "/api/children/login" as json;
    CHILDREN_SETTINGS = PUT "/api/children/{childId}/settings" as multipart;
    CHILDREN_AVATAR = PUT "/api/children/{childId}/avatar" as multipart;
    CHILDREN_LEADERBOARD = GET "/api/children/leaderboard";
    CHILDREN_ME = GET "/api/children/me";
    CHILDREN_PROGRESS = GET "/api/children/progress";
    CHILDREN_RESET_LESSON_SCORE = POST "/api/children/reset-lesson-score" as json;
    CHILDREN_UPDATE_PROGRESS = PUT "/api/children/{childId}/progress" as json;
    CHILDREN_SELECT_DOMAIN = POST "/api/children/{childId}/select-domain" as json;
    CHILDREN_LANGUAGES = GET "/api/children/{childId}/languages";
    CHILDREN_ADD_LANGUAGE = POST "/api/children/{childId}/languages" as json;
    CHILDREN_REMOVE_LANGUAGE = DELETE "/api/children/{childId}/languages/{languageId}";
    CHILDREN_PRIMARY_LANGUAGE = PUT "/api/children/{childId}/primary-language" as json;
    CHILDREN_AVAILABLE_LANGUAGES = GET "/api/children/{childId}/available-languages";
    CHILDREN_CURRENT_DOMAIN = PUT "/api/children/{childId}/current-domain" as json;
    CHILDREN_LANGUAGE_PROGRESS = GET "/api/children/{childId}/language-progress";
    CHILDREN_CURRENT_LANGUAGE = GET "/api/children/{childId}/current-language";
    CHILDREN_SET_CURRENT_LANGUAGE = PUT "/api/children/{childId}/current-language" as json;
}

// Tests
endpoints! {
    TESTS_WORDS = GET "/api/tests/test-words";
    TESTS_CHECK_PRONUNCIATION = POST "/api/tests/check-pronunciation" as multipart;
    TESTS_FINISH = POST "/api/tests/finish" as json;
    TESTS_HISTORY = GET "/api/tests/history";
    TESTS_RECAP = GET "/api/tests/recap/{childId}";
    TESTS_GET = GET "/api/tests/{id}";
    TESTS_STATISTICS_BY_LANGUAGE = GET "/api/tests/statistics-by-language";
}

// User
endpoints! {
    USER_UPDATE_AVATAR = PUT "/api/user/avatar" as json => {
        400: "Missing avatar data",
        404: "User not found",
        500: SERVER_ERROR,
    };
    USER_VERIFY_PARENT_PIN = POST "/api/user/verify-parent-pin" as json => {
        400: "Missing parameters",
        401: "Invalid PIN code",
        404: "User or PIN not found",
        500: SERVER_ERROR,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_table_lookup() {
        assert_eq!(LANGUAGES_GET.error_message(404), Some("Language not found"));
        assert_eq!(LANGUAGES_GET.error_message(401), None);
        assert_eq!(
            AUTH_SIGNIN_ADMIN.error_message(403),
            Some("Access denied - not an admin")
        );
        assert!(AUTH_SIGNUP.errors.is_empty());
    }

    #[test]
    fn test_path_params() {
        let params: Vec<_> = LESSONS_CONTENT.path_params().collect();
        assert_eq!(params, vec!["domainId", "lessonNumber"]);
        assert_eq!(LANGUAGES_LIST.path_params().count(), 0);
        assert_eq!(
            CHILDREN_REMOVE_LANGUAGE.path_params().collect::<Vec<_>>(),
            vec!["childId", "languageId"]
        );
    }

    #[test]
    fn test_descriptor_fields() {
        assert_eq!(DOMAINS_CREATE.method, Method::POST);
        assert_eq!(DOMAINS_CREATE.media_type, Some(MediaType::Multipart));
        assert_eq!(PARENTS_ACTIVATE.method, Method::PATCH);
        assert_eq!(PARENTS_ACTIVATE.media_type, None);
        assert_eq!(PARAGRAPHS_CREATE.path, "/api/paragraphs/admin");
        assert_eq!(WORDS_BULK_CREATE.name, "WORDS_BULK_CREATE");
    }

    #[test]
    fn test_media_type_strings() {
        assert_eq!(MediaType::Json.as_str(), "application/json");
        assert_eq!(MediaType::Multipart.as_str(), "multipart/form-data");
    }
}
