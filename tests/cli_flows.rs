mod common;

use common::{StubTransport, header, stub_state};
use linguaboard::cli::parents::ParentsCommand;
use linguaboard::cli::{self, Commands, Output};
use linguaboard::dashboard::load_overview;
use linguaboard::linguaboard_models::ids::UserId;
use reqwest::Method;
use serde_json::json;

const JSON: Output = Output { json: true };

fn signin(email: &str, password: &str) -> Commands {
    Commands::Signin {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

#[tokio::test]
async fn test_signin_stores_token_for_later_requests() {
    let transport = StubTransport::new();
    transport
        .respond_json(
            "POST",
            "/api/auth/signin-admin",
            200,
            json!({
                "message": "ok",
                "token": "tok-9",
                "user": {"_id": "a1", "name": "Root", "role": "admin"}
            }),
        )
        .respond_json("GET", "/api/languages", 200, json!([]));
    let (state, _dir) = stub_state(transport.clone()).await;

    cli::run(&state, signin("admin@example.com", "secret"), JSON)
        .await
        .unwrap();
    assert_eq!(state.session.token().await.as_deref(), Some("tok-9"));

    let sent = transport.last_request();
    assert_eq!(header(&sent, "authorization"), None);

    cli::run(
        &state,
        Commands::Languages(cli::languages::LanguagesCommand::List {
            search: None,
            page: 1,
            page_size: 10,
        }),
        JSON,
    )
    .await
    .unwrap();
    assert_eq!(header(&transport.last_request(), "authorization"), Some("Bearer tok-9"));
}

#[tokio::test]
async fn test_signin_without_token_keeps_session_empty() {
    let transport = StubTransport::new();
    transport.respond_json("POST", "/api/auth/signin-admin", 200, json!({"message": "ok"}));
    let (state, _dir) = stub_state(transport.clone()).await;

    let err = cli::run(&state, signin("admin@example.com", "secret"), JSON)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Sign-in failed: no token in response");
    assert!(!state.session.is_authenticated().await);
}

#[tokio::test]
async fn test_signin_rejects_invalid_email_before_sending() {
    let transport = StubTransport::new();
    let (state, _dir) = stub_state(transport.clone()).await;

    let err = cli::run(&state, signin("not-an-email", "secret"), JSON)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Validation failed"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_commands_require_a_session() {
    let transport = StubTransport::new();
    let (state, _dir) = stub_state(transport.clone()).await;

    let err = cli::run(&state, Commands::Overview, JSON).await.unwrap_err();

    assert!(err.to_string().contains("Not signed in"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_signout_clears_the_session() {
    let transport = StubTransport::new();
    let (state, _dir) = stub_state(transport).await;
    state
        .session
        .store_login("tok", &json!({"_id": "a1"}))
        .await
        .unwrap();

    cli::run(&state, Commands::Signout, JSON).await.unwrap();

    assert!(!state.session.is_authenticated().await);
    assert!(state.require_auth().await.is_err());
}

#[tokio::test]
async fn test_toggle_deactivates_an_active_parent() {
    let transport = StubTransport::new();
    transport
        .respond_json(
            "GET",
            "/api/user/parents/p1",
            200,
            json!({"data": {"_id": "p1", "name": "Ada", "isActive": true}}),
        )
        .respond_json(
            "PATCH",
            "/api/user/parents/p1/deactivate",
            200,
            json!({"data": {"_id": "p1", "isActive": false}}),
        );
    let (state, _dir) = stub_state(transport.clone()).await;
    state
        .session
        .store_login("tok", &json!({"_id": "a1"}))
        .await
        .unwrap();

    cli::run(
        &state,
        Commands::Parents(ParentsCommand::Toggle {
            id: UserId::new("p1"),
        }),
        JSON,
    )
    .await
    .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[1].method, Method::PATCH);
    assert_eq!(requests[1].url.path(), "/api/user/parents/p1/deactivate");
}

#[tokio::test]
async fn test_overview_survives_one_failing_section() {
    let transport = StubTransport::new();
    transport
        .respond_json("GET", "/api/statistics/dashboard", 500, json!({}))
        .respond_json(
            "GET",
            "/api/user/parents",
            200,
            json!({"data": [{"_id": "p1", "name": "Ada"}]}),
        )
        .respond_json(
            "GET",
            "/api/languages",
            200,
            json!([{"_id": "l1", "code": "EN", "name": "English"}]),
        )
        .respond_json(
            "GET",
            "/api/domaines/all",
            200,
            json!({"data": [{"_id": "d1", "name": "Animals"}]}),
        );
    let (state, _dir) = stub_state(transport.clone()).await;

    let overview = load_overview(&state).await;

    assert_eq!(overview.failures(), 1);
    assert_eq!(overview.statistics.unwrap_err().status(), Some(500));
    assert_eq!(overview.parents.unwrap().data.len(), 1);
    assert_eq!(overview.languages.unwrap()[0].code, "EN");
    assert_eq!(overview.domains.unwrap().data[0].name, "Animals");
    assert_eq!(transport.requests().len(), 4);
}
