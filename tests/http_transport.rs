mod common;

use std::time::Duration;

use axum::extract::{Multipart, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use linguaboard::linguaboard_client::endpoints;
use linguaboard::linguaboard_client::services::{
    AdminLanguageService, AdminParentService, LanguageService,
};
use linguaboard::linguaboard_client::{ApiClient, RequestParams, StaticToken};
use linguaboard::linguaboard_config::ApiConfig;
use linguaboard::linguaboard_core::{ApiError, FilePart, FormData};
use linguaboard::linguaboard_models::CreateLanguageDto;
use linguaboard::linguaboard_models::ids::LanguageId;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;

async fn echo_language(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (
        StatusCode::CREATED,
        Json(json!({
            "successmessage": auth,
            "data": {"_id": "lang-1", "code": body["code"], "name": body["name"]}
        })),
    )
}

async fn language_by_id(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": format!("no language {}", id)})),
    )
}

async fn describe_multipart(mut multipart: Multipart) -> Json<Value> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        fields.push(json!({
            "name": name,
            "fileName": file_name,
            "contentType": content_type,
            "len": bytes.len(),
        }));
    }
    Json(json!({ "fields": fields }))
}

async fn forbidden() -> (StatusCode, Json<Value>) {
    (StatusCode::FORBIDDEN, Json(json!({"message": "admins only"})))
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(30)).await;
    Json(json!([]))
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/languages", post(echo_language).get(slow))
        .route("/api/languages/{id}", get(language_by_id))
        .route("/api/domaines", post(describe_multipart))
        .route("/api/user/parents", get(forbidden));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str, token: Option<&str>) -> ApiClient {
    let config = ApiConfig::new(base_url).with_timeout(Duration::from_secs(10));
    ApiClient::builder(config)
        .token_provider(Arc::new(StaticToken(token.map(str::to_string))))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_json_round_trip_over_http() {
    let base_url = spawn_server().await;
    let client = client(&base_url, Some("secret"));

    let dto = CreateLanguageDto {
        code: "FR".into(),
        name: "French".into(),
    };
    let envelope = AdminLanguageService::create(&client, &dto).await.unwrap();

    assert_eq!(envelope.successmessage.as_deref(), Some("Bearer secret"));
    let language = envelope.into_data().unwrap();
    assert_eq!(language.id, LanguageId::new("lang-1"));
    assert_eq!(language.name, "French");
}

#[tokio::test]
async fn test_multipart_fields_reach_the_server() {
    let base_url = spawn_server().await;
    let client = client(&base_url, None);

    let form = FormData::new()
        .text("name", "Animals")
        .text("languageCode", "FR")
        .file("image", FilePart::new("cat.png", "image/png", vec![0u8; 16]));
    let reply: Value = client
        .call(&endpoints::DOMAINS_CREATE, RequestParams::new().form(form))
        .await
        .unwrap();

    let fields = reply["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0]["name"], "name");
    assert_eq!(fields[1]["name"], "languageCode");
    assert_eq!(fields[2]["name"], "image");
    assert_eq!(fields[2]["fileName"], "cat.png");
    assert_eq!(fields[2]["contentType"], "image/png");
    assert_eq!(fields[2]["len"], 16);
}

#[tokio::test]
async fn test_error_statuses_are_mapped() {
    let base_url = spawn_server().await;
    let client = client(&base_url, Some("secret"));

    let err = AdminParentService::list(&client).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Access denied - admin privileges required");
    assert_eq!(err.body(), Some(&json!({"message": "admins only"})));

    let err = AdminLanguageService::get(&client, &LanguageId::new("zz"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Language not found");
    assert_eq!(err.body(), Some(&json!({"message": "no language zz"})));
}

#[tokio::test]
async fn test_cancel_aborts_in_flight_http_request() {
    let base_url = spawn_server().await;
    let client = client(&base_url, None);

    let call = LanguageService::list(&client);
    let handle = call.cancel_handle();
    let task = tokio::spawn(call);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(handle.cancel());

    let result = tokio::time::timeout(Duration::from_secs(2), task)
        .await
        .expect("cancelled call should resolve promptly")
        .unwrap();
    assert!(matches!(result, Err(ApiError::Cancelled)));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{}", addr), None);
    let err = LanguageService::list(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
