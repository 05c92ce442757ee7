//! In-process HTTP tests for `POST /users`.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use user_ingest::Trace;
use user_ingest::domain::{BatchIngestService, TRACE_ID_HEADER};
use user_ingest::inbound::http::json_config;
use user_ingest::inbound::http::state::HttpState;
use user_ingest::inbound::http::users::create_users;
use user_ingest::outbound::memory::InMemoryUserStore;

#[fixture]
fn state() -> web::Data<HttpState> {
    let service = BatchIngestService::new(Arc::new(InMemoryUserStore::new()));
    web::Data::new(HttpState::new(Arc::new(service)))
}

macro_rules! init_app {
    ($state:expr) => {
        actix_test::init_service(
            App::new()
                .app_data($state.clone())
                .app_data(json_config(64 * 1024))
                .wrap(Trace)
                .service(create_users),
        )
        .await
    };
}

async fn post<S>(app: &S, body: Value) -> (StatusCode, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(&body)
        .to_request();
    let res = actix_test::call_service(app, req).await;
    let status = res.status();
    let value: Value = actix_test::read_body_json(res).await;
    (status, value)
}

fn aabhash() -> Value {
    json!({
        "name": "Aabhash",
        "pan": "ABCDE1234F",
        "mobile": "9876543210",
        "email": "aabhash@example.com"
    })
}

#[rstest]
#[actix_web::test]
async fn valid_user_is_created_with_identifier_one(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let (status, body) = post(&app, json!([aabhash()])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success_count": 1,
            "failed_count": 0,
            "users_created": [{
                "id": 1,
                "name": "Aabhash",
                "pan": "ABCDE1234F",
                "mobile": "9876543210",
                "email": "aabhash@example.com"
            }]
        })
    );
}

#[rstest]
#[actix_web::test]
async fn invalid_pan_is_reported(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let mut record = aabhash();
    record["pan"] = json!("ABCDE12345");
    let (status, body) = post(&app, json!([record])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success_count"], 0);
    assert_eq!(body["failed_count"], 1);
    assert_eq!(body["users_created"], json!([]));
    let failure = &body["validation_errors"][0];
    assert_eq!(failure["user"]["pan"], "ABCDE12345");
    assert!(
        failure["reason"]
            .as_str()
            .is_some_and(|reason| reason.contains("pan"))
    );
    assert_eq!(failure["violations"][0]["code"], "invalid_pan");
}

#[rstest]
#[actix_web::test]
async fn malformed_body_consumes_no_identifiers(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let (status, body) = post(&app, json!({"name": "Invalid JSON"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Invalid JSON format");
    assert!(body["details"]["reason"].is_string());
    assert!(body["traceId"].is_string());

    let (_, body) = post(&app, json!([aabhash()])).await;
    assert_eq!(body["users_created"][0]["id"], 1);
}

#[rstest]
#[case::positional(json!([["Aabhash", "ABCDE1234F", "9876543210", "aabhash@example.com"]]))]
#[case::empty(json!([[]]))]
#[actix_web::test]
async fn array_items_are_malformed_and_store_nothing(
    state: web::Data<HttpState>,
    #[case] payload: Value,
) {
    let app = init_app!(state);
    let (status, body) = post(&app, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Invalid JSON format");

    let (_, body) = post(&app, json!([aabhash()])).await;
    assert_eq!(body["users_created"][0]["id"], 1);
}

#[rstest]
#[actix_web::test]
async fn empty_array_yields_zero_counts(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let (status, body) = post(&app, json!([])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success_count": 0, "failed_count": 0, "users_created": []})
    );
}

#[rstest]
#[actix_web::test]
async fn identifiers_increase_across_requests(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let invalid = json!({"name": "Eve", "pan": "bad", "mobile": "1", "email": "nope"});

    let (_, first) = post(&app, json!([aabhash(), invalid.clone(), aabhash()])).await;
    let (_, second) = post(&app, json!([invalid, aabhash()])).await;

    let ids = |body: &Value| -> Vec<u64> {
        body["users_created"]
            .as_array()
            .map(|users| users.iter().filter_map(|u| u["id"].as_u64()).collect())
            .unwrap_or_default()
    };
    assert_eq!(ids(&first), vec![1, 2]);
    assert_eq!(ids(&second), vec![3]);
}

#[rstest]
#[actix_web::test]
async fn every_invalid_field_is_named(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let (_, body) = post(
        &app,
        json!([{"id": 99, "name": "  ", "pan": "abcde1234f", "mobile": "12345", "email": "x@"}]),
    )
    .await;

    let failure = &body["validation_errors"][0];
    let fields: Vec<&str> = failure["violations"]
        .as_array()
        .map(|v| v.iter().filter_map(|v| v["field"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(fields, vec!["name", "pan", "mobile", "email"]);
    assert!(failure["user"].get("id").is_none());
}

#[rstest]
#[actix_web::test]
async fn caller_trace_id_is_echoed(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let trace = "0f0e0d0c-0b0a-4908-8706-050403020100";
    let req = actix_test::TestRequest::post()
        .uri("/users")
        .insert_header((TRACE_ID_HEADER, trace))
        .set_json(json!([]))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(
        res.headers()
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some(trace)
    );
}
