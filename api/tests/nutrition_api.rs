mod common;

use axum::http::StatusCode;
use common::{SEARCH_PATH, TOKEN_PATH, TestApp};
use salus_api::application::http::server::api_entities::api_error::ApiErrorResponse;
use serde_json::{Value, json};
use test_context::test_context;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn mount_token(ctx: &TestApp, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-1",
            "token_type": "Bearer",
            "expires_in": 86400,
            "scope": "basic"
        })))
        .expect(expected_calls)
        .mount(&ctx.fatsecret)
        .await;
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_search_proxies_upstream_body_and_reuses_token(ctx: &mut TestApp) {
    mount_token(ctx, 1).await;

    let upstream = json!({
        "foods": {
            "food": [{"food_id": "33691", "food_name": "Chicken Breast"}],
            "max_results": "20",
            "total_results": "1"
        }
    });
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("method", "foods.search"))
        .and(query_param("search_expression", "chicken breast"))
        .and(query_param("format", "json"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .expect(2)
        .mount(&ctx.fatsecret)
        .await;

    for _ in 0..2 {
        let response = ctx
            .server
            .get("/search")
            .add_query_param("query", "chicken breast")
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), upstream);
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_search_without_query_is_bad_request(ctx: &mut TestApp) {
    mount_token(ctx, 0).await;

    let response = ctx.server.get("/search").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error = response.json::<ApiErrorResponse>();
    assert_eq!(error.message, "Missing 'query' parameter");
    assert_eq!(error.status, 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_search_upstream_error_is_internal_error(ctx: &mut TestApp) {
    mount_token(ctx, 1).await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&ctx.fatsecret)
        .await;

    let response = ctx
        .server
        .get("/search")
        .add_query_param("query", "rice")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json::<ApiErrorResponse>().message.contains("API error"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_search_token_failure_is_internal_error(ctx: &mut TestApp) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&ctx.fatsecret)
        .await;

    let response = ctx
        .server
        .get("/search")
        .add_query_param("query", "rice")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        response
            .json::<ApiErrorResponse>()
            .message
            .contains("authentication error")
    );
}
