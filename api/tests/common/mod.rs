#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use salus_api::application::http::server::http_server::{router, state};
use salus_api::args::Args;
use serde_json::json;
use test_context::AsyncTestContext;
use wiremock::{MockServer, ResponseTemplate};

pub const GEMINI_PATH: &str = "/models/gemini-1.5-flash:generateContent";
pub const TOKEN_PATH: &str = "/connect/token";
pub const SEARCH_PATH: &str = "/rest/server.api";

pub const VALID_MEAL_PLAN: &str = r#"{"meals": [{"meal_type": "breakfast", "name": "Greek yogurt bowl",
    "description": "Yogurt with berries", "calories": 420,
    "macros": {"carbs": 45, "protein": 32, "fat": 10}, "ingredients": ["yogurt", "berries", "honey"]}]}"#;

pub const VALID_WORKOUT_PLAN: &str = r#"{"workout_type": "strength", "duration_minutes": 40,
    "description": "Lower body strength", "exercises": [{"name": "Squat", "reps": 8, "sets": 4}]}"#;

/// Running API wired to mock Gemini and FatSecret upstreams and the shipped
/// schema and prompt files.
pub struct TestApp {
    pub server: TestServer,
    pub gemini: MockServer,
    pub fatsecret: MockServer,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        let gemini = MockServer::start().await;
        let fatsecret = MockServer::start().await;

        let token_url = format!("{}{}", fatsecret.uri(), TOKEN_PATH);
        let search_url = format!("{}{}", fatsecret.uri(), SEARCH_PATH);
        let gemini_url = gemini.uri();

        let args = Args::try_parse_from([
            "salus-api",
            "--gemini-api-key",
            "test-key",
            "--gemini-base-url",
            gemini_url.as_str(),
            "--fatsecret-client-id",
            "client-id",
            "--fatsecret-client-secret",
            "client-secret",
            "--fatsecret-token-url",
            token_url.as_str(),
            "--fatsecret-base-url",
            search_url.as_str(),
            "--schemas-dir",
            concat!(env!("CARGO_MANIFEST_DIR"), "/../schemas"),
            "--prompts-dir",
            concat!(env!("CARGO_MANIFEST_DIR"), "/../prompts"),
            "--max-body-bytes",
            "4096",
            "--metrics",
            "false",
        ])
        .expect("test arguments should parse");

        let state = state(Arc::new(args)).await.expect("state should build");
        let server =
            TestServer::new(router(state).expect("router should build")).expect("test server");

        TestApp {
            server,
            gemini,
            fatsecret,
        }
    }
}

pub fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    }))
}
