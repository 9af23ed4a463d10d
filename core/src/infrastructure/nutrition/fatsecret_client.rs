use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, error, instrument};

use crate::domain::{
    common::{NutritionConfig, entities::app_errors::CoreError},
    nutrition::{
        entities::{CachedToken, TokenResponse},
        ports::NutritionClient,
    },
};

pub const DEFAULT_FATSECRET_TOKEN_URL: &str = "https://oauth.fatsecret.com/connect/token";
pub const DEFAULT_FATSECRET_BASE_URL: &str = "https://platform.fatsecret.com/rest/server.api";

/// FatSecret REST client authenticated with OAuth2 client credentials.
///
/// The token lock is held for the whole refresh, so concurrent callers either
/// reuse the cached token or wait for the single refresh in flight.
#[derive(Debug, Clone)]
pub struct FatSecretClient {
    client_id: String,
    client_secret: String,
    token_url: String,
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl FatSecretClient {
    pub fn new(config: &NutritionConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                error!("Failed to build FatSecret HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: config.token_url.clone(),
            base_url: config.base_url.clone(),
            client,
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Returns the cached token, refreshing it first when absent or expired.
    pub async fn access_token(&self) -> Result<String, CoreError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref()
            && token.is_valid_at(Instant::now())
        {
            return Ok(token.access_token.clone());
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);

        Ok(access_token)
    }

    async fn request_token(&self) -> Result<CachedToken, CoreError> {
        debug!("Requesting FatSecret access token");
        let issued_at = Instant::now();

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials"), ("scope", "basic")])
            .send()
            .await
            .map_err(|e| {
                error!("FatSecret token request failed: {}", e);
                CoreError::ExternalServiceError(format!("authentication error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("FatSecret token endpoint returned {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "authentication error: failed to get token: {}",
                status
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            error!("Failed to parse FatSecret token response: {}", e);
            CoreError::ExternalServiceError(format!("authentication error: {}", e))
        })?;

        Ok(CachedToken::from_response(token, issued_at))
    }
}

impl NutritionClient for FatSecretClient {
    #[instrument(skip(self))]
    async fn search_foods(&self, query: &str) -> Result<Value, CoreError> {
        let token = self.access_token().await?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("method", "foods.search"),
                ("search_expression", query),
                ("format", "json"),
            ])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                error!("FatSecret search request failed: {}", e);
                CoreError::ExternalServiceError(format!("API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("FatSecret search returned {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "API error: {}",
                status
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            error!("Failed to parse FatSecret search response: {}", e);
            CoreError::ExternalServiceError(format!("API error: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> FatSecretClient {
        FatSecretClient::new(&NutritionConfig {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            token_url: format!("{}/connect/token", server.uri()),
            base_url: format!("{}/rest/server.api", server.uri()),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    async fn mount_token(server: &MockServer, expires_in: u64, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .and(header_exists("authorization"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("scope=basic"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "token-1",
                "token_type": "Bearer",
                "expires_in": expires_in,
                "scope": "basic"
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_search_proxies_upstream_json() {
        let server = MockServer::start().await;
        mount_token(&server, 86400, 1).await;
        let body = json!({"foods": {"food": [{"food_name": "Banana", "food_id": "5388"}]}});
        Mock::given(method("GET"))
            .and(path("/rest/server.api"))
            .and(query_param("method", "foods.search"))
            .and(query_param("search_expression", "banana"))
            .and(query_param("format", "json"))
            .and(header("authorization", "Bearer token-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let result = client(&server).search_foods("banana").await.unwrap();

        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_token_is_reused_until_expiry() {
        let server = MockServer::start().await;
        mount_token(&server, 86400, 1).await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(3)
            .mount(&server)
            .await;

        let client = client(&server);
        for query in ["apple", "rice", "tofu"] {
            client.search_foods(query).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_expired_token_is_refreshed() {
        let server = MockServer::start().await;
        mount_token(&server, 0, 2).await;

        let client = client(&server);
        client.access_token().await.unwrap();
        client.access_token().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "token-1", "expires_in": 3600}))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { client.access_token().await })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "token-1");
        }
    }

    #[tokio::test]
    async fn test_token_failure_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server).search_foods("banana").await.unwrap_err();

        match err {
            CoreError::ExternalServiceError(message) => {
                assert!(message.starts_with("authentication error"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upstream_search_failure_is_reported() {
        let server = MockServer::start().await;
        mount_token(&server, 3600, 1).await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server).search_foods("banana").await.unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
