//! REST API test harness.
//!
//! Serves the real router, with its middleware, over a [`MockApi`].

use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use rotkehlchen_rest::{ServerConfig, create_app_with_config};

use super::mock_api::MockApi;

/// Prefix every route is mounted under in tests.
pub const API: &str = "/api/1";

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// let harness = RestTestHarness::logged_in();
/// let response = harness.get("/settings").await;
/// assert_eq!(response.status_code(), 200);
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// Handle to the engine the server forwards to.
    pub api: MockApi,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness with no logged in user.
    pub fn new() -> Self {
        Self::with_api(MockApi::new(), ServerConfig::for_testing())
    }

    /// Creates a harness with user `alice` logged in.
    pub fn logged_in() -> Self {
        Self::with_api(MockApi::logged_in("alice"), ServerConfig::for_testing())
    }

    /// Creates a harness over the given engine and configuration.
    pub fn with_api(api: MockApi, config: ServerConfig) -> Self {
        let app = create_app_with_config(api.clone(), config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");
        Self {
            server,
            api,
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", API, path)
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(&self.url(path)).await
    }

    /// Makes a GET request with a JSON body.
    pub async fn get_json(&self, path: &str, body: Value) -> TestResponse {
        self.server.get(&self.url(path)).json(&body).await
    }

    /// Makes a GET request with one header.
    pub async fn get_with_header(
        &self,
        path: &str,
        name: &'static str,
        value: &'static str,
    ) -> TestResponse {
        self.server
            .get(&self.url(path))
            .add_header(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            )
            .await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.server.put(&self.url(path)).json(&body).await
    }

    /// Makes a PATCH request with a JSON body.
    pub async fn patch(&self, path: &str, body: Value) -> TestResponse {
        self.server.patch(&self.url(path)).json(&body).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(&self.url(path)).json(&body).await
    }

    /// Makes a DELETE request without a body.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(&self.url(path)).await
    }

    /// Makes a DELETE request with a JSON body.
    pub async fn delete_json(&self, path: &str, body: Value) -> TestResponse {
        self.server.delete(&self.url(path)).json(&body).await
    }
}
