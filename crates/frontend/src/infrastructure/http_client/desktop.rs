//! Native HTTP adapter (reqwest)

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::infrastructure::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// `RawApiPort` over a pooled reqwest client
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    config: ClientConfig,
}

impl ApiAdapter {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Create adapter from `MOVIEDESK_*` environment variables
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Value, ApiError> {
        tracing::debug!(method, path, "HTTP request");

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(method, path, status = status.as_u16(), "HTTP error status");
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

impl Default for ApiAdapter {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.client.get(self.config.url_for(path));
        self.send("GET", path, request).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        // `json` sets `content-type: application/json`
        let request = self.client.post(self.config.url_for(path)).json(body);
        self.send("POST", path, request).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = self.client.put(self.config.url_for(path)).json(body);
        self.send("PUT", path, request).await
    }

    async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.client.delete(self.config.url_for(path));
        self.send("DELETE", path, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use serde_json::json;
    use std::time::Duration;

    async fn spawn_stub(router: Router) -> ClientConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ClientConfig::new(format!("http://{addr}"), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn posts_json_with_content_type() {
        let router = Router::new().route(
            "/movies",
            get(|| async { Json(json!({ "movies": [] })) }).post(
                |headers: HeaderMap, Json(body): Json<Value>| async move {
                    let is_json = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .is_some_and(|v| v.starts_with("application/json"));
                    Json(json!({ "success": is_json && body["title"] == "Heat" }))
                },
            ),
        );
        let adapter = ApiAdapter::new(spawn_stub(router).await);

        let listed = adapter.get_json("/movies").await.unwrap();
        let created = adapter
            .post_json("/movies", &json!({ "title": "Heat" }))
            .await
            .unwrap();

        assert_eq!(listed, json!({ "movies": [] }));
        assert_eq!(created, json!({ "success": true }));
    }

    #[tokio::test]
    async fn error_status_keeps_body() {
        let router = Router::new().route(
            "/movies/{id}",
            delete(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false })),
                )
            }),
        );
        let adapter = ApiAdapter::new(spawn_stub(router).await);

        let err = adapter.delete_json("/movies/1").await.unwrap_err();

        match err {
            ApiError::HttpError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "success": false }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_success_body_is_a_parse_error() {
        let router = Router::new().route("/movies", get(|| async { "<html></html>" }));
        let adapter = ApiAdapter::new(spawn_stub(router).await);

        let err = adapter.get_json("/movies").await.unwrap_err();

        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_request_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let adapter = ApiAdapter::new(ClientConfig::new(
            format!("http://{addr}"),
            Duration::from_secs(2),
        ));

        let err = adapter.get_json("/movies").await.unwrap_err();

        assert!(matches!(err, ApiError::RequestFailed(_)));
    }
}
