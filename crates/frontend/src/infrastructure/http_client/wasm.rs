//! Browser HTTP adapter (gloo-net over `fetch`)

use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use crate::infrastructure::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// `RawApiPort` over the browser's `fetch`
#[derive(Clone)]
pub struct ApiAdapter {
    config: ClientConfig,
}

impl ApiAdapter {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
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
        read_json(response).await
    }

    async fn send_json(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
        body: &Value,
    ) -> Result<Value, ApiError> {
        tracing::debug!(method, path, "HTTP request");
        // `json` sets `content-type: application/json`
        let request: Request = request
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        read_json(response).await
    }
}

impl Default for ApiAdapter {
    fn default() -> Self {
        Self::new(ClientConfig::same_origin())
    }
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::HttpError { status, body });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::ParseError(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = Request::get(&self.config.url_for(path));
        self.send("GET", path, request).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = Request::post(&self.config.url_for(path));
        self.send_json("POST", path, request, body).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = Request::put(&self.config.url_for(path));
        self.send_json("PUT", path, request, body).await
    }

    async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = Request::delete(&self.config.url_for(path));
        self.send("DELETE", path, request).await
    }
}
