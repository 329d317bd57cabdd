//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters move JSON values over the wire; typed decoding happens in the
//! application services. Keeping the port untyped makes it object-safe, so
//! the composition root can hand an `Arc<dyn RawApiPort>` to the UI.
//!
//! Futures are `?Send`: the browser adapter is built on `!Send` JS promises.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait(?Send)]
pub trait RawApiPort: Send + Sync {
    /// `GET path`, returning the decoded JSON body
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// `POST path` with a JSON body (`content-type: application/json`)
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// `PUT path` with a JSON body (`content-type: application/json`)
    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// `DELETE path` without a body, returning the decoded JSON response
    async fn delete_json(&self, path: &str) -> Result<Value, ApiError>;
}
