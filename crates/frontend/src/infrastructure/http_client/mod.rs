//! HTTP adapters implementing `RawApiPort`
//!
//! Native builds use `reqwest`; the browser build uses `gloo-net` on top of
//! `fetch`. Both map non-2xx statuses to `ApiError::HttpError` with the raw
//! body so callers can still inspect a JSON error payload.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;
#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;
