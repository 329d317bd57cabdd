//! MovieDesk Shared - Types both backend and frontend agree on
//!
//! This crate contains the REST contract both sides agree on:
//! - Response envelopes for list and mutation endpoints
//! - Route paths, including percent-encoded search paths
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and url
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod responses;
pub mod routes;

pub use responses::{MoviesResponse, MutationKind, MutationResponse};
