//! Application services
//!
//! `MovieService` is the fetch layer: one method per REST call, returning
//! decoded bodies. `CatalogSync` sits on top and turns mutation replies into
//! view-state patches.

pub mod catalog_sync;
pub mod movie_service;

pub use catalog_sync::CatalogSync;
pub use movie_service::MovieService;
