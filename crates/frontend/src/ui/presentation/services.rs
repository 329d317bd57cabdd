//! Service providers for the presentation layer
//!
//! Components reach the application services through `use_context` and
//! never name the HTTP adapter behind them.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{CatalogSync, MovieService};
use crate::ports::outbound::RawApiPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<CatalogSync>,
}

impl Services {
    /// Create all services over one API port
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self {
            catalog: Arc::new(CatalogSync::new(MovieService::new(api))),
        }
    }
}

/// Hook to access the catalog synchronizer from context
pub fn use_catalog_sync() -> Arc<CatalogSync> {
    let services = use_context::<Services>();
    services.catalog.clone()
}
