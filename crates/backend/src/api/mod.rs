//! API layer - HTTP entry points.

pub mod http;
pub mod spa;
