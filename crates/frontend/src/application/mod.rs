//! Application layer - use cases over the outbound ports
//!
//! Services here depend on `RawApiPort`, never on a concrete HTTP client.

pub mod error;
pub mod services;
pub mod view_state;

pub use error::CatalogError;
pub use view_state::{CatalogPatch, CatalogView};
