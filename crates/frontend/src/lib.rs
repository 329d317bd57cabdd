//! MovieDesk frontend crate.
//!
//! A single-page movie catalog: UI, application services, and the HTTP
//! adapters they run on. The adapter is picked at compile time (reqwest on
//! native targets, gloo-net in the browser).

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::app;
pub use ui::presentation;
