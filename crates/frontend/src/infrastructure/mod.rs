//! Infrastructure - HTTP adapters, configuration, task spawning

pub mod config;
pub mod http_client;

use std::future::Future;

/// Spawn a UI task on the Dioxus runtime.
///
/// Must be called from inside a component or event handler.
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
