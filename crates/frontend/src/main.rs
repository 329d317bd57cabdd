//! MovieDesk frontend - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviedesk_frontend::infrastructure::http_client::ApiAdapter;
use moviedesk_frontend::ports::outbound::RawApiPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviedesk_frontend=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting MovieDesk");

    // HTTP
    #[cfg(not(target_arch = "wasm32"))]
    let adapter = ApiAdapter::from_env();
    #[cfg(target_arch = "wasm32")]
    let adapter = ApiAdapter::default();
    let api: Arc<dyn RawApiPort> = Arc::new(adapter);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        builder = builder.with_cfg(desktop_config());
    }

    builder
        .with_context(moviedesk_frontend::presentation::Services::new(api))
        .launch(moviedesk_frontend::app);
}

/// Native builds always carry the desktop renderer.
#[cfg(not(target_arch = "wasm32"))]
fn desktop_config() -> dioxus_desktop::Config {
    let window = dioxus_desktop::WindowBuilder::new().with_title("MovieDesk");
    dioxus_desktop::Config::new().with_window(window)
}
