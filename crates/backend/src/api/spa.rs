//! Static serving for the compiled web client.
//!
//! Existing files under the static directory are served as-is; every other
//! path falls back to `index.html` so client-side routes survive a reload.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

pub fn spa_service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}
