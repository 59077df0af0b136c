//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
