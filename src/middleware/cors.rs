use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::error::{Error, Result};

/// Restricts cross-origin access to the configured client, or allows any
/// origin when none is configured.
pub fn cors_layer(client_url: Option<&str>) -> Result<CorsLayer> {
    let Some(url) = client_url else {
        return Ok(CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any));
    };

    let origin = HeaderValue::from_str(url.trim_end_matches('/'))
        .map_err(|e| Error::Config(format!("Invalid CLIENT_URL: {}", e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}
