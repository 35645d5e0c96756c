use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| Error::Unauthorized("Invalid or expired token".to_string()))
    }
}

fn reject(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": message }))).into_response()
}

/// Verifies `Authorization: Bearer <token>` and stores the [`Claims`] in the
/// request extensions. Requests without a valid token never reach the handler.
pub async fn require_bearer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return reject("Invalid token format");
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return reject("Invalid token format");
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return reject("Invalid token format");
    };

    match state.auth_service.verify_token(token.trim()) {
        Ok(claims) if claims.user_id().is_ok() => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        _ => reject("Invalid or expired token"),
    }
}
