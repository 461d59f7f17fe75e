use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::{claims::Permission, error::AuthError, jwt::TokenVerifier};
use crate::error::ApiError;

/// Per-route guard state: the verifier plus the permission the route needs.
#[derive(Clone)]
pub struct Guard {
    verifier: Arc<TokenVerifier>,
    permission: Permission,
}

impl Guard {
    pub fn new(verifier: Arc<TokenVerifier>, permission: Permission) -> Self {
        Self {
            verifier,
            permission,
        }
    }
}

/// Extracts `<token>` from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = auth.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Middleware run ahead of every protected handler. On success the verified
/// [`Claims`](super::claims::Claims) are stored in the request extensions.
pub async fn require_permission(
    State(guard): State<Guard>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = bearer_token(req.headers())
        .and_then(|token| guard.verifier.authorize(token, guard.permission))
        .map_err(|e| {
            warn!(
                permission = %guard.permission,
                code = e.code(),
                error = %e,
                uri = %req.uri(),
                "request rejected"
            );
            e
        })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
