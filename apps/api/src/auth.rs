use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::errors::AppError;

/// Marker for an authenticated caller.
///
/// Token verification belongs to the identity provider in front of this service;
/// here we only require that a bearer credential is present. Handlers take `Caller`
/// as their first extractor so a missing identity is reported before any argument
/// is looked at.
#[derive(Debug, Clone, Copy)]
pub struct Caller;

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthenticated)?;

        bearer_token(header)
            .map(|_| Caller)
            .ok_or(AppError::Unauthenticated)
    }
}

fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
