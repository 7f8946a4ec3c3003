// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAdmin, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::HeaderMap, http::request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

pub const SESSION_COOKIE: &str = "session";

/// Session token from `Authorization: Bearer`, falling back to the
/// `session` cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(header) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }
    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
        .filter(|token| !token.is_empty())
}

/// The signed-in admin. Behind the admin gate it is read from the request
/// extensions; elsewhere the token is checked on the spot.
#[derive(Debug, Clone)]
pub struct Admin(pub AuthenticatedAdmin);

impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(admin) = parts.extensions.get::<AuthenticatedAdmin>() {
            return Ok(Self(admin.clone()));
        }

        let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure("application state missing"))
        })?;
        let token = session_token(&parts.headers).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("missing session"))
        })?;

        app_state
            .services
            .authenticate_admin(&token)
            .await
            .map(Self)
            .map_err(HttpError::from_error)
    }
}

/// Raw session token, if the request carries one. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeSessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for MaybeSessionToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_token(&parts.headers)))
    }
}
