// src/presentation/http/middleware/admin_gate.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::{
    error::HttpError, extractors::session_token, state::HttpState,
};
use axum::{
    extract::{OriginalUri, Request},
    http::Uri,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

pub const LOGIN_PATH: &str = "/login";

/// `303 See Other` to the login page, remembering where the admin was headed.
pub fn login_redirect(uri: &Uri) -> Response {
    let query = serde_urlencoded::to_string([("redirect", uri.path())]).unwrap_or_default();
    Redirect::to(&format!("{LOGIN_PATH}?{query}")).into_response()
}

/// Full request URI; nesting strips the `/admin` prefix from `req.uri()`.
fn requested_uri(req: &Request) -> Uri {
    req.extensions()
        .get::<OriginalUri>()
        .map_or_else(|| req.uri().clone(), |original| original.0.clone())
}

/// Lets a request through only with a live admin session, which is then
/// available to handlers as an extension. Covers every path under `/admin`,
/// unknown ones included.
pub async fn require_admin(mut req: Request, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let uri = requested_uri(&req);
    let Some(token) = session_token(req.headers()) else {
        return login_redirect(&uri);
    };

    match state.services.authenticate_admin(&token).await {
        Ok(admin) => {
            req.extensions_mut().insert(admin);
            next.run(req).await
        }
        Err(ApplicationError::Unauthorized(reason)) => {
            tracing::debug!(path = %uri.path(), %reason, "admin session rejected");
            login_redirect(&uri)
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
