// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin_articles, articles, auth, newsletter, topics},
    error::HttpError,
    middleware::{require_admin, rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Admin submissions carry base64 images of up to 10 MiB each.
const ADMIN_BODY_LIMIT: usize = 64 * 1024 * 1024;

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Rate limiting keys on the client IP, which requires the server to be run
/// with connect info; tests build the router without it.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let origins: Vec<HeaderValue> = state
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let mut public_writes = Router::new()
        .route("/api/v1/newsletter", post(newsletter::subscribe))
        .route("/api/v1/auth/login", post(auth::login));
    if rate_limit {
        public_writes = public_writes.layer(rate_limit_layer());
    }

    // `layer` rather than `route_layer`: the gate also guards the fallback,
    // so unknown admin paths redirect like known ones.
    let admin = Router::new()
        .route(
            "/articles",
            get(admin_articles::list_articles).post(admin_articles::create_article),
        )
        .route(
            "/articles/{slug}",
            get(admin_articles::get_article)
                .put(admin_articles::update_article)
                .delete(admin_articles::delete_article),
        )
        .fallback(admin_not_found)
        .layer(from_fn(require_admin))
        .layer(DefaultBodyLimit::max(ADMIN_BODY_LIMIT));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .route("/api/v1/articles", get(articles::list_articles))
        .route("/api/v1/articles/{slug}", get(articles::get_article))
        .route("/api/v1/topics", get(topics::list_topics))
        .route("/api/v1/auth/logout", post(auth::logout))
        .merge(public_writes)
        .nest("/admin", admin)
        .nest_service("/media", ServeDir::new(&state.media_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Reached only past the admin gate.
async fn admin_not_found() -> HttpError {
    HttpError::not_found("no such admin page")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
