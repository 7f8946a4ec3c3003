// src/presentation/http/controllers/newsletter.rs
use crate::application::{commands::newsletter::SubscribeCommand, dto::SubscriberDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub email: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletter",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed.", body = SubscriberDto),
        (status = 400, description = "Malformed email address.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Already subscribed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    tag = "Newsletter"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubscribeRequest>,
) -> HttpResult<(StatusCode, Json<SubscriberDto>)> {
    let subscriber = state
        .services
        .newsletter_commands
        .subscribe(SubscribeCommand {
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(subscriber)))
}
