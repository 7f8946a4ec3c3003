// src/presentation/http/controllers/topics.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::TopicListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/topics",
    responses(
        (status = 200, description = "Topics ordered by title.", body = TopicListResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TopicListResponse>> {
    let items = state.services.topic_queries.list_topics().await.into_http()?;
    Ok(Json(TopicListResponse { items }))
}
