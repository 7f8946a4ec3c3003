// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::ArticleReadingDto,
    queries::articles::{ListArticlesQuery, ReadArticleQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ArticleListParams {
    /// Topic title or its hyphenated form, e.g. `mind-curiosity`.
    #[serde(default)]
    pub topic: Option<String>,
    /// Title search.
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReadArticleParams {
    /// Zero-based page index; past the end shows the last page.
    #[serde(default)]
    pub page: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Published articles, newest first.", body = ArticleListResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let items = state
        .services
        .article_queries
        .list_published(ListArticlesQuery {
            topic: params.topic,
            search: params.q,
        })
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}",
    params(
        ("slug" = String, Path, description = "Article slug"),
        ReadArticleParams
    ),
    responses(
        (status = 200, description = "Article header and the requested page.", body = ArticleReadingDto),
        (status = 404, description = "No published article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<ReadArticleParams>,
) -> HttpResult<Json<ArticleReadingDto>> {
    state
        .services
        .article_queries
        .read_article(ReadArticleQuery {
            slug,
            page: params.page.unwrap_or_default(),
        })
        .await
        .into_http()
        .map(Json)
}
