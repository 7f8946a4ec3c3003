// src/presentation/http/controllers/admin_articles.rs
//! Editor endpoints behind the admin gate. Images arrive inline as base64
//! so a whole submission is one JSON document.

use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, NewPageInput, UpdateArticleCommand,
    },
    dto::{ArticleDto, EditableArticleDto},
};
use crate::domain::article::{ImageFile, PageEdit};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Admin;
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImagePayload {
    pub filename: String,
    pub content_type: String,
    /// Standard base64 of the file contents.
    pub data: String,
}

impl ImagePayload {
    fn decode(self) -> HttpResult<ImageFile> {
        let bytes = STANDARD
            .decode(self.data.trim())
            .map_err(|err| HttpError::bad_request(format!("{}: invalid base64 ({err})", self.filename)))?;
        Ok(ImageFile::new(self.filename, self.content_type, bytes))
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PagePayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub image: Option<ImagePayload>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    /// Derived from the title when omitted.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub read_time: Option<String>,
    pub topic: String,
    #[serde(default)]
    pub hero_image: Option<ImagePayload>,
    #[serde(default)]
    pub pages: Vec<PagePayload>,
}

/// One step against the loaded page list; indices are zero-based and see
/// the effect of earlier steps.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PageEditPayload {
    AddPage,
    RemovePage { index: usize },
    UpdateText { index: usize, text: String },
    SelectImage { index: usize, image: ImagePayload },
}

impl PageEditPayload {
    fn into_edit(self) -> HttpResult<PageEdit> {
        Ok(match self {
            Self::AddPage => PageEdit::AddPage,
            Self::RemovePage { index } => PageEdit::RemovePage { index },
            Self::UpdateText { index, text } => PageEdit::UpdateText { index, text },
            Self::SelectImage { index, image } => PageEdit::SelectImage {
                index,
                image: image.decode()?,
            },
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub hero_image: Option<ImagePayload>,
    #[serde(default)]
    pub edits: Vec<PageEditPayload>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AdminListParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/articles",
    params(AdminListParams),
    responses(
        (status = 200, description = "Published articles for the admin table; drafts are not listed.", body = ArticleListResponse),
        (status = 303, description = "No session; redirected to the login page.")
    ),
    security(("sessionToken" = [])),
    tag = "Admin"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let items = state
        .services
        .article_queries
        .admin_list(params.q)
        .await
        .into_http()?;
    Ok(Json(ArticleListResponse { items }))
}

#[utoipa::path(
    post,
    path = "/admin/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article published.", body = ArticleDto),
        (status = 400, description = "Missing field or rejected image.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "An image upload failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("sessionToken" = [])),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let pages = payload
        .pages
        .into_iter()
        .map(|page| {
            Ok(NewPageInput {
                text: page.text,
                image: page.image.map(ImagePayload::decode).transpose()?,
            })
        })
        .collect::<HttpResult<Vec<_>>>()?;

    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        date: payload.date,
        read_time: payload.read_time,
        topic: payload.topic,
        hero_image: payload.hero_image.map(ImagePayload::decode).transpose()?,
        pages,
    };

    tracing::info!(admin = %admin.username, title = %command.title, "creating article");
    let progress = state.services.progress();
    let created = state
        .services
        .article_commands
        .create_article(command, progress.as_ref())
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/admin/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Editor state for the article, any status.", body = EditableArticleDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("sessionToken" = [])),
    tag = "Admin"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<EditableArticleDto>> {
    state
        .services
        .article_queries
        .editable_article(slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/admin/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article saved.", body = ArticleDto),
        (status = 400, description = "Missing field, bad page index or rejected image.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug or topic.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "An image upload failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("sessionToken" = [])),
    tag = "Admin"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let edits = payload
        .edits
        .into_iter()
        .map(PageEditPayload::into_edit)
        .collect::<HttpResult<Vec<_>>>()?;

    let command = UpdateArticleCommand {
        slug,
        title: payload.title,
        excerpt: payload.excerpt,
        date: payload.date,
        read_time: payload.read_time,
        topic: payload.topic,
        hero_image: payload.hero_image.map(ImagePayload::decode).transpose()?,
        edits,
    };

    tracing::info!(admin = %admin.username, article = %command.slug, "updating article");
    let progress = state.services.progress();
    state
        .services
        .article_commands
        .update_article(command, progress.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/admin/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 204, description = "Deleted."),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("sessionToken" = [])),
    tag = "Admin"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    tracing::info!(admin = %admin.username, article = %slug, "deleting article");
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { slug })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
