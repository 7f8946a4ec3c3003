// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleSummaryDto, TopicDto};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    pub items: Vec<TopicDto>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::newsletter::subscribe,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::admin_articles::list_articles,
        crate::presentation::http::controllers::admin_articles::create_article,
        crate::presentation::http::controllers::admin_articles::get_article,
        crate::presentation::http::controllers::admin_articles::update_article,
        crate::presentation::http::controllers::admin_articles::delete_article
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            TopicListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::newsletter::SubscribeRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::admin_articles::ImagePayload,
            crate::presentation::http::controllers::admin_articles::PagePayload,
            crate::presentation::http::controllers::admin_articles::PageEditPayload,
            crate::presentation::http::controllers::admin_articles::CreateArticleRequest,
            crate::presentation::http::controllers::admin_articles::UpdateArticleRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticleReadingDto,
            crate::application::dto::PageViewDto,
            crate::application::dto::EditableArticleDto,
            crate::application::dto::EditablePageDto,
            crate::application::dto::TopicDto,
            crate::application::dto::SubscriberDto,
            crate::application::dto::SessionDto
        )
    ),
    tags(
        (name = "Articles", description = "Public article listing and reading"),
        (name = "Topics", description = "Topic listing"),
        (name = "Newsletter", description = "Newsletter sign-up"),
        (name = "Auth", description = "Admin sign-in"),
        (name = "Admin", description = "Article editor, behind the admin session"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "NeuralPulse API",
        description = "Blog backend: articles, topics, newsletter and the admin editor",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "sessionToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("session"))),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
