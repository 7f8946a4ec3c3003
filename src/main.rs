use neuralpulse_core::application::{
    commands::{articles::ArticleCommandSettings, auth::AdminCredentials},
    ports::{
        security::{PasswordHasher, SessionStore},
        storage::ImageStore,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ServiceSettings},
};
use neuralpulse_core::config::AppConfig;
use neuralpulse_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    subscriber::SubscriberRepository,
    topic::TopicRepository,
};
use neuralpulse_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteSubscriberRepository,
        SqliteTopicRepository,
    },
    security::{password::Argon2PasswordHasher, session_store::InMemorySessionStore},
    storage::LocalImageStore,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use neuralpulse_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let topic_repo: Arc<dyn TopicRepository> =
        Arc::new(SqliteTopicRepository::new(Arc::clone(&pool)));
    let subscriber_repo: Arc<dyn SubscriberRepository> =
        Arc::new(SqliteSubscriberRepository::new(Arc::clone(&pool)));

    tokio::fs::create_dir_all(config.media_root())
        .await
        .with_context(|| format!("cannot create media root {}", config.media_root().display()))?;
    let image_store: Arc<dyn ImageStore> = Arc::new(LocalImageStore::new(
        config.media_root().clone(),
        config.media_public_base(),
    ));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let settings = ServiceSettings {
        articles: ArticleCommandSettings {
            image_namespace: config.media_namespace().to_string(),
            default_author: config.default_author().to_string(),
        },
        admin: AdminCredentials {
            username: config.admin_username().to_string(),
            password_hash: config.admin_password_hash().to_string(),
        },
        session_ttl: chrono::Duration::from_std(config.session_ttl())
            .context("SESSION_TTL_SECONDS out of range")?,
    };

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        topic_repo,
        subscriber_repo,
        image_store,
        password_hasher,
        session_store,
        clock,
        slugger,
        settings,
    ));

    let state = HttpState {
        services,
        media_root: config.media_root().clone(),
        allowed_origins: config.allowed_origins().to_vec(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
