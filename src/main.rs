use axum::extract::DefaultBodyLimit;
use skillprep_backend::{
    config::{get_config, init_config},
    database::pool::{create_pool, run_migrations},
    middleware::cors::cors_layer,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    init_config()?;
    let config = get_config();

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    info!("Database ready");

    let app_state = AppState::new(pool, config)?;
    if !app_state.ai_service.is_configured() {
        tracing::warn!("OPENAI_API_KEY not set; interview chat and review will fail");
    }

    let app = routes::router(app_state)
        .layer(cors_layer(config.client_url.as_deref())?)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.max_upload_bytes));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("SkillPrep API listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
