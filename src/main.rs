use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use studypal::{config::Config, llm::openai::OpenAIAdapter, routes::create_router, AppState, DocumentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studypal=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; refuses to start without an API key
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config);

    let llm = Arc::new(OpenAIAdapter::with_base_url(
        &config.llm.openai_api_key,
        &config.llm.openai_base_url,
    ));

    // Create shared state
    let state = AppState {
        config: config.clone(),
        store: DocumentStore::new(),
        llm,
    };

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
