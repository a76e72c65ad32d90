use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use symptotrack::api::{start_api_server, ApiContext};
use symptotrack::auth::Pbkdf2Verifier;
use symptotrack::{config, db};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("SymptoTrack starting v{}", config::APP_VERSION);

    let settings = config::ServerSettings::from_env();

    if let Some(parent) = settings.db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::error!("Cannot create data directory {}: {e}", parent.display());
            std::process::exit(1);
        }
    }

    // Open once at startup so migrations run and failures surface early.
    match db::open_database(&settings.db_path) {
        Ok(_) => tracing::info!("Database ready at {}", settings.db_path.display()),
        Err(e) => {
            tracing::error!("Database initialization failed: {e}");
            std::process::exit(1);
        }
    }

    let ctx = ApiContext::new(settings.db_path.clone(), Arc::new(Pbkdf2Verifier::new()));

    let mut server = match start_api_server(ctx, settings.bind_addr()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("API server failed to start: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {e}");
    }
    server.shutdown();
}
