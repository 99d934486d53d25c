// GroupPlan claims service - Local Development Server

use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use groupplan_common::{config::Config, secure_id};

/// Bytes of randomness in a generated signing secret
const EPHEMERAL_SECRET_BYTES: usize = 256;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .pretty()
        .init();

    info!("Starting GroupPlan claims service local development server");
    info!(cookie = %config.auth_cookie_name, "Configuration loaded successfully");

    if config.jwt_secret.is_none() {
        warn!("JWT_SECRET not set, generating an ephemeral signing secret");
        let secret = secure_id(EPHEMERAL_SECRET_BYTES).map_err(|e| {
            error!("Failed to generate signing secret: {}", e);
            anyhow::anyhow!("Secret generation failed: {}", e)
        })?;
        config.jwt_secret = Some(secret);
    }

    if config.dev_sign_in {
        warn!("DEV_SIGN_IN enabled, POST /auth/dev/session issues sessions without sign-in");
    }

    let app = groupplan_app::create_app(&config);

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .into_inner(),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("Server starting on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
