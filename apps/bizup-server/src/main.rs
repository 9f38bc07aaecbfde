use std::net::SocketAddr;

use tracing::info;

use bizup_api::{build_router, AppState};
use bizup_infrastructure::{create_pool, run_migrations};
use bizup_security::PasswordService;
use bizup_shared::config::AppConfig;
use bizup_shared::telemetry::init_telemetry;
use bizup_shared::utils::mask_secret;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `bizup-server hash-password <password>` prints a PHC string for
    // AUTH__ADMIN_PASSWORD_HASH and exits.
    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("hash-password") {
        let password = args
            .next()
            .ok_or_else(|| anyhow::anyhow!("usage: bizup-server hash-password <password>"))?;
        println!("{}", PasswordService::hash(&password)?);
        return Ok(());
    }

    let config = AppConfig::load()?;
    let _log_guard = init_telemetry(&config.log)?;

    info!(
        env = %config.app.env,
        "{} starting (admin user: {}, password: {})",
        config.app.name,
        config.auth.admin_username,
        mask_secret(&config.auth.admin_password)
    );

    info!("Connecting to database at {}...", config.database.url);
    let pool = create_pool(&config.database.url, config.database.max_connections).await?;
    run_migrations(&pool).await?;
    info!("Database ready, migrations applied");

    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));

    let state = AppState::new(pool, config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
