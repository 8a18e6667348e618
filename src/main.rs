use anyhow::Result;
use tracing::info;

use darikson_site::{config::Config, mail::SmtpMailer, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("darikson_site=info".parse()?),
        )
        .init();

    info!("Starting Darikson site server");

    // Load configuration from environment
    let config = Config::from_env()?;
    let port = config.port;

    // Build the SMTP transport once; it is shared across requests
    let mailer = SmtpMailer::from_config(&config)?;

    let app = server::build_router(config, mailer);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
