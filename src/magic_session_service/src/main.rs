use color_eyre::eyre::Result;
use magic_session_adapters::{backend::HttpAuthBackend, config::Settings};
use magic_session_service::{SessionService, tracing::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    let backend = HttpAuthBackend::from_settings(&settings.auth_server)?;

    let listener = TcpListener::bind(&settings.application.address).await?;
    tracing::info!(auth_server = %backend.url(), "Starting magic session service...");

    SessionService::new(backend)
        .run_standalone(listener, settings.allowed_origins)
        .await?;

    Ok(())
}
