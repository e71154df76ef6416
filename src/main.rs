mod agent;
mod config;
mod error;
mod page;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use agent::StatelessLLMFactory;
use config::{load_credential, Config};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gemini_translator=debug,tower_http=debug")),
        )
        .init();

    let config = Config::discover()?;

    let credential = match load_credential(&config.llm_config.api_key_env) {
        Ok(credential) => credential,
        Err(e) => {
            error!("❌ {}", e);
            return Err(e.into());
        }
    };

    let llm = StatelessLLMFactory::create_llm(&config.llm_config, credential)?;
    info!("Translator ready: model={}", llm.model());

    let host = config.system_config.host.clone();
    let port = config.system_config.port;
    let app = routes::build_app(AppState::new(config, llm));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
