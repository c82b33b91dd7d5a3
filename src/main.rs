//! Emowell - emotional-wellbeing survey backend.
//!
//! Accepts student survey submissions over HTTP, persists them in
//! PostgreSQL, generates an empathetic reply through the Groq API, and
//! serves per-day average composite scores for the dashboard chart.

mod cli;
mod config;
mod dashboard;
mod db;
mod error;
mod feedback;
mod llm;
mod models;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use llm::{GenerationConfig, GroqClient};
use state::AppState;
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments; a missing DATABASE_URL or
    // GROQ_API_KEY is fatal before anything else runs.
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging(&args);

    info!("Emowell v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&args)?;
    config.merge_with_args(&args);
    debug!("Using model {} at {}", config.model.name, config.model.api_url);

    let pool = db::connect(&args.database_url).await?;
    db::ensure_schema(&pool).await?;
    info!("Database ready");

    let llm = GroqClient::new(GenerationConfig {
        api_url: config.model.api_url.clone(),
        api_key: args.groq_api_key.clone(),
        model: config.model.name.clone(),
        temperature: config.model.temperature,
        top_p: config.model.top_p,
        max_tokens: config.model.max_tokens,
        timeout_seconds: config.model.timeout_seconds,
    })?;

    let state = AppState {
        pool,
        llm: Arc::new(llm),
    };

    let app = routes::router(state);

    let addr = format!("{}:{}", args.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on http://{addr}");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .emowell.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
