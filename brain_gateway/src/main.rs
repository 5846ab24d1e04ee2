use std::path::PathBuf;
use std::process::ExitCode;

use agent_brain::Brain;
use brain_gateway::{seed_stake_engine, serve, AppState, GatewayConfig, GatewayError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("brain-gateway: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), GatewayError> {
    // usage: brain-gateway [config.toml]
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = GatewayConfig::load_optional(config_path.as_deref())?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut brain = Brain::default();
    if config.seed_demo {
        let module_id = seed_stake_engine(brain.graph_mut())?;
        info!(%module_id, "demo brain ready");
    }

    serve(&config, AppState::new(brain)).await
}
