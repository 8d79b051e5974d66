use clap::Parser;
use dotenvy::dotenv;
use linguaboard::cli::{self, Cli, Output};
use linguaboard::linguaboard_config::{ApiConfig, StorageConfig};
use linguaboard::linguaboard_core::ApiError;
use linguaboard::state::init_app_state;
use linguaboard_observability::init_basic_console_logging;
use tracing::warn;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_basic_console_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let mut api_config = ApiConfig::from_env();
    if let Some(base_url) = cli.base_url {
        api_config = api_config.with_base_url(base_url);
    }
    let storage_config = match cli.session_file {
        Some(path) => StorageConfig::new(path),
        None => StorageConfig::from_env(),
    };

    let state = match init_app_state(api_config, storage_config, None).await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("\n❌ Error starting linguaboard: {:#}", e);
            std::process::exit(1);
        }
    };

    let inflight = state.inflight.clone();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if inflight.interrupt() {
                std::process::exit(130);
            }
        }
    });

    let output = Output { json: cli.json };
    if let Err(e) = cli::run(&state, cli.command, output).await {
        report(&e);
        std::process::exit(1);
    }
}

fn report(error: &anyhow::Error) {
    match error.downcast_ref::<ApiError>() {
        Some(api) if api.is_cancelled() => eprintln!("\n❌ Cancelled"),
        Some(api) if api.is_unauthorized() => {
            eprintln!("\n❌ Error: {}", api);
            eprintln!("   Your session has expired. Run `linguaboard signin` to sign in again.");
        }
        Some(api) => {
            if let Some(body) = api.body() {
                warn!(status = ?api.status(), body = %body, "Request rejected");
            }
            eprintln!("\n❌ Error: {}", error);
        }
        None => eprintln!("\n❌ Error: {:#}", error),
    }
}
