use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod screens;
mod setup;

use cli::Cli;
use config::{app_config::AppConfig, database_config};
use setup::dependency_injection::DependencyContainer;

/// Storefront CLI Entry Point
///
/// Each invocation mounts one screen: wires dependencies, restores the saved
/// session and cart, renders the screen and exits.
/// - config/: Application configuration (API, database)
/// - setup/: Dependency injection
/// - screens/: Screen rendering and alert mapping
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments
    let cli = Cli::parse();

    // 4. Load configuration
    let config = AppConfig::from_env();

    // 5. Initialize database
    let pool = database_config::init_database().await?;

    // 6. Wire dependencies
    let container = DependencyContainer::new(&config, pool).await?;

    // 7. Render screen
    match cli::run(cli.command, &container).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(alert) => {
            tracing::debug!("Screen raised alert: {}", alert.title);
            eprintln!("{}", alert);
            Ok(ExitCode::FAILURE)
        }
    }
}
