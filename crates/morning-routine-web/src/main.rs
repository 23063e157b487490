use std::path::PathBuf;

use clap::Parser;
use morning_routine_core::{ChecklistService, Config};
use morning_routine_web::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "morning-routine-web", version, about = "Morning routine checklist web server")]
struct Args {
    /// Address to listen on (overrides server.bind from config)
    #[arg(long)]
    bind: Option<String>,

    /// Checklist file to use instead of the configured one
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();
    let mut config = Config::load()?;
    if args.data_file.is_some() {
        config.data_file = args.data_file;
    }
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());

    let store = config.open_store()?;
    tracing::info!(path = %store.path().display(), "using checklist file");
    let state = AppState::new(ChecklistService::new(store));

    let listener = TcpListener::bind(&bind).await?;
    morning_routine_web::serve(listener, state).await?;
    Ok(())
}
