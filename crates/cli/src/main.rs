//! `todo-service` entry-point.
//!
//! Available sub-commands:
//! - `serve` — connect to MySQL and start the todo REST API.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use db::{DbConfig, MySqlTodoRepository};
use service::TodoService;

mod config;

use config::{DatabaseArgs, ServerArgs};

#[derive(Parser)]
#[command(name = "todo-service", about = "Todo CRUD service backed by MySQL", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[command(flatten)]
        server: ServerArgs,
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { server, database } => serve(server, database.into()).await,
    }
}

async fn serve(server: ServerArgs, database: DbConfig) -> anyhow::Result<()> {
    let pool = db::pool::create_pool(&database)
        .await
        .context("failed to connect to database")?;

    let repository = Arc::new(MySqlTodoRepository::new(pool.clone()));
    let state = api::AppState::new(TodoService::new(repository));
    let app = api::app(state, &server.base_path);

    let bind = server.bind_addr();
    info!("Starting API server on {bind} (base path {})", server.base_path);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    let result = api::serve(listener, app, shutdown_signal()).await;

    db::pool::close_pool(&pool).await;
    result.context("server error")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            warn!("cannot listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}
