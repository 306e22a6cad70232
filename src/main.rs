//! project-manager-mcp: HTTP MCP server for project-management tools
//!
//! Serves the JSON-RPC tool-calling protocol on `POST /mcp` plus a liveness
//! probe on `GET /health`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use project_manager_mcp::config;
use project_manager_mcp::http;
use project_manager_mcp::logging;
use project_manager_mcp::mcp::dispatcher::Dispatcher;
use project_manager_mcp::store::Store;
use project_manager_mcp::tools;

/// MCP server exposing project-management tools over HTTP.
///
/// Routes initialize, tools/list and tools/call requests into a registry of
/// worker, project and task tools backed by an in-memory store.
#[derive(Parser, Debug)]
#[command(name = "project-manager-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

async fn serve(bind_addr: &str, dispatcher: Arc<Dispatcher>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(addr = %bind_addr, "HTTP server listening");

    axum::serve(listener, http::router(dispatcher))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint =
        signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
    let mut sigterm =
        signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

    tokio::select! {
        _ = sigint.recv() => info!("Received SIGINT, initiating graceful shutdown"),
        _ = sigterm.recv() => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}

#[cfg(windows)]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Received Ctrl+C, initiating graceful shutdown");
}

/// Entry point for the project-manager-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    // A missing config file is fine: the server runs on built-in defaults.
    let cfg = config::load_or_default(args.config.as_deref());

    let log_level = logging::resolve_level(args.verbose, args.quiet, &cfg.logging.level);
    logging::init(log_level);

    // Display GPL license notice (required by GPLv3 Section 5d)
    eprintln!(
        "project-manager-mcp {}  Copyright (C) 2026  The Embedded Society",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("This program comes with ABSOLUTELY NO WARRANTY.");
    eprintln!("This is free software, licensed under GPL-3.0-or-later.");
    eprintln!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
    eprintln!();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting project-manager-mcp server"
    );

    let store = Arc::new(Store::seeded());
    let registry = tools::build_registry(&store);
    info!(tools = registry.len(), "Tool registry initialised");

    let dispatcher = Arc::new(Dispatcher::new(registry));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(serve(&cfg.server.bind_addr, dispatcher)) {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
