//! project-manager-mcp-bridge: stdio adapter for desktop MCP clients
//!
//! Reads newline-delimited JSON-RPC requests from stdin, forwards each one
//! to the HTTP server, and writes the validated response back to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use project_manager_mcp::bridge::Bridge;
use project_manager_mcp::config;
use project_manager_mcp::logging;

/// stdio-to-HTTP bridge for the project-manager MCP server.
///
/// Lets stdio-only MCP clients (desktop assistants) talk to the HTTP
/// endpoint; every stdout line is a validated JSON-RPC envelope.
#[derive(Parser, Debug)]
#[command(name = "project-manager-mcp-bridge")]
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

/// Entry point for the bridge. Logging goes to stderr only; stdout belongs
/// to the protocol.
fn main() -> ExitCode {
    let args = Args::parse();

    // Claude-style desktop clients launch the bridge without any setup;
    // a missing config file falls back to http://localhost:7073/api/mcp.
    let cfg = config::load_or_default(args.config.as_deref());

    let log_level = logging::resolve_level(args.verbose, args.quiet, &cfg.logging.level);
    logging::init(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        upstream = %cfg.upstream.url(),
        "Starting project-manager-mcp bridge"
    );

    let bridge = match Bridge::new(&cfg.upstream) {
        Ok(bridge) => bridge,
        Err(e) => {
            error!(error = %e, "Bridge setup failed");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(bridge.run()) {
        Ok(()) => {
            info!("Bridge shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Bridge error");
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
