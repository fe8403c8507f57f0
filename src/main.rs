//! Pizza Builder
//!
//! An MCP server for building a pizza and inspecting its nutrition.

use std::time::Duration;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use pizza_builder::build_info::{self, BuildInfo};
use pizza_builder::config::Config;
use pizza_builder::mcp::PizzaService;
use pizza_builder::pizza::Catalog;

/// Time given to the quit response to reach the client before exiting
const QUIT_FLUSH_DELAY: Duration = Duration::from_millis(100);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pizza_builder=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    build_info::print_startup_banner(&BuildInfo::describe(&Catalog::standard(), &config));
    eprintln!("Starting MCP server on stdio...");

    let service = PizzaService::new(config);
    let shutdown = service.shutdown_signal();

    let server = service.serve((stdin(), stdout())).await?;

    let waiting = server.waiting();
    tokio::pin!(waiting);

    tokio::select! {
        result = &mut waiting => {
            let reason = result?;
            tracing::info!(?reason, "MCP session ended");
        }
        _ = shutdown.notified() => {
            // Keep serving briefly so the quit response is written out
            let _ = tokio::time::timeout(QUIT_FLUSH_DELAY, &mut waiting).await;
            tracing::info!("Shutting down after quit");
        }
    }

    Ok(())
}
