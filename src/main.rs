//! Entry point: parse flags, load the team cache, then run the prompt.

use anyhow::Context;
use clap::Parser;
use nhl_stats::{cli::NhlCli, session, CommandContext, NhlClient};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = NhlCli::parse();
    init_tracing(cli.debug);

    let client = NhlClient::new(cli.base_url.as_str()).context("failed to build HTTP client")?;
    let ctx = CommandContext::load(client)
        .await
        .with_context(|| format!("failed to load teams from {}", cli.base_url))?;
    tracing::info!(teams = ctx.teams.len(), "ready");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session::run(&ctx, stdin.lock(), &mut stdout).await?;

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `--debug`.
fn init_tracing(debug: bool) {
    let default_directive = if debug { "nhl_stats=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
