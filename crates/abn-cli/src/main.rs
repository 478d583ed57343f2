//! abn-check - business name availability and ABN lookup
#![cfg_attr(
    test,
    allow(
        dead_code,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        reason = "Allow for tests"
    )
)]

use std::process::ExitCode;

use abn_cli::cli::{Cli, Command};
use anyhow::Result;
use clap::Parser as _;

mod handlers;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = handlers::load_settings(cli.config, cli.base_url)?;

    match cli.command {
        None => handlers::handle_interactive(settings).await,
        Some(Command::Search { query }) => handlers::handle_search(&settings, &query).await,
        Some(Command::Proxy { listen, upstream }) => {
            handlers::handle_proxy(settings, listen, upstream).await
        }
    }
}
