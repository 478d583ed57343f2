use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Check whether an Australian business name is available, or look up an ABN
#[derive(Debug, Parser)]
#[command(name = "abn-check", version, about)]
pub struct Cli {
    /// Config file (default: ~/.abn-check/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Origin serving the lookup services, e.g. http://127.0.0.1:3000 for a local proxy
    #[arg(long, global = true, env = "ABN_CHECK_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Mode to run; the interactive form when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Non-interactive modes
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one search and print the result
    Search {
        /// Business name or 11-digit ABN
        query: String,
    },
    /// Forward /microsvc requests to the lookup services
    Proxy {
        /// Address to listen on
        #[arg(long, value_name = "ADDR")]
        listen: Option<String>,

        /// Origin to forward to
        #[arg(long, value_name = "URL")]
        upstream: Option<String>,
    },
}
