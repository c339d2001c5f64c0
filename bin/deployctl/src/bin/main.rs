//! CLI to inspect the project's compiler, network and verification settings.
//!
//! - `show`: print the configuration as TOML or JSON
//! - `networks`: list configured networks
//! - `network <name>`: describe one network
//! - `check`: report unfilled placeholders
//! - `accounts <name>`: print signer addresses for a network

use clap::{Parser, Subcommand};
use deployctl::{
    account_addresses, check_placeholders, describe_network, load_config, network_summary,
    render, Format,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "deployctl")]
#[command(about = "Inspect compiler, network and verification settings")]
struct Cli {
    /// Path to the configuration file (built-in configuration when omitted)
    #[arg(short, long, env = "DEPLOY_CONFIG")]
    config: Option<PathBuf>,

    /// Resolve ${VAR} references from the environment
    #[arg(long)]
    resolve_env: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the configuration
    Show {
        #[arg(long, value_enum, default_value = "toml")]
        format: Format,
    },

    /// List configured networks
    Networks,

    /// Describe one network
    Network { name: String },

    /// Report unfilled placeholders
    Check {
        /// Fail if any placeholder is left
        #[arg(long)]
        strict: bool,
    },

    /// Print signer addresses derived from a network's accounts
    Accounts { name: String },
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Show { format } => {
            let config = load_config(cli.config.as_deref(), cli.resolve_env)?;
            println!("{}", render(&config, format)?);
        }
        Command::Networks => {
            let config = load_config(cli.config.as_deref(), cli.resolve_env)?;
            for line in network_summary(&config) {
                println!("{line}");
            }
        }
        Command::Network { name } => {
            let config = load_config(cli.config.as_deref(), cli.resolve_env)?;
            println!("{}", describe_network(config.get_network(&name)?));
        }
        Command::Check { strict } => {
            let config = load_config(cli.config.as_deref(), cli.resolve_env)?;
            let count = check_placeholders(&config, strict)?;
            info!(count, "Check completed");
        }
        Command::Accounts { name } => {
            let config = load_config(cli.config.as_deref(), cli.resolve_env)?;
            for address in account_addresses(&config, &name)? {
                println!("{address}");
            }
        }
    }

    Ok(())
}
