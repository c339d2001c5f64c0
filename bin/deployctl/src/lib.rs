//! Inspection commands for project configurations.

use alloy_primitives::Address;
use config::{NetworkKind, NetworkProfile, ProjectConfig};
use eyre::{bail, Result};
use std::{fmt::Write, path::Path};
use tracing::{debug, info, warn};

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Toml,
    Json,
}

/// Load the configuration from `path`, or the built-in one when no path is
/// given, optionally resolving `${VAR}` references from the environment.
pub fn load_config(path: Option<&Path>, resolve_env: bool) -> Result<ProjectConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading config: {}", path.display());
            ProjectConfig::from_file(path)?
        }
        None => {
            debug!("Using built-in config");
            config::load().clone()
        }
    };

    if resolve_env {
        return Ok(config.expand_env()?);
    }

    Ok(config)
}

pub fn render(config: &ProjectConfig, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Toml => config.to_toml_string()?,
        Format::Json => serde_json::to_string_pretty(config)?,
    };

    Ok(rendered)
}

/// One line per network: name, kind, url and number of accounts.
pub fn network_summary(config: &ProjectConfig) -> Vec<String> {
    config
        .networks
        .values()
        .map(|profile| {
            let marker = if profile.name == config.default_network {
                "*"
            } else {
                " "
            };
            format!(
                "{} {:<12} {:<10} {:<48} {}",
                marker,
                profile.name,
                profile.kind(),
                profile.url().unwrap_or("-"),
                profile.credentials.len()
            )
        })
        .collect()
}

/// Human-readable profile description. Keys are counted, never printed.
pub fn describe_network(profile: &NetworkProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "name:     {}", profile.name);
    let _ = writeln!(out, "kind:     {}", profile.kind());
    let _ = writeln!(out, "url:      {}", profile.url().unwrap_or("-"));
    let _ = write!(out, "accounts: {}", profile.credentials.len());
    if profile.kind() == NetworkKind::Simulated {
        let _ = write!(out, " (framework-managed)");
    }

    out
}

/// Log every unfilled placeholder. With `strict`, any placeholder is an error.
pub fn check_placeholders(config: &ProjectConfig, strict: bool) -> Result<usize> {
    let placeholders = config.placeholders();

    for placeholder in &placeholders {
        warn!("Unfilled placeholder: {}", placeholder);
    }

    if placeholders.is_empty() {
        info!("No unfilled placeholders");
    } else if strict {
        bail!("{} unfilled placeholder(s)", placeholders.len());
    }

    Ok(placeholders.len())
}

/// Signer addresses for the named network. The profile's own `${VAR}`
/// references are resolved from the environment first.
pub fn account_addresses(config: &ProjectConfig, network: &str) -> Result<Vec<Address>> {
    let profile = config.get_network(network)?.expand_env()?;
    let addresses = accounts::network_addresses(&profile)?;

    Ok(addresses)
}
