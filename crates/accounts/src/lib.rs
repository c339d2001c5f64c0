//! Signer accounts derived from network profile credentials.
//!
//! Keys are parsed into local signers so their addresses can be shown or
//! handed to the deployment framework. Nothing is signed or sent here.

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use config::{placeholder, NetworkProfile};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AccountError {
    /// Credential is still a template value
    #[error("Account {0} is an unfilled placeholder")]
    Placeholder(String),

    /// Error with private key
    #[error("Invalid private key for {location}: {reason}")]
    InvalidPrivateKey { location: String, reason: String },
}

/// Parse a hex private key (with or without `0x` prefix) into a signer.
///
/// `location` names the key in errors; the key itself is never included.
pub fn signer_from_key(key: &str, location: &str) -> Result<PrivateKeySigner, AccountError> {
    if placeholder::is_placeholder(key) {
        return Err(AccountError::Placeholder(location.to_string()));
    }

    key.trim()
        .parse()
        .map_err(|e| AccountError::InvalidPrivateKey {
            location: location.to_string(),
            reason: format!("{}", e),
        })
}

/// One signer per credential, in configuration order.
pub fn network_signers(profile: &NetworkProfile) -> Result<Vec<PrivateKeySigner>, AccountError> {
    let signers = profile
        .credentials
        .iter()
        .enumerate()
        .map(|(index, key)| {
            signer_from_key(key, &format!("networks.{}.accounts[{}]", profile.name, index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        network = %profile.name,
        count = signers.len(),
        "Derived signers"
    );

    Ok(signers)
}

/// Addresses of the profile's signers, in configuration order.
pub fn network_addresses(profile: &NetworkProfile) -> Result<Vec<Address>, AccountError> {
    Ok(network_signers(profile)?
        .iter()
        .map(PrivateKeySigner::address)
        .collect())
}
