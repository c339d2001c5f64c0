//! Network profiles for deployment targets.
//!
//! A profile is either simulated (no endpoint, the framework runs an
//! in-process chain), local (a node on this machine, no signing keys) or
//! remote (an RPC endpoint with the keys used to sign transactions).

use crate::{
    error::{ConfigError, Result},
    placeholder,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Endpoint of a development node running on this machine.
pub const LOCALHOST_URL: &str = "http://127.0.0.1:8545";

/// How a profile reaches its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    /// In-process chain managed by the framework
    Simulated,
    /// Node reachable without signing credentials
    Local,
    /// Endpoint with signing credentials
    Remote,
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// One deployment target.
///
/// The name is not serialized; it comes from the key the profile is stored
/// under in [`ProjectConfig::networks`](crate::ProjectConfig::networks).
/// `Debug` prints how many keys there are, never the keys.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Network identifier
    #[serde(skip)]
    pub name: String,
    /// RPC endpoint url, absent for simulated networks
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// Signing keys, in the order the framework derives accounts
    #[serde(rename = "accounts", default, skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<String>,
}

impl NetworkProfile {
    /// In-process network with no endpoint and no keys.
    pub fn simulated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Endpoint without signing keys.
    pub fn local(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint_url: Some(url.into()),
            credentials: Vec::new(),
        }
    }

    /// Endpoint with signing keys.
    pub fn remote<I, S>(name: impl Into<String>, url: impl Into<String>, credentials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            endpoint_url: Some(url.into()),
            credentials: credentials.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> NetworkKind {
        match (self.url(), self.credentials.is_empty()) {
            (None, _) => NetworkKind::Simulated,
            (Some(_), true) => NetworkKind::Local,
            (Some(_), false) => NetworkKind::Remote,
        }
    }

    /// Endpoint url, treating an empty string as absent.
    pub fn url(&self) -> Option<&str> {
        self.endpoint_url.as_deref().filter(|url| !url.is_empty())
    }

    pub const fn is_signing(&self) -> bool {
        !self.credentials.is_empty()
    }

    /// Copy of this profile with variable references in its url and keys
    /// resolved by `lookup`.
    pub fn expand_with<F>(&self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut expanded = self.clone();
        if let Some(url) = expanded.endpoint_url.as_mut() {
            let location = format!("networks.{}.url", self.name);
            *url = placeholder::expand_value(url, &location, &lookup)?;
        }
        for (index, key) in expanded.credentials.iter_mut().enumerate() {
            let location = format!("networks.{}.accounts[{}]", self.name, index);
            *key = placeholder::expand_value(key, &location, &lookup)?;
        }
        expanded.validate()?;

        Ok(expanded)
    }

    /// Resolve variable references from the process environment.
    pub fn expand_env(&self) -> Result<Self> {
        self.expand_with(|var| std::env::var(var).ok())
    }

    /// A profile that signs must have somewhere to send what it signs.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.is_signing() && self.url().is_none() {
            return Err(ConfigError::MissingEndpoint(self.name.clone()));
        }

        Ok(())
    }
}

impl fmt::Debug for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkProfile")
            .field("name", &self.name)
            .field("endpoint_url", &self.endpoint_url)
            .field("credentials", &self.credentials.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_kinds() {
        assert_eq!(
            NetworkProfile::simulated("hardhat").kind(),
            NetworkKind::Simulated
        );
        assert_eq!(
            NetworkProfile::local("localhost", LOCALHOST_URL).kind(),
            NetworkKind::Local
        );
        assert_eq!(
            NetworkProfile::remote("mainnet", "https://rpc.example", ["key"]).kind(),
            NetworkKind::Remote
        );
    }

    #[test]
    fn test_credentials_require_url() {
        let profile = NetworkProfile {
            name: "broken".to_string(),
            endpoint_url: Some(String::new()),
            credentials: vec!["key".to_string()],
        };

        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint(name) if name == "broken"));
    }

    #[test]
    fn test_url_without_credentials_is_valid() {
        assert!(NetworkProfile::local("localhost", LOCALHOST_URL)
            .validate()
            .is_ok());
        assert!(NetworkProfile::simulated("hardhat").validate().is_ok());
    }

    #[test]
    fn test_expand_profile() {
        let profile = NetworkProfile::remote(
            "mainnet",
            "https://mainnet.infura.io/v3/${INFURA_PROJECT_ID}",
            ["${PRIVATE_KEY}"],
        );
        let lookup = |var: &str| match var {
            "INFURA_PROJECT_ID" => Some("project".to_string()),
            "PRIVATE_KEY" => Some("0x01".to_string()),
            _ => None,
        };

        let expanded = profile.expand_with(lookup).unwrap();
        assert_eq!(expanded.url(), Some("https://mainnet.infura.io/v3/project"));
        assert_eq!(expanded.credentials, vec!["0x01"]);
        assert_eq!(expanded.name, "mainnet");
    }

    #[test]
    fn test_expand_profile_missing_variable() {
        let profile = NetworkProfile::remote("mainnet", "https://rpc.example", ["${PRIVATE_KEY}"]);

        let err = profile.expand_with(|_| None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVariable { var, location }
                if var == "PRIVATE_KEY" && location == "networks.mainnet.accounts[0]"
        ));
    }

    #[test]
    fn test_debug_hides_keys() {
        let key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
        let profile = NetworkProfile::remote("mainnet", "https://rpc.example", [key, key]);
        let rendered = format!("{profile:?}");

        assert!(!rendered.contains(key));
        assert!(rendered.contains("credentials: 2"));
        assert!(rendered.contains("https://rpc.example"));
    }

    #[test]
    fn test_profile_toml_field_names() {
        let profile: NetworkProfile =
            toml::from_str("url = \"https://rpc.example\"\naccounts = [\"a\", \"b\"]").unwrap();

        assert_eq!(profile.endpoint_url.as_deref(), Some("https://rpc.example"));
        assert_eq!(profile.credentials, vec!["a", "b"]);
        assert!(profile.name.is_empty());
    }
}
