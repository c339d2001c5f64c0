//! Project configuration: compiler, networks and verification.

use crate::{
    compiler::{CompilerSettings, OptimizerSettings},
    error::{ConfigError, Result},
    network::{NetworkProfile, LOCALHOST_URL},
    placeholder::{self, Placeholder},
    verification::VerificationCredential,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::{btree_map::Entry, BTreeMap},
    path::Path,
    sync::LazyLock,
};
use tracing::debug;

/// In-process network the framework always provides.
pub const HARDHAT_NETWORK: &str = "hardhat";

static BUILTIN: LazyLock<ProjectConfig> = LazyLock::new(ProjectConfig::builtin);

/// Returns the project's built-in configuration.
///
/// Built once on first access and shared read-only for the rest of the
/// process. Placeholder values are returned as written.
pub fn load() -> &'static ProjectConfig {
    &BUILTIN
}

/// Complete project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectConfig")]
pub struct ProjectConfig {
    /// Network used when the caller does not name one
    pub default_network: String,
    /// Compiler settings
    pub compiler: CompilerSettings,
    /// Deployment targets keyed by name
    pub networks: BTreeMap<String, NetworkProfile>,
    /// Contract verification credential
    pub verification: VerificationCredential,
}

/// On-disk shape; profile names are filled in from the table keys and the
/// result is validated before it becomes a [`ProjectConfig`].
#[derive(Deserialize)]
struct RawProjectConfig {
    #[serde(default = "default_network_name")]
    default_network: String,
    compiler: CompilerSettings,
    #[serde(default)]
    networks: BTreeMap<String, NetworkProfile>,
    verification: VerificationCredential,
}

fn default_network_name() -> String {
    HARDHAT_NETWORK.to_string()
}

impl TryFrom<RawProjectConfig> for ProjectConfig {
    type Error = ConfigError;

    fn try_from(raw: RawProjectConfig) -> Result<Self> {
        let mut networks = raw.networks;
        for (name, profile) in &mut networks {
            profile.name.clone_from(name);
        }
        networks
            .entry(HARDHAT_NETWORK.to_string())
            .or_insert_with(|| NetworkProfile::simulated(HARDHAT_NETWORK));

        let config = Self {
            default_network: raw.default_network,
            compiler: raw.compiler,
            networks,
            verification: raw.verification,
        };
        config.validate()?;

        Ok(config)
    }
}

impl ProjectConfig {
    /// The configuration shipped with the project.
    pub fn builtin() -> Self {
        let networks = [
            NetworkProfile::simulated(HARDHAT_NETWORK),
            NetworkProfile::local("localhost", LOCALHOST_URL),
            NetworkProfile::remote(
                "rinkeby",
                "https://rinkeby.infura.io/v3/${INFURA_PROJECT_ID}",
                ["${PRIVATE_KEY}"],
            ),
            NetworkProfile::remote(
                "mainnet",
                "https://mainnet.infura.io/v3/${INFURA_PROJECT_ID}",
                ["${PRIVATE_KEY}"],
            ),
        ]
        .into_iter()
        .map(|profile| (profile.name.clone(), profile))
        .collect();

        Self {
            default_network: HARDHAT_NETWORK.to_string(),
            compiler: CompilerSettings::new("0.8.19", OptimizerSettings::enabled(200)),
            networks,
            verification: VerificationCredential::etherscan("${ETHERSCAN_API_KEY}"),
        }
    }

    /// Read and validate a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: RawProjectConfig = toml::from_str(contents)?;
        Self::try_from(raw)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Look up a network by name.
    pub fn get_network(&self, name: &str) -> Result<&NetworkProfile> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::NetworkNotFound(name.to_string()))
    }

    pub fn default_profile(&self) -> Result<&NetworkProfile> {
        self.get_network(&self.default_network)
    }

    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Check structural invariants. Placeholder values are not inspected.
    pub fn validate(&self) -> Result<()> {
        self.compiler.validate()?;

        for (key, profile) in &self.networks {
            if *key != profile.name {
                return Err(ConfigError::NameMismatch {
                    key: key.clone(),
                    name: profile.name.clone(),
                });
            }
            profile.validate()?;
        }

        if !self.networks.contains_key(&self.default_network) {
            return Err(ConfigError::UnknownDefaultNetwork(
                self.default_network.clone(),
            ));
        }

        Ok(())
    }

    /// Every field still holding a template value.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        let mut found = Vec::new();
        placeholder::visit_templates(self, |location, value| {
            if placeholder::is_placeholder(value) {
                found.push(Placeholder {
                    location,
                    variables: placeholder::referenced_variables(value),
                });
            }
        });

        found
    }

    /// Copy of this configuration with variable references resolved from
    /// the process environment.
    pub fn expand_env(&self) -> Result<Self> {
        self.expand_with(|var| std::env::var(var).ok())
    }

    /// Copy of this configuration with variable references resolved by
    /// `lookup`. Fails on the first variable `lookup` cannot resolve.
    pub fn expand_with<F>(&self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut expanded = self.clone();
        let mut resolved = 0usize;

        placeholder::visit_templates_mut(&mut expanded, |location, value| {
            let next = placeholder::expand_value(value, location, &lookup)?;
            if next != *value {
                debug!("Resolved {}", location);
                resolved += 1;
                *value = next;
            }
            Ok(())
        })?;

        debug!("Resolved {} template values", resolved);
        expanded.validate()?;

        Ok(expanded)
    }
}

/// Builder for configurations assembled in code.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    default_network: String,
    compiler: CompilerSettings,
    networks: Vec<NetworkProfile>,
    verification: VerificationCredential,
}

impl ProjectConfigBuilder {
    /// Start from a compiler version with the optimizer disabled, no
    /// networks besides the in-process one and an empty verification key.
    pub fn new(compiler_version: impl Into<String>) -> Self {
        Self {
            default_network: default_network_name(),
            compiler: CompilerSettings::new(compiler_version, OptimizerSettings::default()),
            networks: Vec::new(),
            verification: VerificationCredential::etherscan(""),
        }
    }

    pub const fn optimizer(mut self, optimizer: OptimizerSettings) -> Self {
        self.compiler.optimizer = optimizer;
        self
    }

    /// Add a network. Names must be unique.
    pub fn network(mut self, profile: NetworkProfile) -> Self {
        self.networks.push(profile);
        self
    }

    pub fn default_network(mut self, name: impl Into<String>) -> Self {
        self.default_network = name.into();
        self
    }

    pub fn verification(mut self, credential: VerificationCredential) -> Self {
        self.verification = credential;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ProjectConfig> {
        let mut networks = BTreeMap::new();
        for profile in self.networks {
            match networks.entry(profile.name.clone()) {
                Entry::Occupied(entry) => {
                    return Err(ConfigError::DuplicateNetwork(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(profile);
                }
            }
        }
        networks
            .entry(HARDHAT_NETWORK.to_string())
            .or_insert_with(|| NetworkProfile::simulated(HARDHAT_NETWORK));

        let config = ProjectConfig {
            default_network: self.default_network,
            compiler: self.compiler,
            networks,
            verification: self.verification,
        };
        config.validate()?;

        Ok(config)
    }
}
