use thiserror::Error;

/// Errors raised while building, reading or resolving a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Requested network is not part of the configuration
    #[error("Network not found: {0}")]
    NetworkNotFound(String),

    /// Same network name registered twice
    #[error("Duplicate network: {0}")]
    DuplicateNetwork(String),

    /// Signing credentials configured without an endpoint to send them to
    #[error("Network {0} has accounts but no url")]
    MissingEndpoint(String),

    /// Profile name does not match the key it is stored under
    #[error("Network stored as {key} is named {name}")]
    NameMismatch { key: String, name: String },

    /// Optimizer enabled with zero runs
    #[error("Optimizer runs must be positive when the optimizer is enabled")]
    InvalidOptimizerRuns,

    /// Compiler version left blank
    #[error("Compiler version is empty")]
    EmptyCompilerVersion,

    /// Default network is not one of the configured networks
    #[error("Default network {0} is not configured")]
    UnknownDefaultNetwork(String),

    /// Template value references an unset variable
    #[error("Variable {var} referenced by {location} is not set")]
    MissingVariable { var: String, location: String },

    /// Error reading the configuration file
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the configuration file
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Error rendering the configuration
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
