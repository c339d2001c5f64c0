//! Configuration types for smart-contract projects.
//!
//! This crate provides:
//! - Compiler settings (Solidity version, optimizer)
//! - Network profiles keyed by name (endpoint url, signing keys)
//! - The contract verification credential
//! - TOML loading and placeholder resolution

pub mod compiler;
pub mod error;
pub mod network;
pub mod placeholder;
pub mod project;
pub mod verification;

pub use compiler::{CompilerSettings, OptimizerSettings};
pub use error::ConfigError;
pub use network::{NetworkKind, NetworkProfile};
pub use placeholder::Placeholder;
pub use project::{load, ProjectConfig, ProjectConfigBuilder};
pub use verification::{VerificationCredential, VerificationService};
