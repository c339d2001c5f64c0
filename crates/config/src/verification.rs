use serde::{Deserialize, Serialize};
use std::fmt;

/// External contract-verification services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationService {
    #[default]
    Etherscan,
}

impl fmt::Display for VerificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Etherscan => write!(f, "etherscan"),
        }
    }
}

/// API key for a verification service.
///
/// The key is opaque: it is handed to the service untouched and never
/// printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCredential {
    #[serde(default)]
    pub service: VerificationService,
    pub api_key: String,
}

impl VerificationCredential {
    pub fn etherscan(api_key: impl Into<String>) -> Self {
        Self {
            service: VerificationService::Etherscan,
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for VerificationCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationCredential")
            .field("service", &self.service)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_key() {
        let credential = VerificationCredential::etherscan("ABCDEF123");
        let rendered = format!("{credential:?}");

        assert!(!rendered.contains("ABCDEF123"));
        assert!(rendered.contains("Etherscan"));
    }

    #[test]
    fn test_service_defaults_to_etherscan() {
        let credential: VerificationCredential = toml::from_str("api_key = \"k\"").unwrap();
        assert_eq!(credential.service, VerificationService::Etherscan);
        assert_eq!(credential.api_key, "k");
    }
}
