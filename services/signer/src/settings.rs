//! Service settings loaded from `SIGNER_*` environment variables

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Signer service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,
    /// Reject `/sign` requests lacking a `Bearer <token>` header
    pub require_bearer: bool,
}

impl ServiceConfig {
    /// Create a new ServiceConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SIGNER_BIND_ADDRESS`: Listen address (default: "0.0.0.0:8080")
    /// - `SIGNER_REQUIRE_BEARER`: Enforce the bearer header on `/sign` (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::with_prefix("SIGNER").try_parsing(true))
    }

    fn from_source(source: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:8080")?
            .set_default("require_bearer", true)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
