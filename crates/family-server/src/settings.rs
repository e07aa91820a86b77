//! Server configuration
//!
//! Built-in defaults overlaid by environment variables (`HOST`, `PORT`,
//! `FAMILY_NAME`).

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FAMILY_NAME: &str = "Jackson";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub family_name: String,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("family_name", DEFAULT_FAMILY_NAME)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
