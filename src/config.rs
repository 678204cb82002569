//! Connection settings for the Artemis server.

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Host and port of the machine running Artemis.
///
/// # Example
///
/// ```
/// use artemis_rgb::ArtemisConfig;
///
/// let config = ArtemisConfig::default();
/// assert_eq!(config.url("/profiles"), "http://localhost:9696/profiles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtemisConfig {
    #[serde(alias = "ip")]
    host: String,
    port: u16,
}

impl Default for ArtemisConfig {
    fn default() -> Self {
        ArtemisConfig {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
        }
    }
}

impl ArtemisConfig {
    pub const DEFAULT_HOST: &'static str = "localhost";
    pub const DEFAULT_PORT: u16 = 9696;

    const HOST_VAR: &'static str = "ARTEMIS_HOST";
    const PORT_VAR: &'static str = "ARTEMIS_PORT";

    pub fn new(host: &str, port: u16) -> Self {
        ArtemisConfig {
            host: host.to_string(),
            port,
        }
    }

    /// Reads `ARTEMIS_HOST` and `ARTEMIS_PORT`, using the defaults for unset variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(host) = lookup(Self::HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(Self::PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{} is not a valid port: {port:?}", Self::PORT_VAR))
            })?;
        }
        Ok(config)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Full URL for an API path. `path` is appended verbatim and should start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.host, self.port, path)
    }
}
