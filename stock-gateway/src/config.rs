//! Gateway configuration loaded from the environment.

use std::{net::SocketAddr, str::FromStr};

use stock_core::examples::EXAMPLE_TEACHERS;

/// Default bind address when `STOCK_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3456";

/// How a quantity update that changes nothing is reported.
///
/// Document stores count a write of the current value as matched but not
/// modified. `Strict` reports that as a failure; `Lenient` reports success
/// whenever the item exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Zero modified documents is an internal error.
    #[default]
    Strict,
    /// Zero modified documents is a successful no-op.
    Lenient,
}

impl FromStr for UpdatePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ConfigError::InvalidValue {
                var: "STOCK_UPDATE_POLICY",
                value: s.to_owned(),
                expected: "'strict' or 'lenient'",
            }),
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable was set to a value that cannot be parsed.
    #[error("invalid value '{value}' for {var}: expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Runtime configuration for the gateway binary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Handling of zero-modified quantity updates.
    pub update_policy: UpdatePolicy,
    /// Load the example stock items into the store at start-up.
    pub seed_examples: bool,
    /// Teacher usernames accepted as credentials.
    pub teachers: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3456)),
            update_policy: UpdatePolicy::Strict,
            seed_examples: true,
            teachers: EXAMPLE_TEACHERS.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if any variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unset variables fall back to [`GatewayConfig::default`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if any variable fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = lookup("STOCK_LISTEN_ADDR") {
            config.listen_addr = addr.parse().map_err(|_| ConfigError::InvalidValue {
                var: "STOCK_LISTEN_ADDR",
                value: addr.clone(),
                expected: "a socket address such as 127.0.0.1:3456",
            })?;
        }
        if let Some(policy) = lookup("STOCK_UPDATE_POLICY") {
            config.update_policy = policy.parse()?;
        }
        if let Some(seed) = lookup("STOCK_SEED_EXAMPLES") {
            config.seed_examples = parse_bool("STOCK_SEED_EXAMPLES", &seed)?;
        }
        if let Some(teachers) = lookup("STOCK_TEACHERS") {
            config.teachers = teachers
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect();
        }

        Ok(config)
    }
}

/// Parse a boolean flag, case-insensitively: `1/true/yes/on` or `0/false/no/off`.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    parse_flag(value).ok_or_else(|| ConfigError::InvalidValue {
        var,
        value: value.to_owned(),
        expected: "a boolean",
    })
}
