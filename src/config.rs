use serde::Deserialize;

use crate::error::ConfigError;

/// Options for [`Graph::has_isomorphic_subgraph`](crate::Graph::has_isomorphic_subgraph).
///
/// May be read from TOML, where every key is optional:
/// ```toml
/// seed = 42
/// max_attempts = 5000
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Seed for the random vertex deletions; `None` draws one from the operating system.
    pub seed: Option<u64>,
    /// Number of random samples before the search checks the remaining vertex subsets in order.
    pub max_attempts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: 100_000,
        }
    }
}

impl SearchConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }

        Ok(config)
    }

    /// A configuration with a fixed seed, for reproducible searches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}
