use std::time::Duration;

use thiserror::Error;

const DELAY_VAR: &str = "CONTACT_DELIVERY_DELAY_MS";
const TIMEOUT_VAR: &str = "CONTACT_DELIVERY_TIMEOUT_MS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidMillis { var: &'static str, value: String },
}

/// Server-side settings for contact message delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactConfig {
    /// Simulated delivery latency.
    pub delivery_delay: Duration,
    pub delivery_timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delivery_delay: Duration::from_millis(2000),
            delivery_timeout: Duration::from_millis(10_000),
        }
    }
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let millis = |var: &'static str, default: Duration| match lookup(var) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidMillis { var, value }),
        };
        Ok(Self {
            delivery_delay: millis(DELAY_VAR, defaults.delivery_delay)?,
            delivery_timeout: millis(TIMEOUT_VAR, defaults.delivery_timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |k| vars.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ContactConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ContactConfig::default());
        assert_eq!(config.delivery_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_overrides() {
        let config = ContactConfig::from_lookup(lookup(&[
            (DELAY_VAR, "0"),
            (TIMEOUT_VAR, " 500 "),
        ]))
        .unwrap();
        assert_eq!(config.delivery_delay, Duration::ZERO);
        assert_eq!(config.delivery_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = ContactConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidMillis {
                var: TIMEOUT_VAR,
                value: "soon".to_string()
            }
        );
    }
}
