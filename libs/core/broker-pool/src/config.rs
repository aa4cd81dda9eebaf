use core_config::{env_or_default, ConfigError, FromEnv};

/// Broker connection pool configuration.
#[derive(Clone, Debug)]
pub struct BrokerPoolConfig {
    /// URL of the broker cluster to dial each pool connection against.
    pub url: String,
    /// Number of connections to keep in the pool. Defaults to 3 if unset or 0.
    pub pool_size: usize,
}

impl BrokerPoolConfig {
    pub fn new(url: impl Into<String>, pool_size: usize) -> Self {
        let pool_size = if pool_size == 0 { 3 } else { pool_size };
        Self {
            url: url.into(),
            pool_size,
        }
    }
}

impl FromEnv for BrokerPoolConfig {
    /// Reads `NATS_URL` (required) and `NATS_POOL_SIZE` (default 3).
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("NATS_URL")
            .map_err(|_| ConfigError::MissingEnvVar("NATS_URL".to_string()))?;

        let pool_size_raw = env_or_default("NATS_POOL_SIZE", "3");
        let pool_size: usize = pool_size_raw.parse().map_err(|e| ConfigError::ParseError {
            key: "NATS_POOL_SIZE".to_string(),
            details: format!("{e}"),
        })?;

        Ok(Self::new(url, pool_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_zero_pool_size_to_three() {
        let config = BrokerPoolConfig::new("nats://localhost:4222", 0);
        assert_eq!(config.pool_size, 3);
    }

    #[test]
    fn test_from_env_defaults_pool_size() {
        temp_env::with_vars(
            [
                ("NATS_URL", Some("nats://localhost:4222")),
                ("NATS_POOL_SIZE", None::<&str>),
            ],
            || {
                let config = BrokerPoolConfig::from_env().unwrap();
                assert_eq!(config.pool_size, 3);
            },
        );
    }

    #[test]
    fn test_from_env_custom_pool_size() {
        temp_env::with_vars(
            [
                ("NATS_URL", Some("nats://localhost:4222")),
                ("NATS_POOL_SIZE", Some("5")),
            ],
            || {
                let config = BrokerPoolConfig::from_env().unwrap();
                assert_eq!(config.pool_size, 5);
            },
        );
    }

    #[test]
    fn test_from_env_missing_url() {
        temp_env::with_var_unset("NATS_URL", || {
            let result = BrokerPoolConfig::from_env();
            assert!(result.is_err());
        });
    }
}
