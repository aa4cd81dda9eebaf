use core_config::{ConfigError, FromEnv};

/// Region and account identity used to render SRNs for this deployment.
#[derive(Clone, Debug)]
pub struct SnsConfig {
    pub region: String,
    pub account_id: String,
}

impl FromEnv for SnsConfig {
    /// Reads `SNS_REGION` and `SNS_ACCOUNT_ID`, both required.
    fn from_env() -> Result<Self, ConfigError> {
        let region = std::env::var("SNS_REGION")
            .map_err(|_| ConfigError::MissingEnvVar("SNS_REGION".to_string()))?;
        let account_id = std::env::var("SNS_ACCOUNT_ID")
            .map_err(|_| ConfigError::MissingEnvVar("SNS_ACCOUNT_ID".to_string()))?;
        Ok(Self { region, account_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [("SNS_REGION", Some("us-east-1")), ("SNS_ACCOUNT_ID", Some("123456789012"))],
            || {
                let config = SnsConfig::from_env().unwrap();
                assert_eq!(config.region, "us-east-1");
                assert_eq!(config.account_id, "123456789012");
            },
        );
    }

    #[test]
    fn test_from_env_missing_region() {
        temp_env::with_vars(
            [("SNS_REGION", None::<&str>), ("SNS_ACCOUNT_ID", Some("123456789012"))],
            || assert!(SnsConfig::from_env().is_err()),
        );
    }
}
