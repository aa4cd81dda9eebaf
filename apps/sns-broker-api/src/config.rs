use broker_pool::BrokerPoolConfig;
use core_config::{app_info, server::ServerConfig, AppInfo, Environment, FromEnv};
use domain_sns::SnsConfig;
use kv_store::redis::RedisConfig;

/// Application configuration, composed from the shared config library's
/// building blocks plus the broker pool and SNS identity sections.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub broker_pool: BrokerPoolConfig,
    pub sns: SnsConfig,
    pub redis: RedisConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let broker_pool = BrokerPoolConfig::from_env()?;
        let sns = SnsConfig::from_env()?;
        let redis = RedisConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            broker_pool,
            sns,
            redis,
        })
    }
}
