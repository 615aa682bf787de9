use std::{fmt, path::PathBuf, str::FromStr};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::navigation_target::{
    CUSTOMER_PAGE, MERCHANT_PAGE, NavigationTarget, RoleTargets,
};
use crate::role_router::{LoginRoleRouter, UnknownRolePolicy};

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub application: AppSettings,
    #[serde(default)]
    pub routing: RoutingSettings,
}

#[derive(Deserialize, Debug)]
pub struct AppSettings {
    pub host: [u8; 4], // IPv4 address
    pub port: u16,
    pub static_dir: PathBuf,
}

#[derive(Deserialize, Debug, Default)]
pub struct RoutingSettings {
    #[serde(default)]
    pub unknown_role_policy: UnknownRolePolicy,
    #[serde(default)]
    pub customer_page: Option<NavigationTarget>,
    #[serde(default)]
    pub merchant_page: Option<NavigationTarget>,
}

impl RoutingSettings {
    pub fn role_router(&self) -> LoginRoleRouter {
        let mut targets = RoleTargets::default();
        if let Some(page) = &self.customer_page {
            targets.customer_page = page.clone();
        }
        if let Some(page) = &self.merchant_page {
            targets.merchant_page = page.clone();
        }

        LoginRoleRouter::new(targets, self.unknown_role_policy)
    }
}

impl fmt::Display for RoutingSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "customer -> {}, merchant -> {}, unknown roles: {:?}",
            self.customer_page
                .as_ref()
                .map_or(CUSTOMER_PAGE, NavigationTarget::as_str),
            self.merchant_page
                .as_ref()
                .map_or(MERCHANT_PAGE, NavigationTarget::as_str),
            self.unknown_role_policy
        )
    }
}

enum RunningEnv {
    Local,
    Production,
}

impl RunningEnv {
    pub fn as_str(&self) -> &str {
        match self {
            RunningEnv::Local => "local",
            RunningEnv::Production => "production",
        }
    }
}

impl fmt::Display for RunningEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunningEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(RunningEnv::Local),
            "production" => Ok(RunningEnv::Production),
            other => Err(format!(
                "{other} is not a supported environment. \
                Use either `local` or `production`."
            )),
        }
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let current_dir = std::env::current_dir().map_err(|e| {
        ConfigError::Message(format!("Failed to get current directory: {e}"))
    })?;
    let config_path = current_dir.join("configurations");

    let running_env: RunningEnv = std::env::var("RUNNING_ENV")
        .unwrap_or_else(|_| "local".to_string())
        .parse()
        .map_err(|e| {
            ConfigError::Message(format!("Failed to parse RUNNING_ENV: {e}"))
        })?;

    tracing::debug!(
        "Loading configuration for {running_env} from {}",
        config_path.display()
    );

    let app_config_file = format!("{running_env}.yaml");
    let config = Config::builder()
        .add_source(File::from(config_path.join("base.yaml")))
        .add_source(File::from(config_path.join(app_config_file)))
        .add_source(Environment::with_prefix("TABLESIDE").separator("__"))
        .build()?;

    config.try_deserialize::<Settings>()
}
