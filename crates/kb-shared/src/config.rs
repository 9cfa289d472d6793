//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;
use crate::types::DeletePolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub navigation: NavigationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// GraphQL endpoint of the knowledge-base backend.
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    pub delete_policy: DeletePolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "kbadmin")?
            .set_default("api.endpoint", "http://localhost:3000/graphql")?
            .set_default(
                "api.timeout_seconds",
                crate::constants::DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )?
            .set_default("navigation.delete_policy", "reject")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
