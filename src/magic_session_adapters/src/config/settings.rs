use std::time::Duration;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use http::HeaderValue;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth_server: AuthServerSettings,
    #[serde(default)]
    pub allowed_origins: Option<AllowedOrigins>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServerSettings {
    pub url: String,
    pub timeout_in_millis: u64,
}

impl AuthServerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

/// Origins allowed to call the service cross-origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl Settings {
    /// Load settings from `.env`, the optional `config/base.json` file and
    /// `MAGIC_SESSION__*` environment variables, in increasing precedence.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let builder = Self::defaults()?
            .add_source(File::with_name(env::CONFIG_FILE).required(false))
            .add_source(Self::environment());

        Self::build(builder)
    }

    /// Builder pre-populated with every optional setting.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default(
                "auth_server.timeout_in_millis",
                prod::auth_server::TIMEOUT_IN_MILLIS,
            )?)
    }

    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .prefix_separator(env::ENV_SEPARATOR)
            .separator(env::ENV_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("allowed_origins")
            .try_parsing(true)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        reqwest::Url::parse(&self.auth_server.url).map_err(|e| SettingsError::Invalid {
            key: "auth_server.url",
            reason: e.to_string(),
        })?;

        if self.auth_server.timeout_in_millis == 0 {
            return Err(SettingsError::Invalid {
                key: "auth_server.timeout_in_millis",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_settings() {
        let builder = Settings::defaults()
            .unwrap()
            .set_override("auth_server.url", "http://127.0.0.1:9000/mina_auth/")
            .unwrap();

        let settings = Settings::build(builder).unwrap();

        assert_eq!(settings.application.address, "0.0.0.0:3000");
        assert_eq!(settings.auth_server.timeout(), Duration::from_secs(10));
        assert!(settings.allowed_origins.is_none());
    }

    #[test]
    fn test_missing_auth_server_url_fails() {
        let result = Settings::build(Settings::defaults().unwrap());
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_invalid_auth_server_url_fails() {
        let builder = Settings::defaults()
            .unwrap()
            .set_override("auth_server.url", "mina auth")
            .unwrap();

        assert!(matches!(
            Settings::build(builder),
            Err(SettingsError::Invalid {
                key: "auth_server.url",
                ..
            })
        ));
    }

    #[test]
    fn test_environment_overrides() {
        let vars = config::Map::from([
            (
                "MAGIC_SESSION__AUTH_SERVER__URL".to_string(),
                "http://auth.internal/mina_auth/".to_string(),
            ),
            (
                "MAGIC_SESSION__AUTH_SERVER__TIMEOUT_IN_MILLIS".to_string(),
                "2500".to_string(),
            ),
            (
                "MAGIC_SESSION__ALLOWED_ORIGINS".to_string(),
                "https://a.example,https://b.example".to_string(),
            ),
        ]);

        let builder = Settings::defaults()
            .unwrap()
            .add_source(Settings::environment().source(Some(vars)));
        let settings = Settings::build(builder).unwrap();

        assert_eq!(settings.auth_server.url, "http://auth.internal/mina_auth/");
        assert_eq!(settings.auth_server.timeout_in_millis, 2500);

        let origins = settings.allowed_origins.unwrap();
        assert!(origins.contains(&HeaderValue::from_static("https://b.example")));
        assert!(!origins.contains(&HeaderValue::from_static("https://c.example")));
    }
}
