use crate::error::config::ConfigError;

/// Connection settings read from the environment.
pub struct Config {
    pub database_url: String,
    pub mongodb_url: String,
    pub mongodb_database: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present and non-empty
    /// - `Err(ConfigError::MissingEnvVar)` - A variable is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is empty or not valid unicode
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            mongodb_url: require_env("MONGODB_URL")?,
            mongodb_database: require_env("MONGODB_DATABASE")?,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is empty".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => Err(ConfigError::MissingEnvVar(var.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
