//! Service configuration loaded from environment variables.

use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
#[error("failed to load config from environment: {0}")]
pub struct ConfigError(#[from] envy::Error);

/// Loads a service configuration struct from the environment.
///
/// Implementors derive `serde::Deserialize`; field `database_url` is read from
/// `DATABASE_URL`. Use `#[serde(default = ...)]` for optional variables.
pub trait Config: Sized + DeserializeOwned {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    /// Load from explicit `(NAME, value)` pairs instead of the process environment.
    fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }
}
