use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub database_max_connections: u32,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDRESS` and `DATABASE_MAX_CONNECTIONS` fall
    /// back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "DATABASE_MAX_CONNECTIONS".to_string(),
                value,
            })?,
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            bind_address,
            database_max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config =
            Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/scouts")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/scouts");
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.database_max_connections, 10);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.database_max_connections, 3);
    }

    #[test]
    fn requires_database_url() {
        let result = Config::from_lookup(lookup(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn rejects_invalid_pool_size() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
