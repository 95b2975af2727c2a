//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_HTTP_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Where employee records live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL through a bounded connection pool
    Postgres,
    /// Process memory; records are lost on restart
    Memory,
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    /// Upper bound on concurrently checked-out connections
    pub max_connections: u32,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// HTTP listen port
    pub http_port: u16,
    /// Browser origins allowed by CORS
    pub cors_origins: Vec<String>,
    pub storage: StorageBackend,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let storage = match var("STORAGE", "postgres").to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => StorageBackend::Postgres,
            "memory" => StorageBackend::Memory,
            other => return Err(format!("STORAGE must be 'postgres' or 'memory', got '{other}'").into()),
        };

        Ok(Self {
            database: DatabaseConfig {
                host: var("DB_HOST", "localhost"),
                user: var("DB_USER", "postgres"),
                password: var("DB_PASSWORD", ""),
                name: var("DB_NAME", "employee_management"),
                port: lookup("DB_PORT")
                    .and_then(|p| p.trim().parse::<u16>().ok())
                    .filter(|p| *p > 0)
                    .unwrap_or(DEFAULT_DB_PORT),
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|n| n.trim().parse::<u32>().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            },
            http_port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            cors_origins: var("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, BoxError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.name, "employee_management");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.storage, StorageBackend::Postgres);
    }

    #[test]
    fn invalid_ports_fall_back() {
        let config = load(&[("DB_PORT", "abc"), ("PORT", "70000")]).unwrap();
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.http_port, 3000);

        let config = load(&[("DB_PORT", "0")]).unwrap();
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn explicit_values_win() {
        let config = load(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("STORAGE", "memory"),
        ])
        .unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn unknown_storage_is_an_error() {
        assert!(load(&[("STORAGE", "redis")]).is_err());
    }
}
