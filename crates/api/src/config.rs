//! Server configuration and the API variant selector.

use archivist_db::Schema;

/// Which of the two API surfaces a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVariant {
    /// Star Wars episodes and characters.
    Lore,
    /// E-commerce products, customers and orders.
    Catalog,
}

impl ApiVariant {
    /// The database schema this variant reads.
    pub fn schema(self) -> Schema {
        match self {
            ApiVariant::Lore => Schema::Lore,
            ApiVariant::Catalog => Schema::Catalog,
        }
    }

    /// Service name reported by `/health`.
    pub fn service_name(self) -> &'static str {
        match self {
            ApiVariant::Lore => "lore-api",
            ApiVariant::Catalog => "catalog-api",
        }
    }

    pub fn default_database_url(self) -> &'static str {
        match self {
            ApiVariant::Lore => "sqlite://data/starwars.db",
            ApiVariant::Catalog => "sqlite://data/ecommerce.db",
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            ApiVariant::Lore => "Hello from Star Wars API!",
            ApiVariant::Catalog => "Hello from E-commerce API!",
        }
    }
}

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL; the default depends on the variant.
    pub database_url: String,
    /// Upper bound on pooled connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins from the comma-separated `CORS_ORIGINS`.
    /// Empty means the request origin is mirrored.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Load the reference data set into an empty database on startup.
    pub seed_on_startup: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                  |
    /// |------------------------|------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                |
    /// | `PORT`                 | `3000`                                   |
    /// | `DATABASE_URL`         | `sqlite://data/starwars.db` (lore)       |
    /// |                        | `sqlite://data/ecommerce.db` (catalog)   |
    /// | `DB_MAX_CONNECTIONS`   | `5`                                      |
    /// | `CORS_ORIGINS`         | unset: mirror the request origin         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                     |
    /// | `SEED_ON_STARTUP`      | `true`                                   |
    pub fn from_env(variant: ApiVariant) -> Result<Self, ConfigError> {
        Self::from_lookup(variant, |var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(variant: ApiVariant, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", 3000, "a valid port number")?;
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| variant.default_database_url().into());
        let db_max_connections =
            parse_var(&lookup, "DB_MAX_CONNECTIONS", 5, "a positive integer")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "a number of seconds")?;

        let seed_on_startup = match lookup("SEED_ON_STARTUP") {
            None => true,
            Some(value) => parse_flag(&value).ok_or(ConfigError {
                var: "SEED_ON_STARTUP",
                value,
                expected: "true or false",
            })?,
        };

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            seed_on_startup,
        })
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            value,
            expected,
        }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
