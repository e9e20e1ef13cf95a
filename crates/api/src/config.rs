use bandroom_core::env::{self, ConfigError};

use crate::auth::jwt::JwtConfig;

/// `EnvFilter` directives used when `RUST_LOG` is unset. Every workspace
/// crate is listed so gateway and storage errors reach the log.
pub const DEFAULT_LOG_FILTER: &str = "bandroom_api=debug,bandroom_core=debug,bandroom_db=debug,\
    bandroom_storage=debug,tower_http=debug";

/// Deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn as_str(self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
        }
    }
}

impl std::str::FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Deployment environment (default: `development`).
    pub app_env: AppEnv,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on draining in-flight requests after a shutdown signal
    /// (default: `10`).
    pub shutdown_timeout_secs: u64,
    /// JWT verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from a lookup function with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `8080`                  |
    /// | `APP_ENV`               | `development`           |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `10`                    |
    /// | `JWT_SECRET`            | required                |
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: env::optional(lookup, "HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: env::parse_or(lookup, "PORT", 8080)?,
            app_env: env::parse_or(lookup, "APP_ENV", AppEnv::Development)?,
            cors_origins: env::list_or(lookup, "CORS_ORIGINS", "http://localhost:5173"),
            request_timeout_secs: env::parse_or(lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            shutdown_timeout_secs: env::parse_or(lookup, "SHUTDOWN_TIMEOUT_SECS", 10)?,
            jwt: JwtConfig::from_lookup(lookup)?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env::process_env)
    }
}
