use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:5173,http://127.0.0.1:5173,http://localhost";

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,

    // API settings
    pub api_host: String,
    pub api_port: u16,
    pub cors_allowed_origins: Vec<String>,

    // Rate limiting
    pub disable_rate_limiting: bool,
    /// Seconds until one spent request is restored to a client's allowance
    pub rate_limit_replenish_seconds: u64,
    pub rate_limit_burst: u32,
    pub trust_proxy_headers: bool,

    // Logging
    pub log_format: LogFormat,

    // Application metadata
    pub deployment: Deployment,
}

/// Read an env var, falling back to `default` when unset or unparsable.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if required environment variables are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,

            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env_or("API_PORT", 5127),
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            ),

            disable_rate_limiting: env_or("DISABLE_RATE_LIMITING", false),
            rate_limit_replenish_seconds: env_or("RATE_LIMIT_REPLENISH_SECONDS", 1),
            rate_limit_burst: env_or("RATE_LIMIT_BURST", 60),
            trust_proxy_headers: env_or("TRUST_PROXY_HEADERS", false),

            log_format: LogFormat::parse(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            ),

            deployment: Deployment::parse(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    /// Configuration for tests and embedded use: given database, local
    /// deployment, rate limiting off.
    #[must_use]
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            api_host: "127.0.0.1".to_string(),
            api_port: 5127,
            cors_allowed_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            disable_rate_limiting: true,
            rate_limit_replenish_seconds: 1,
            rate_limit_burst: 60,
            trust_proxy_headers: false,
            log_format: LogFormat::Text,
            deployment: Deployment::Local,
        }
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    /// API docs are served only outside staging/production.
    #[must_use]
    pub fn docs_enabled(&self) -> bool {
        matches!(self.deployment, Deployment::Local | Deployment::Dev)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_aliases() {
        assert_eq!(Deployment::parse("Production"), Deployment::Prod);
        assert_eq!(Deployment::parse("staging"), Deployment::Stage);
        assert_eq!(Deployment::parse("dev"), Deployment::Dev);
        assert_eq!(Deployment::parse("anything"), Deployment::Local);
    }

    #[test]
    fn origins_are_trimmed() {
        assert_eq!(
            parse_origins(" http://localhost:5173/ ,,http://127.0.0.1:5173"),
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
    }

    #[test]
    fn docs_only_outside_stage_and_prod() {
        let mut config = Config::for_database("sqlite::memory:");
        assert!(config.docs_enabled());
        config.deployment = Deployment::Prod;
        assert!(!config.docs_enabled());
    }
}
