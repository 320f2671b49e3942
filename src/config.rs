use std::{env, str::FromStr, time::Duration};

use crate::analytics::segmentation::DEFAULT_GAP_DAYS;

#[derive(Debug, Clone)]
pub struct DbPoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    /// Also the effective query timeout when the pool is saturated.
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for DbPoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

impl DbPoolConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_connections: env_or("DB_MAX_CONNECTIONS", defaults.max_connections),
            min_connections: env_or("DB_MIN_CONNECTIONS", defaults.min_connections),
            acquire_timeout: Duration::from_secs(env_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )),
            idle_timeout: Duration::from_secs(env_or(
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
            )),
            max_lifetime: Duration::from_secs(env_or(
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime.as_secs(),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Without one the service runs on the in-memory repository.
    pub database_url: Option<String>,
    pub season_gap_days: i64,
    pub allowed_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
    pub max_concurrent_requests: usize,
    pub db_pool: DbPoolConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            database_url: None,
            season_gap_days: DEFAULT_GAP_DAYS,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            rate_limit_per_minute: 1000,
            max_concurrent_requests: 256,
            db_pool: DbPoolConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Self {
            port: env_or("PORT", defaults.port),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            season_gap_days: checked_gap_days(env_or(
                "SEASON_GAP_DAYS",
                defaults.season_gap_days,
            )),
            allowed_origins,
            rate_limit_per_minute: env_or("RATE_LIMIT_PER_MINUTE", defaults.rate_limit_per_minute)
                .max(1),
            max_concurrent_requests: env_or(
                "MAX_CONCURRENT_REQUESTS",
                defaults.max_concurrent_requests,
            )
            .max(1),
            db_pool: DbPoolConfig::from_env(),
        }
    }
}

/// A negative gap would split same-day matches into overlapping segments.
pub fn checked_gap_days(days: i64) -> i64 {
    if days < 0 {
        tracing::warn!("Ignoring negative SEASON_GAP_DAYS={}, using {}", days, DEFAULT_GAP_DAYS);
        return DEFAULT_GAP_DAYS;
    }
    days
}

fn env_or<T: FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparseable {}={:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
