// goods_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(format!("expected 'pretty' or 'json', got '{}'", other)),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Prefix every route is mounted under, e.g. `/api`.
  pub api_prefix: String,

  // None selects the in-memory store.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub run_migrations: bool,

  // Seed persisted goods from the fixed catalog on startup.
  pub seed_db: bool,

  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any key lookup; `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = parse_var("SERVER_PORT", &get_or("SERVER_PORT", "3000"))?;
    let api_prefix = normalize_prefix(&get_or("API_PREFIX", "/api"));
    let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
    let db_max_connections: u32 = parse_var("DB_MAX_CONNECTIONS", &get_or("DB_MAX_CONNECTIONS", "5"))?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }
    let run_migrations = parse_var("RUN_MIGRATIONS", &get_or("RUN_MIGRATIONS", "true"))?;
    let seed_db = parse_var("SEED_DB", &get_or("SEED_DB", "false"))?;
    let log_format = parse_var("LOG_FORMAT", &get_or("LOG_FORMAT", "pretty"))?;

    Ok(Self {
      server_host,
      server_port,
      api_prefix,
      database_url,
      db_max_connections,
      run_migrations,
      seed_db,
      log_format,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 3000,
      api_prefix: "/api".to_string(),
      database_url: None,
      db_max_connections: 5,
      run_migrations: true,
      seed_db: false,
      log_format: LogFormat::Pretty,
    }
  }
}

fn parse_var<T>(var_name: &str, raw: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e)))
}

// "api/" -> "/api", "/" -> ""
fn normalize_prefix(raw: &str) -> String {
  let trimmed = raw.trim().trim_matches('/');
  if trimmed.is_empty() {
    String::new()
  } else {
    format!("/{}", trimmed)
  }
}
