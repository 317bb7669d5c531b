use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub const DEFAULT_MERCADOLIVRE_API_BASE: &str = "https://api.mercadolibre.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    // Zero would leave outbound fetches unbounded.
    let parse_timeout = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let secs = or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if secs == 0 {
            return Err(invalid(var, "timeout must be at least 1 second".into()));
        }
        Ok(secs)
    };

    let env = parse_environment(&or_default("ROXINHO_ENV", "development"))?;
    let bind_addr = parse_addr("ROXINHO_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("ROXINHO_LOG_LEVEL", "info");
    let frontend_url = or_default("ROXINHO_FRONTEND_URL", "https://roxinho-shop.vercel.app");

    let scraper_request_timeout_secs = parse_timeout("ROXINHO_SCRAPER_REQUEST_TIMEOUT_SECS", "10")?;
    let scraper_connect_timeout_secs = parse_timeout("ROXINHO_SCRAPER_CONNECT_TIMEOUT_SECS", "5")?;
    let scraper_user_agent = or_default("ROXINHO_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);

    let mercadolivre_api_base = or_default(
        "ROXINHO_MERCADOLIVRE_API_BASE",
        DEFAULT_MERCADOLIVRE_API_BASE,
    )
    .trim_end_matches('/')
    .to_string();
    if !mercadolivre_api_base.starts_with("http://") && !mercadolivre_api_base.starts_with("https://")
    {
        return Err(invalid(
            "ROXINHO_MERCADOLIVRE_API_BASE",
            format!("expected an http(s) origin, got \"{mercadolivre_api_base}\""),
        ));
    }
    let mercadolivre_timeout_secs = parse_timeout("ROXINHO_MERCADOLIVRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        frontend_url,
        scraper_request_timeout_secs,
        scraper_connect_timeout_secs,
        scraper_user_agent,
        mercadolivre_api_base,
        mercadolivre_timeout_secs,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ROXINHO_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
