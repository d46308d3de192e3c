use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_NEXT_DATA_MARKER: &str = "__NEXT_DATA__";
pub const DEFAULT_BRAND_BASE_URL: &str = "https://jp.mercari.com";

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
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let log_level = or_default("MERCARI_LOG_LEVEL", "info");

    let next_data_marker = or_default("MERCARI_NEXT_DATA_MARKER", DEFAULT_NEXT_DATA_MARKER);
    if next_data_marker.is_empty() {
        return Err(invalid(
            "MERCARI_NEXT_DATA_MARKER",
            "marker must not be empty".to_string(),
        ));
    }

    let scan_sample_size = or_default("MERCARI_SCAN_SAMPLE_SIZE", "3")
        .parse::<usize>()
        .map_err(|e| invalid("MERCARI_SCAN_SAMPLE_SIZE", e.to_string()))?;
    if scan_sample_size == 0 {
        return Err(invalid(
            "MERCARI_SCAN_SAMPLE_SIZE",
            "sample size must be at least 1".to_string(),
        ));
    }

    let brand_base_url = or_default("MERCARI_BRAND_BASE_URL", DEFAULT_BRAND_BASE_URL);
    let parsed = url::Url::parse(&brand_base_url)
        .map_err(|e| invalid("MERCARI_BRAND_BASE_URL", format!("{e}: \"{brand_base_url}\"")))?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(invalid(
            "MERCARI_BRAND_BASE_URL",
            format!("expected an absolute http(s) URL, got \"{brand_base_url}\""),
        ));
    }

    Ok(AppConfig {
        log_level,
        next_data_marker,
        scan_sample_size,
        brand_base_url,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
