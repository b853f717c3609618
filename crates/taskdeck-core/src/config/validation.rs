use crate::config::types::TaskdeckConfig;
use crate::errors::ConfigError;

/// Largest page size the tenants view will request.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Validate the configuration.
///
/// # Errors
///
/// - [`ConfigError::InvalidBaseUrl`] if `api.base_url` is not http(s)
/// - [`ConfigError::InvalidConfiguration`] for an out-of-range page size or
///   a non-http(s) login origin
pub fn validate_config(config: &TaskdeckConfig) -> Result<(), ConfigError> {
    if !is_http_url(&config.api.base_url) {
        return Err(ConfigError::InvalidBaseUrl {
            url: config.api.base_url.clone(),
        });
    }

    if !is_http_url(&config.tenants.login_origin) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "tenants.login_origin '{}' must start with http:// or https://",
                config.tenants.login_origin
            ),
        });
    }

    if config.tenants.page_size == 0 || config.tenants.page_size > MAX_PAGE_SIZE {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "tenants.page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, config.tenants.page_size
            ),
        });
    }

    Ok(())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
