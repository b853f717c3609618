//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{ApiConfig, TenantsConfig};

/// Returns the default API base URL.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

/// Returns the default origin for tenant login links.
pub fn default_login_origin() -> String {
    "http://localhost:3000".to_string()
}

/// Returns the default tenants page size (100).
pub fn default_page_size() -> u32 {
    100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

impl Default for TenantsConfig {
    fn default() -> Self {
        Self {
            login_origin: default_login_origin(),
            page_size: default_page_size(),
        }
    }
}
