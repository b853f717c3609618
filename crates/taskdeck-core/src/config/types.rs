//! Configuration type definitions for taskdeck.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [tenants]
//! login_origin = "http://localhost:3000"
//! page_size = 100
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.taskdeck/config.toml`
/// 2. Project config: `./.taskdeck/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskdeckConfig {
    /// Workspace API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Tenants view settings
    #[serde(default)]
    pub tenants: TenantsConfig,

    /// Notification delivery settings
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Workspace API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to.
    /// Default: `http://localhost:5000/api`.
    #[serde(default = "super::defaults::default_base_url")]
    pub base_url: String,

    /// Bearer token attached to every request, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Tenants view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantsConfig {
    /// Origin of the web app used to build tenant login links.
    /// Default: `http://localhost:3000`.
    #[serde(default = "super::defaults::default_login_origin")]
    pub login_origin: String,

    /// Page size requested from the tenants collection.
    /// Default: 100.
    #[serde(default = "super::defaults::default_page_size")]
    pub page_size: u32,
}

/// Notification delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotificationsConfig {
    /// Also send desktop notifications (best-effort, Linux `notify-send`).
    #[serde(default)]
    pub desktop: bool,
}
