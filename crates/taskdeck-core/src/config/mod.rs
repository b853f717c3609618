//! # Configuration System
//!
//! Hierarchical TOML configuration system for taskdeck.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.taskdeck/config.toml` (global user preferences)
//! 3. **Project config** - `./.taskdeck/config.toml` (directory-specific overrides)
//! 4. **Environment** - `TASKDECK_API_URL`, `TASKDECK_TOKEN`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.taskdeck/config.toml
//! [api]
//! base_url = "https://api.example.com/api"
//! token = "eyJhbGciOi..."
//!
//! [tenants]
//! login_origin = "https://app.example.com"
//! page_size = 100
//!
//! [notifications]
//! desktop = true
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use taskdeck_core::config::{ApiOverrides, TaskdeckConfig};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let files = TaskdeckConfig::load_hierarchy()?;
//!     let config = ApiOverrides::from_env(|key| std::env::var(key).ok()).apply(&files)?;
//!     println!("{}", config.api.base_url);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use loading::ApiOverrides;
pub use types::{ApiConfig, NotificationsConfig, TaskdeckConfig, TenantsConfig};
pub use validation::validate_config;

impl TaskdeckConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
