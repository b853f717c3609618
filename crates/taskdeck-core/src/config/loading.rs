//! Configuration loading and merging logic.
//!
//! Config files are merged as TOML tables before deserialization, so a
//! project file that only sets `[tenants]` keeps the user's `[api]` section.
//!
//! # Configuration Hierarchy
//!
//! 1. **Hardcoded defaults**
//! 2. **User config** - `~/.taskdeck/config.toml`
//! 3. **Project config** - `./.taskdeck/config.toml`
//! 4. **Environment** - `TASKDECK_API_URL`, `TASKDECK_TOKEN`
//! 5. **CLI flags** - `--api-url`, `--token`
//!
//! Files are validated together by [`load_hierarchy`]. Each override source
//! is then applied with [`ApiOverrides::apply`], which validates the
//! combined result, so a bad override cannot discard the file layers.

use crate::config::types::TaskdeckConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use toml::Table;
use tracing::debug;

pub const ENV_API_URL: &str = "TASKDECK_API_URL";
pub const ENV_TOKEN: &str = "TASKDECK_TOKEN";

/// Load configuration from the hierarchy of config files.
///
/// Environment and CLI overrides are not applied here; see [`ApiOverrides`].
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<TaskdeckConfig, Box<dyn std::error::Error>> {
    let user_path = user_config_path();
    let project_path = std::env::current_dir()?
        .join(".taskdeck")
        .join("config.toml");

    let config = load_from_paths(user_path.as_deref(), &project_path)?;
    validate_config(&config)?;

    Ok(config)
}

/// Load and merge the user and project config files.
///
/// Either file may be absent. Validation is left to the caller.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: &Path,
) -> Result<TaskdeckConfig, ConfigError> {
    let mut merged = Table::new();

    if let Some(path) = user_path
        && let Some(table) = read_config_table(path)?
    {
        merge_tables(&mut merged, table);
    }

    if let Some(table) = read_config_table(project_path)? {
        merge_tables(&mut merged, table);
    }

    toml::Value::Table(merged)
        .try_into::<TaskdeckConfig>()
        .map_err(|e: toml::de::Error| ConfigError::ConfigParseError {
            message: e.to_string(),
        })
}

/// API settings from one override source (environment or CLI flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiOverrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

impl ApiOverrides {
    /// Read `TASKDECK_API_URL` and `TASKDECK_TOKEN`. Empty values are ignored.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup(ENV_API_URL).filter(|v| !v.is_empty()),
            token: lookup(ENV_TOKEN).filter(|v| !v.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base_url.is_none() && self.token.is_none()
    }

    /// Return `config` with these overrides applied.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the combined config is invalid. The
    /// caller keeps `config` as it was.
    pub fn apply(&self, config: &TaskdeckConfig) -> Result<TaskdeckConfig, ConfigError> {
        let mut updated = config.clone();
        if let Some(url) = &self.base_url {
            updated.api.base_url = url.clone();
        }
        if let Some(token) = &self.token {
            updated.api.token = Some(token.clone());
        }
        updated.validate()?;
        Ok(updated)
    }
}

/// Read a config file as a TOML table. Returns `Ok(None)` if it does not exist.
fn read_config_table(path: &Path) -> Result<Option<Table>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_missing",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let table: Table = content
        .parse()
        .map_err(|e: toml::de::Error| ConfigError::ConfigParseError {
            message: format!("{}: {}", path.display(), e),
        })?;

    debug!(
        event = "core.config.file_loaded",
        path = %path.display()
    );

    Ok(Some(table))
}

/// Merge `overlay` into `base`. Nested tables merge key by key; any other
/// value in `overlay` replaces the one in `base`.
pub fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, incoming),
                _ => {
                    base.insert(key, toml::Value::Table(incoming));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

/// Path of the user-level config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".taskdeck").join("config.toml"))
}
