use std::future::Future;

use clap::ArgMatches;
use tracing::warn;

use taskdeck_core::config::{ApiOverrides, TaskdeckConfig};
use taskdeck_core::events;
use taskdeck_core::notify::TerminalNotifier;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if the config files fail to load, but notifies the
/// user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
///
/// Environment and `--api-url`/`--token` overrides are applied on top, one
/// source at a time. A source that would make the config invalid is skipped
/// with a warning and the layers below it are kept.
pub fn load_config_with_warning(matches: &ArgMatches) -> TaskdeckConfig {
    let config = match TaskdeckConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.taskdeck/config.toml and ./.taskdeck/config.toml for syntax errors or invalid values.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            TaskdeckConfig::default()
        }
    };

    let env = ApiOverrides::from_env(|key| std::env::var(key).ok());
    let config = apply_overrides(config, &env, "TASKDECK_API_URL/TASKDECK_TOKEN");

    let flags = ApiOverrides {
        base_url: matches.get_one::<String>("api-url").cloned(),
        token: matches.get_one::<String>("token").cloned(),
    };
    apply_overrides(config, &flags, "--api-url/--token")
}

fn apply_overrides(
    config: TaskdeckConfig,
    overrides: &ApiOverrides,
    source: &str,
) -> TaskdeckConfig {
    if overrides.is_empty() {
        return config;
    }
    match overrides.apply(&config) {
        Ok(updated) => updated,
        Err(e) => {
            eprintln!("Warning: Ignoring {}: {}", source, e);
            warn!(
                event = "cli.config.override_rejected",
                source = source,
                error = %e
            );
            config
        }
    }
}

/// Log a failed command and return it as the command's error.
pub fn command_failed(message: &str) -> Box<dyn std::error::Error> {
    let error: Box<dyn std::error::Error> = message.into();
    events::log_app_error(error.as_ref());
    error
}

pub fn notifier_for(config: &TaskdeckConfig) -> TerminalNotifier {
    TerminalNotifier::new(config.notifications.desktop)
}

/// Drive a view future to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output, Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
