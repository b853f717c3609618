use clap::ArgMatches;

use taskdeck_core::config::TaskdeckConfig;

use super::helpers::load_config_with_warning;

pub(crate) fn handle_config_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = redacted(load_config_with_warning(matches));
    print!("{}", toml::to_string(&config)?);
    Ok(())
}

/// Replace the token with a placeholder so it never reaches stdout.
fn redacted(mut config: TaskdeckConfig) -> TaskdeckConfig {
    if config.api.token.is_some() {
        config.api.token = Some("<redacted>".to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_redacted() {
        let mut config = TaskdeckConfig::default();
        config.api.token = Some("super-secret".to_string());

        let out = toml::to_string(&redacted(config)).unwrap();
        assert!(!out.contains("super-secret"));
        assert!(out.contains("<redacted>"));
    }

    #[test]
    fn test_missing_token_stays_missing() {
        let out = toml::to_string(&redacted(TaskdeckConfig::default())).unwrap();
        assert!(!out.contains("token"));
    }
}
