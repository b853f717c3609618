use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional verbose mode.
///
/// When `verbose` is false, only error-level events are emitted (default).
/// When `verbose` is true, info-level and above events are emitted.
pub fn init_logging(verbose: bool) {
    let directive = if verbose {
        "taskdeck=info"
    } else {
        "taskdeck=error"
    };

    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
