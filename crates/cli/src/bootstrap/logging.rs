use dhcid_domain::Config;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout carries only the computed value.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.logging.level).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log level '{}' ({}), falling back to warn",
            config.logging.level, e
        );
        EnvFilter::new("warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
