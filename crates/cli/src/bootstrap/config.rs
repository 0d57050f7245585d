use anyhow::Context;
use dhcid_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, cli_overrides).with_context(|| match path {
        Some(path) => format!("Failed to load configuration from {}", path),
        None => "Failed to load default configuration".to_string(),
    })
}
