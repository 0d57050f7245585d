pub mod errors;
pub mod logging;
pub mod record;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use record::RecordConfig;
pub use root::{CliOverrides, Config};
