use crate::DEFAULT_DHCID_TTL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordConfig {
    /// TTL written into RFC-mode DHCID records
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self { ttl: default_ttl() }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_DHCID_TTL
}
