use crate::fqdn::absolute_name;
use crate::{DhcidIdentifierBlob, Digest};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt;

pub const DEFAULT_DHCID_TTL: u32 = 600;

/// DHCID RDATA as produced here: identifier blob followed by the digest.
/// There is no digest-type octet between them; adding one would change
/// every value previously published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcidRdata(Vec<u8>);

impl DhcidRdata {
    pub fn new(blob: &DhcidIdentifierBlob, digest: &Digest) -> Self {
        let mut bytes = Vec::with_capacity(blob.len() + digest.as_bytes().len());
        bytes.extend_from_slice(blob.as_bytes());
        bytes.extend_from_slice(digest.as_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcidRecord {
    pub name: String,
    pub ttl: u32,
    pub rdata: String,
}

impl DhcidRecord {
    pub fn new(name: impl Into<String>, rdata: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl: DEFAULT_DHCID_TTL,
            rdata: rdata.into(),
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}

impl fmt::Display for DhcidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_record(&self.name, &self.rdata, self.ttl))
    }
}

/// Renders `"<name>.\t<ttl> IN DHCID <value>"`. The name is not validated
/// beyond normalizing its trailing dot.
pub fn format_record(name: &str, base64_value: &str, ttl: u32) -> String {
    format!("{}\t{} IN DHCID {}", absolute_name(name), ttl, base64_value)
}
