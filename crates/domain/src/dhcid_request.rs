use crate::{IdentifierType, DEFAULT_DHCID_TTL};
use std::sync::Arc;

/// Raw input for an RFC-mode DHCID: the identifier text is parsed by the
/// use case so malformed input is reported before any digest work.
#[derive(Debug, Clone)]
pub struct DhcidRequest {
    pub identifier_type: IdentifierType,
    pub identifier: Arc<str>,
    pub fqdn: Arc<str>,
    pub ttl: u32,
}

impl DhcidRequest {
    pub fn new(
        identifier_type: IdentifierType,
        identifier: impl Into<Arc<str>>,
        fqdn: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            identifier_type,
            identifier: identifier.into(),
            fqdn: fqdn.into(),
            ttl: DEFAULT_DHCID_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}
