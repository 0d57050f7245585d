use crate::ports::DigestPort;
use dhcid_domain::{DhcidIdentifierBlob, Digest, DomainError, MacAddress};
use std::sync::Arc;
use tracing::{debug, instrument};

/// FQDN-independent digest over `0x00 0x01 ++ mac`. Its output is meant
/// for manual comparison and is not interchangeable with RFC-mode RDATA.
pub struct GenerateLegacyDigestUseCase {
    digest: Arc<dyn DigestPort>,
}

impl GenerateLegacyDigestUseCase {
    pub fn new(digest: Arc<dyn DigestPort>) -> Self {
        Self { digest }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, mac: &str) -> Result<Digest, DomainError> {
        let mac = MacAddress::parse(mac)?;
        let digest = self.legacy_digest(&mac);
        debug!(mac = %mac, digest = %digest, "Legacy DHCID digest computed");
        Ok(digest)
    }

    pub fn legacy_digest(&self, mac: &MacAddress) -> Digest {
        self.digest.sha256(DhcidIdentifierBlob::legacy(mac).as_bytes())
    }
}
