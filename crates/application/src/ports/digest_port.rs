use dhcid_domain::Digest;

/// SHA-256 engine used by the DHCID use cases.
pub trait DigestPort: Send + Sync {
    fn sha256(&self, data: &[u8]) -> Digest;
}
