use dhcid_application::ports::DigestPort;
use dhcid_domain::{Digest, DIGEST_LEN};
use sha2::{Digest as Sha2Digest, Sha256};

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256DigestEngine;

impl Sha256DigestEngine {
    pub fn new() -> Self {
        Self
    }
}

impl DigestPort for Sha256DigestEngine {
    fn sha256(&self, data: &[u8]) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&hasher.finalize());
        Digest::new(out)
    }
}
