use dhcid_application::ports::DigestPort;
use dhcid_application::use_cases::{GenerateDhcidRecordUseCase, GenerateLegacyDigestUseCase};
use dhcid_infrastructure::crypto::Sha256DigestEngine;
use std::sync::Arc;

pub struct UseCases {
    pub legacy_digest: Arc<GenerateLegacyDigestUseCase>,
    pub dhcid_record: Arc<GenerateDhcidRecordUseCase>,
}

impl UseCases {
    pub fn new() -> Self {
        let digest: Arc<dyn DigestPort> = Arc::new(Sha256DigestEngine::new());

        Self {
            legacy_digest: Arc::new(GenerateLegacyDigestUseCase::new(digest.clone())),
            dhcid_record: Arc::new(GenerateDhcidRecordUseCase::new(digest)),
        }
    }
}
