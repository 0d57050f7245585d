use crate::ports::DigestPort;
use dhcid_domain::{
    ClientIdentifier, DhcidIdentifierBlob, DhcidRdata, DhcidRecord, DhcidRequest, Digest,
    DomainError, Fqdn,
};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct GenerateDhcidRecordUseCase {
    digest: Arc<dyn DigestPort>,
}

impl GenerateDhcidRecordUseCase {
    pub fn new(digest: Arc<dyn DigestPort>) -> Self {
        Self { digest }
    }

    #[instrument(skip_all, fields(identifier_type = %request.identifier_type, fqdn = %request.fqdn))]
    pub fn execute(&self, request: &DhcidRequest) -> Result<DhcidRecord, DomainError> {
        let identifier = ClientIdentifier::parse(request.identifier_type, &request.identifier)?;
        let fqdn = Fqdn::new(&request.fqdn)?;

        let blob = identifier.to_blob();
        let digest = self.rfc_digest(&blob, &fqdn);
        let rdata = DhcidRdata::new(&blob, &digest).to_base64();

        debug!(blob_len = blob.len(), rdata = %rdata, "DHCID record computed");

        Ok(DhcidRecord::new(fqdn.owner_name(), rdata).with_ttl(request.ttl))
    }

    /// SHA-256 over the identifier blob followed by the lower-cased name.
    /// A trailing dot on the name is hashed as given.
    pub fn rfc_digest(&self, blob: &DhcidIdentifierBlob, fqdn: &Fqdn) -> Digest {
        let name = fqdn.digest_bytes();
        let mut input = Vec::with_capacity(blob.len() + name.len());
        input.extend_from_slice(blob.as_bytes());
        input.extend_from_slice(&name);
        self.digest.sha256(&input)
    }
}
