use dhcid_domain::{DhcidRequest, DomainError, IdentifierType};

use crate::di::UseCases;

/// One resolved run of the tool. The mode is fixed here, at the boundary,
/// and the use cases only ever see typed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `dhcid <mac>`
    Legacy { mac: String },
    /// `dhcid --mac <mac> <fqdn>` or `dhcid --duid <duid> <fqdn>`
    Record {
        identifier_type: IdentifierType,
        identifier: String,
        fqdn: String,
    },
}

impl Invocation {
    /// Computes the single output line, without a trailing newline.
    pub fn execute(&self, use_cases: &UseCases, ttl: u32) -> Result<String, DomainError> {
        match self {
            Invocation::Legacy { mac } => use_cases
                .legacy_digest
                .execute(mac)
                .map(|digest| digest.to_upper_hex()),
            Invocation::Record {
                identifier_type,
                identifier,
                fqdn,
            } => {
                let request =
                    DhcidRequest::new(*identifier_type, identifier.as_str(), fqdn.as_str())
                        .with_ttl(ttl);
                use_cases
                    .dhcid_record
                    .execute(&request)
                    .map(|record| record.to_string())
            }
        }
    }
}
