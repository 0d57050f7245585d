use crate::DomainError;
use std::fmt;

/// Domain name a DHCID binds to. DNS names are case-insensitive, so the
/// digest input is lower-cased. A trailing dot is kept in the digest input
/// and only dropped when the name is displayed as a record owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fqdn(String);

impl Fqdn {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidArgumentCount(
                "FQDN must not be empty".to_string(),
            ));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bytes folded into the RFC-mode digest.
    pub fn digest_bytes(&self) -> Vec<u8> {
        self.0.to_lowercase().into_bytes()
    }

    /// Owner name for a zone-file line: at most one trailing dot removed,
    /// then exactly one appended.
    pub fn owner_name(&self) -> String {
        absolute_name(&self.0)
    }
}

pub(crate) fn absolute_name(name: &str) -> String {
    format!("{}.", name.strip_suffix('.').unwrap_or(name))
}

impl fmt::Display for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
