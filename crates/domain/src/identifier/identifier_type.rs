use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// RFC 4701 identifier-type field, the leading byte of every DHCID blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierType {
    /// Client identified by its hardware (MAC) address.
    MacBased,
    /// Client identified by its DHCP Unique Identifier.
    DuidBased,
}

impl IdentifierType {
    pub fn code(&self) -> u8 {
        match self {
            IdentifierType::MacBased => 0x00,
            IdentifierType::DuidBased => 0x01,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(IdentifierType::MacBased),
            0x01 => Some(IdentifierType::DuidBased),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::MacBased => "mac",
            IdentifierType::DuidBased => "duid",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches("--").to_ascii_lowercase().as_str() {
            "mac" => Ok(IdentifierType::MacBased),
            "duid" => Ok(IdentifierType::DuidBased),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}
