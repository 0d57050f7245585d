mod blob;
mod duid;
mod identifier_type;
mod mac_address;

pub use blob::{DhcidIdentifierBlob, LEGACY_HARDWARE_TYPE_ETHERNET};
pub use duid::Duid;
pub use identifier_type::IdentifierType;
pub use mac_address::{MacAddress, MAC_ADDRESS_LEN};

use crate::DomainError;

/// A DHCP client as seen by the DHCID digest: either its hardware address
/// or its DUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClientIdentifier {
    MacAddress(MacAddress),
    Duid(Duid),
}

impl ClientIdentifier {
    /// Parses `text` as the variant selected by `identifier_type`.
    pub fn parse(identifier_type: IdentifierType, text: &str) -> Result<Self, DomainError> {
        match identifier_type {
            IdentifierType::MacBased => MacAddress::parse(text).map(ClientIdentifier::MacAddress),
            IdentifierType::DuidBased => Duid::parse(text).map(ClientIdentifier::Duid),
        }
    }

    pub fn identifier_type(&self) -> IdentifierType {
        match self {
            ClientIdentifier::MacAddress(_) => IdentifierType::MacBased,
            ClientIdentifier::Duid(_) => IdentifierType::DuidBased,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ClientIdentifier::MacAddress(mac) => mac.octets(),
            ClientIdentifier::Duid(duid) => duid.as_bytes(),
        }
    }

    pub fn to_blob(&self) -> DhcidIdentifierBlob {
        DhcidIdentifierBlob::build(self.identifier_type().code(), self.as_bytes())
    }
}

impl From<MacAddress> for ClientIdentifier {
    fn from(mac: MacAddress) -> Self {
        ClientIdentifier::MacAddress(mac)
    }
}

impl From<Duid> for ClientIdentifier {
    fn from(duid: Duid) -> Self {
        ClientIdentifier::Duid(duid)
    }
}
