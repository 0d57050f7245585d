use super::MacAddress;

/// Hardware type octet of the legacy header (Ethernet).
pub const LEGACY_HARDWARE_TYPE_ETHERNET: u8 = 0x01;

/// `type_code ++ identifier bytes`, with no length prefix or separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DhcidIdentifierBlob(Vec<u8>);

impl DhcidIdentifierBlob {
    pub fn build(type_code: u8, raw: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(1 + raw.len());
        bytes.push(type_code);
        bytes.extend_from_slice(raw);
        Self(bytes)
    }

    /// Header used by the FQDN-independent digest: identifier type `0x00`
    /// followed by hardware type `0x01`, then the MAC octets. This is not
    /// the RFC 4701 layout and must not be mixed with [`Self::build`].
    pub fn legacy(mac: &MacAddress) -> Self {
        let mut bytes = Vec::with_capacity(2 + mac.octets().len());
        bytes.push(super::IdentifierType::MacBased.code());
        bytes.push(LEGACY_HARDWARE_TYPE_ETHERNET);
        bytes.extend_from_slice(mac.octets());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for DhcidIdentifierBlob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
