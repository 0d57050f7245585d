use crate::DomainError;
use std::fmt;
use std::str::FromStr;

pub const MAC_ADDRESS_LEN: usize = 6;

/// Ethernet hardware address, parsed from `aa:bb:cc:dd:ee:ff` notation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; MAC_ADDRESS_LEN]);

impl MacAddress {
    pub fn new(octets: [u8; MAC_ADDRESS_LEN]) -> Self {
        Self(octets)
    }

    /// Parses six colon-separated groups of exactly two hex digits.
    /// Letter case is ignored.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if text.is_empty() {
            return Err(DomainError::InvalidArgumentCount(
                "MAC address must not be empty".to_string(),
            ));
        }

        let mut octets = [0u8; MAC_ADDRESS_LEN];
        let mut count = 0;

        for group in text.split(':') {
            if count == MAC_ADDRESS_LEN {
                return Err(malformed(text, "more than 6 octets"));
            }
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(malformed(text, &format!("invalid octet '{}'", group)));
            }
            octets[count] = u8::from_str_radix(group, 16)
                .map_err(|e| malformed(text, &e.to_string()))?;
            count += 1;
        }

        if count != MAC_ADDRESS_LEN {
            return Err(malformed(
                text,
                &format!("expected 6 octets, found {}", count),
            ));
        }

        Ok(Self(octets))
    }

    pub fn octets(&self) -> &[u8; MAC_ADDRESS_LEN] {
        &self.0
    }
}

fn malformed(text: &str, reason: &str) -> DomainError {
    DomainError::MalformedIdentifier(format!("MAC address '{}': {}", text, reason))
}

impl From<[u8; MAC_ADDRESS_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_ADDRESS_LEN]) -> Self {
        Self(octets)
    }
}

impl FromStr for MacAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, &x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ":{:02x}", x)?;
            } else {
                write!(f, "{:02x}", x)?;
            }
        }

        Ok(())
    }
}
