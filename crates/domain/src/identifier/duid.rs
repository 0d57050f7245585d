use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// DHCP Unique Identifier. Only hex decoding is performed; the DUID type
/// and its internal layout are opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Duid(Vec<u8>);

impl Duid {
    /// Accepts hex digits in any case, optionally separated by `:` or `-`.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        if text.is_empty() {
            return Err(DomainError::InvalidArgumentCount(
                "DUID must not be empty".to_string(),
            ));
        }

        let digits: String = text.chars().filter(|c| *c != ':' && *c != '-').collect();
        if digits.is_empty() {
            return Err(malformed(text, "no hex digits"));
        }

        let bytes = hex::decode(&digits).map_err(|e| malformed(text, &e.to_string()))?;
        Ok(Self(bytes))
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

fn malformed(text: &str, reason: &str) -> DomainError {
    DomainError::MalformedIdentifier(format!("DUID '{}': {}", text, reason))
}

impl FromStr for Duid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Duid {
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
