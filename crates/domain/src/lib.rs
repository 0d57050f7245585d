//! DHCID Domain Layer
pub mod config;
pub mod dhcid_record;
pub mod dhcid_request;
pub mod digest;
pub mod errors;
pub mod fqdn;
pub mod identifier;

pub use config::{CliOverrides, Config, ConfigError};
pub use dhcid_record::{format_record, DhcidRdata, DhcidRecord, DEFAULT_DHCID_TTL};
pub use dhcid_request::DhcidRequest;
pub use digest::{Digest, DIGEST_LEN};
pub use errors::DomainError;
pub use fqdn::Fqdn;
pub use identifier::{
    ClientIdentifier, DhcidIdentifierBlob, Duid, IdentifierType, MacAddress,
    LEGACY_HARDWARE_TYPE_ETHERNET, MAC_ADDRESS_LEN,
};
