//! DHCID Infrastructure Layer
pub mod crypto;
