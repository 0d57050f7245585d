pub mod dhcid;

// Re-export use cases
pub use dhcid::{GenerateDhcidRecordUseCase, GenerateLegacyDigestUseCase};
