mod generate_dhcid_record;
mod generate_legacy_digest;

pub use generate_dhcid_record::GenerateDhcidRecordUseCase;
pub use generate_legacy_digest::GenerateLegacyDigestUseCase;
