mod sha256_digest;

pub use sha256_digest::Sha256DigestEngine;
