mod digest_port;

pub use digest_port::DigestPort;
