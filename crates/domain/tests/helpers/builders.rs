#![allow(dead_code)]
use dhcid_domain::{DhcidRecord, Digest, DIGEST_LEN};

pub fn digest_of(byte: u8) -> Digest {
    Digest::new([byte; DIGEST_LEN])
}

pub fn sequential_digest() -> Digest {
    let mut bytes = [0u8; DIGEST_LEN];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }
    Digest::new(bytes)
}

pub struct DhcidRecordBuilder {
    name: String,
    rdata: String,
    ttl: Option<u32>,
}

impl DhcidRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "host.example.com".to_string(),
            rdata: "AAARIjNEVQ==".to_string(),
            ttl: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn rdata(mut self, rdata: &str) -> Self {
        self.rdata = rdata.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn build(self) -> DhcidRecord {
        let record = DhcidRecord::new(self.name, self.rdata);
        match self.ttl {
            Some(ttl) => record.with_ttl(ttl),
            None => record,
        }
    }
}
