#![allow(dead_code)]

use dhcid_application::ports::DigestPort;
use dhcid_domain::{Digest, DIGEST_LEN};
use sha2::{Digest as _, Sha256};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// SHA-256 backed digest port that records every input it hashes.
pub struct RecordingDigest {
    inputs: Mutex<Vec<Vec<u8>>>,
    call_count: AtomicUsize,
}

impl RecordingDigest {
    pub fn new() -> Self {
        Self {
            inputs: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_input(&self) -> Option<Vec<u8>> {
        self.inputs.lock().unwrap().last().cloned()
    }
}

impl DigestPort for RecordingDigest {
    fn sha256(&self, data: &[u8]) -> Digest {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.inputs.lock().unwrap().push(data.to_vec());
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&Sha256::digest(data));
        Digest::new(out)
    }
}
