use std::cell::RefCell;

use boost_crypto::{sha256d, HashProvider};

use crate::hash::{hash256_from_hex, Hash256};
use crate::network::{MAIN_GENESIS_HASH, REGTEST_GENESIS_HASH, TEST_GENESIS_HASH};

/// Double SHA-256 for every role. Not the consensus header hash.
pub(crate) struct SoftwareProvider;

impl HashProvider for SoftwareProvider {
    fn sha256d(&self, input: &[u8]) -> Result<[u8; 32], String> {
        Ok(sha256d(input))
    }

    fn block_header_hash(&self, header: &[u8]) -> Result<[u8; 32], String> {
        Ok(sha256d(header))
    }

    fn is_consensus_header_hash(&self) -> bool {
        false
    }
}

/// Stands in for the production header hash: answers the recorded hash for
/// the three shipped genesis headers, keyed on (time, nonce), and double
/// SHA-256 for anything else. Every header it sees is recorded.
#[derive(Default)]
pub(crate) struct CanonicalHeaders {
    pub seen: RefCell<Vec<Vec<u8>>>,
}

impl CanonicalHeaders {
    fn known(time: u32, nonce: u32) -> Option<Hash256> {
        let hex = match (time, nonce) {
            (1_400_512_373, 5_726_282) => MAIN_GENESIS_HASH,
            (1_400_512_373, 1_908_795) => TEST_GENESIS_HASH,
            (1_296_688_602, 0) => REGTEST_GENESIS_HASH,
            _ => return None,
        };
        hash256_from_hex(hex).ok()
    }
}

impl HashProvider for CanonicalHeaders {
    fn sha256d(&self, input: &[u8]) -> Result<[u8; 32], String> {
        Ok(sha256d(input))
    }

    fn block_header_hash(&self, header: &[u8]) -> Result<[u8; 32], String> {
        if header.len() != 80 {
            return Err(format!("header length {}", header.len()));
        }
        self.seen.borrow_mut().push(header.to_vec());
        let word = |at: usize| {
            u32::from_le_bytes([header[at], header[at + 1], header[at + 2], header[at + 3]])
        };
        Ok(Self::known(word(68), word(76)).unwrap_or_else(|| sha256d(header)))
    }

    fn is_consensus_header_hash(&self) -> bool {
        true
    }
}

/// Fails every call.
pub(crate) struct BrokenProvider;

impl HashProvider for BrokenProvider {
    fn sha256d(&self, _input: &[u8]) -> Result<[u8; 32], String> {
        Err("backend unavailable".into())
    }

    fn block_header_hash(&self, _header: &[u8]) -> Result<[u8; 32], String> {
        Err("backend unavailable".into())
    }

    fn is_consensus_header_hash(&self) -> bool {
        true
    }
}
