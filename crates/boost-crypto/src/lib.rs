//! Hashing provider interface for the chain-parameter registry.
//!
//! Registry code must depend only on this narrow interface. Transaction ids
//! and merkle nodes are always double SHA-256; the block header hash is the
//! network's proof-of-work function and is supplied by the node.

use sha2::{Digest, Sha256};

pub trait HashProvider {
    fn sha256d(&self, input: &[u8]) -> Result<[u8; 32], String>;

    /// Hash of a serialized 80-byte block header, as it appears on the wire.
    fn block_header_hash(&self, header: &[u8]) -> Result<[u8; 32], String>;

    /// Whether `block_header_hash` is the network's consensus header hash.
    /// Genesis anchors are only checked against providers that return true.
    fn is_consensus_header_hash(&self) -> bool;
}

/// Software double SHA-256, as used for transaction ids and merkle nodes.
pub fn sha256d(input: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(input);
    let second = Sha256::digest(first);
    let mut r = [0u8; 32];
    r.copy_from_slice(&second);
    r
}

pub const POW_SHIM_PATH_ENV: &str = "BOOST_POW_SHIM_PATH";
pub const POW_SHIM_SHA256_ENV: &str = "BOOST_POW_SHIM_SHA256";
pub const POW_STRICT_ENV: &str = "BOOST_POW_STRICT";

fn flag_enabled(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// BOOST_POW_STRICT=1 (or `true`): the node must run on a pinned
/// proof-of-work shim and nothing else.
pub fn pow_strict_from_env() -> bool {
    std::env::var(POW_STRICT_ENV)
        .map(|v| flag_enabled(&v))
        .unwrap_or(false)
}

#[cfg(feature = "pow-dylib")]
mod pow_dylib;
#[cfg(feature = "pow-dylib")]
pub use pow_dylib::PowDylibProvider;

/// Development-only provider. Header hashes are double SHA-256, which is NOT
/// the network's proof-of-work function; genesis anchors built with it are
/// checked on their merkle root only.
#[cfg(feature = "dev-std")]
pub struct DevStdHashProvider;

#[cfg(feature = "dev-std")]
impl HashProvider for DevStdHashProvider {
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
