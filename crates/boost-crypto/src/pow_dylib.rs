//! Proof-of-work header hash via a stable shim dylib ABI.
//!
//! The network's header hash is a chained hash construction with no crate in
//! our dependency set, so it is loaded from a local dynamic library that
//! exposes one narrow C ABI:
//!
//! - `boost_pow_header_hash(input_ptr, input_len, out32) -> i32` (1 = ok)
//!
//! The shim is expected to be provided by the operator build pipeline.

use crate::{
    pow_strict_from_env, sha256d, HashProvider, POW_SHIM_PATH_ENV, POW_SHIM_SHA256_ENV,
};

use libloading::Library;
use sha2::{Digest, Sha256};
use std::fs;

const HEADER_BYTES: usize = 80;

type BoostPowHeaderHash =
    unsafe extern "C" fn(input_ptr: *const u8, input_len: usize, out32: *mut u8) -> i32;

/// Compare the SHA-256 of a shim image against an operator-supplied hex pin.
fn check_pin(image: &[u8], expected_hex: &str) -> Result<(), String> {
    let actual_hex: String = Sha256::digest(image)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    if actual_hex != expected_hex.trim().to_ascii_lowercase() {
        return Err(format!("pow shim pin mismatch: got {actual_hex}"));
    }
    Ok(())
}

pub struct PowDylibProvider {
    _lib: Library,
    header_hash: BoostPowHeaderHash,
}

impl PowDylibProvider {
    /// Load a proof-of-work shim dylib from a filesystem path (e.g. `libboost_pow_shim.so`).
    pub fn load(path: &str) -> Result<Self, String> {
        let lib = unsafe { Library::new(path).map_err(|e| e.to_string())? };
        unsafe {
            let header_hash: BoostPowHeaderHash = *lib
                .get(b"boost_pow_header_hash\0")
                .map_err(|e| e.to_string())?;
            Ok(Self {
                _lib: lib,
                header_hash,
            })
        }
    }

    /// Load the shim named by the environment, if any.
    ///
    /// - BOOST_POW_SHIM_PATH names the shim; unset or blank means no shim.
    /// - BOOST_POW_SHIM_SHA256, when set, pins the shim file's SHA-256.
    /// - BOOST_POW_STRICT=1 makes both the path and the pin mandatory.
    pub fn from_env() -> Result<Option<Self>, String> {
        let strict = pow_strict_from_env();
        let path = std::env::var(POW_SHIM_PATH_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        let pin = std::env::var(POW_SHIM_SHA256_ENV).ok();

        let Some(path) = shim_policy(strict, path, pin.as_deref())? else {
            return Ok(None);
        };
        if let Some(expected_hex) = &pin {
            let bytes = fs::read(&path).map_err(|e| format!("read shim: {e}"))?;
            check_pin(&bytes, expected_hex)?;
        }
        Self::load(&path).map(Some)
    }
}

/// Which shim to load, if any, given the strict flag and the configured
/// path and pin.
fn shim_policy(
    strict: bool,
    path: Option<String>,
    pin: Option<&str>,
) -> Result<Option<String>, String> {
    match (path, pin) {
        (None, _) if strict => Err(format!("{POW_SHIM_PATH_ENV} required in strict mode")),
        (None, _) => Ok(None),
        (Some(_), None) if strict => {
            Err(format!("{POW_SHIM_SHA256_ENV} required in strict mode"))
        }
        (Some(path), _) => Ok(Some(path)),
    }
}

impl HashProvider for PowDylibProvider {
    fn sha256d(&self, input: &[u8]) -> Result<[u8; 32], String> {
        Ok(sha256d(input))
    }

    fn block_header_hash(&self, header: &[u8]) -> Result<[u8; 32], String> {
        if header.len() != HEADER_BYTES {
            return Err(format!("pow shim: header length {}", header.len()));
        }
        let mut out = [0u8; 32];
        let rc = unsafe { (self.header_hash)(header.as_ptr(), header.len(), out.as_mut_ptr()) };
        if rc != 1 {
            return Err(format!("pow shim error: boost_pow_header_hash rc={rc}"));
        }
        Ok(out)
    }

    fn is_consensus_header_hash(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{check_pin, shim_policy};

    #[test]
    fn strict_mode_requires_path_and_pin() {
        let path = || Some("libboost_pow_shim.so".to_string());

        assert_eq!(shim_policy(false, None, None), Ok(None));
        assert_eq!(shim_policy(false, path(), None), Ok(path()));
        assert!(shim_policy(true, None, Some("00")).is_err());
        assert!(shim_policy(true, path(), None).is_err());
        assert_eq!(shim_policy(true, path(), Some("00")), Ok(path()));
    }

    #[test]
    fn pin_is_case_insensitive() {
        // SHA-256 of "abc".
        let pin = "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD";
        assert!(check_pin(b"abc", pin).is_ok());
        assert!(check_pin(b"abd", pin).is_err());
    }
}
