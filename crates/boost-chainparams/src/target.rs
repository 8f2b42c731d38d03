use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{ChainParamsError, ErrorCode};
use crate::hash::{hash256_to_be, Hash256};

/// Expand a compact "bits" difficulty encoding into a 256-bit target.
///
/// Negative, zero and overflowing encodings are rejected: none of them is a
/// usable proof-of-work target.
pub fn compact_to_target(bits: u32) -> Result<BigUint, ChainParamsError> {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;

    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if negative || overflow {
        return Err(ChainParamsError::new(
            ErrorCode::InvalidTarget,
            format!("compact target {bits:#010x}: negative or overflow"),
        ));
    }

    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        BigUint::from(word)
    } else {
        BigUint::from(word) << (8 * (size - 3) as usize)
    };
    if target.is_zero() {
        return Err(ChainParamsError::new(
            ErrorCode::InvalidTarget,
            format!("compact target {bits:#010x}: zero"),
        ));
    }
    Ok(target)
}

/// Numeric value of a hash, treating it as a little-endian 256-bit integer.
pub fn hash_value(h: &Hash256) -> BigUint {
    BigUint::from_bytes_be(&hash256_to_be(h))
}

pub fn hash_meets_target(h: &Hash256, target: &BigUint) -> bool {
    hash_value(h) <= *target
}
