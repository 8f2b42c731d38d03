use crate::error::{ChainParamsError, ErrorCode};

/// 256-bit digest in serialization (little-endian) byte order.
pub type Hash256 = [u8; 32];

pub const NULL_HASH: Hash256 = [0u8; 32];

/// Parse a display-order hex string (as printed by block explorers) into a
/// `Hash256`. An optional `0x` prefix is accepted and short inputs are
/// left-padded with zeros, so `"0x00"` is the zero hash.
pub fn hash256_from_hex(input: &str) -> Result<Hash256, ChainParamsError> {
    let mut s = input.trim();
    if let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        s = stripped;
    }
    if s.is_empty() || s.len() > 64 {
        return Err(ChainParamsError::new(
            ErrorCode::InvalidHex,
            format!("hash256: bad length {}", s.len()),
        ));
    }

    let padded = format!("{s:0>64}");
    let bytes = hex::decode(&padded)
        .map_err(|e| ChainParamsError::new(ErrorCode::InvalidHex, format!("hash256: {e}")))?;

    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    out.reverse();
    Ok(out)
}

/// Display-order hex of a `Hash256`.
pub fn hash256_to_hex(h: &Hash256) -> String {
    let mut be = *h;
    be.reverse();
    hex::encode(be)
}

/// Big-endian byte view, as used for numeric comparisons.
pub(crate) fn hash256_to_be(h: &Hash256) -> [u8; 32] {
    let mut be = *h;
    be.reverse();
    be
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_keeps_display_order() {
        let s = "00000e81cae8e8cbbf9679d53ff1df5e23062dc667a332fd121f86e68f5d25e3";
        let h = hash256_from_hex(s).expect("parse");
        // Serialization order puts the leading zeros at the end.
        assert_eq!(h[31], 0x00);
        assert_eq!(h[0], 0xe3);
        assert_eq!(hash256_to_hex(&h), s);
    }

    #[test]
    fn short_hex_is_left_padded() {
        let h = hash256_from_hex("0x00").expect("parse");
        assert_eq!(h, NULL_HASH);

        let h = hash256_from_hex("0x100010").expect("parse");
        assert_eq!(&h[..3], &[0x10, 0x00, 0x10]);
        assert!(h[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn bad_hex_is_rejected() {
        let err = hash256_from_hex("zz").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidHex);

        let err = hash256_from_hex(&"0".repeat(65)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidHex);

        let err = hash256_from_hex("0x").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidHex);
    }
}
