use boost_crypto::HashProvider;

use crate::error::{ChainParamsError, ErrorCode};
use crate::hash::Hash256;

/// Double SHA-256 merkle root over transaction ids. An odd node at any level
/// is paired with itself. A single id is its own root.
pub fn merkle_root_txids(
    provider: &dyn HashProvider,
    txids: &[Hash256],
) -> Result<Hash256, ChainParamsError> {
    if txids.is_empty() {
        return Err(ChainParamsError::new(
            ErrorCode::HashProvider,
            "merkle: empty txid list",
        ));
    }

    let mut level: Vec<Hash256> = txids.to_vec();
    let mut node_preimage = [0u8; 64];
    while level.len() > 1 {
        let mut next: Vec<Hash256> = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            let right = if pair.len() == 2 { &pair[1] } else { &pair[0] };
            node_preimage[..32].copy_from_slice(&pair[0]);
            node_preimage[32..].copy_from_slice(right);
            let node = provider.sha256d(&node_preimage).map_err(|e| {
                ChainParamsError::new(ErrorCode::HashProvider, format!("merkle: {e}"))
            })?;
            next.push(node);
        }
        level = next;
    }

    Ok(level[0])
}

#[cfg(test)]
mod tests {
    use super::merkle_root_txids;
    use crate::test_support::SoftwareProvider;
    use boost_crypto::sha256d;

    #[test]
    fn single_txid_is_root() {
        let id = [0x11u8; 32];
        assert_eq!(merkle_root_txids(&SoftwareProvider, &[id]).unwrap(), id);
    }

    #[test]
    fn odd_level_duplicates_last() {
        let a = [0x01u8; 32];
        let b = [0x02u8; 32];
        let c = [0x03u8; 32];

        let mut ab = Vec::new();
        ab.extend_from_slice(&a);
        ab.extend_from_slice(&b);
        let mut cc = Vec::new();
        cc.extend_from_slice(&c);
        cc.extend_from_slice(&c);
        let mut top = Vec::new();
        top.extend_from_slice(&sha256d(&ab));
        top.extend_from_slice(&sha256d(&cc));

        let got = merkle_root_txids(&SoftwareProvider, &[a, b, c]).unwrap();
        assert_eq!(got, sha256d(&top));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(merkle_root_txids(&SoftwareProvider, &[]).is_err());
    }
}
