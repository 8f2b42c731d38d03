use boost_crypto::HashProvider;

use crate::error::{ChainParamsError, ErrorCode};
use crate::hash::Hash256;
use crate::merkle::merkle_root_txids;
use crate::tx::Transaction;

pub const BLOCK_HEADER_BYTES: usize = 80;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn to_bytes(&self) -> [u8; BLOCK_HEADER_BYTES] {
        let mut out = [0u8; BLOCK_HEADER_BYTES];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(&self.prev_block_hash);
        out[36..68].copy_from_slice(&self.merkle_root);
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    pub fn hash(&self, provider: &dyn HashProvider) -> Result<Hash256, ChainParamsError> {
        provider.block_header_hash(&self.to_bytes()).map_err(|e| {
            ChainParamsError::new(ErrorCode::HashProvider, format!("block hash: {e}"))
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn hash(&self, provider: &dyn HashProvider) -> Result<Hash256, ChainParamsError> {
        self.header.hash(provider)
    }

    /// Merkle root recomputed from the block's transactions.
    pub fn compute_merkle_root(
        &self,
        provider: &dyn HashProvider,
    ) -> Result<Hash256, ChainParamsError> {
        let txids = self
            .transactions
            .iter()
            .map(|tx| tx.txid(provider))
            .collect::<Result<Vec<_>, _>>()?;
        merkle_root_txids(provider, &txids)
    }
}
