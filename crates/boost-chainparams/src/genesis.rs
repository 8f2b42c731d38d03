//! Genesis block construction and anchor verification.
//!
//! The genesis coinbase carries the historical timestamp message and an
//! unspendable zero-value output. Construction is deterministic: the same
//! inputs produce byte-identical blocks on every call.

use boost_crypto::HashProvider;
use log::{debug, error, warn};

use crate::block::{Block, BlockHeader};
use crate::error::{ChainParamsError, ErrorCode};
use crate::hash::{hash256_to_hex, Hash256, NULL_HASH};
use crate::script::{push_data, push_script_num};
use crate::tx::{OutPoint, Transaction, TxIn, TxOut};

pub const GENESIS_TIMESTAMP: &[u8] = b"BBC News: Cameron launches election campaign.";

/// Script number pushed ahead of the timestamp message.
const GENESIS_SCRIPT_TAG: i64 = 42;

/// Recorded identity of a network's genesis block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisAnchor {
    pub hash: Hash256,
    pub merkle_root: Hash256,
    /// Whether the coinbase rebuilt from the parameters reproduces
    /// `merkle_root`. When false the header carries the recorded root.
    pub coinbase_reproducible: bool,
}

/// Parameters of one genesis block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisSpec {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
}

pub fn genesis_coinbase(timestamp: &[u8], time: u32) -> Transaction {
    let mut script_sig = Vec::with_capacity(timestamp.len() + 4);
    script_sig.push(0x00);
    push_script_num(&mut script_sig, GENESIS_SCRIPT_TAG);
    push_data(&mut script_sig, timestamp);

    Transaction {
        version: 1,
        time,
        vin: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        vout: vec![TxOut {
            value: 0,
            script_pubkey: Vec::new(),
        }],
        lock_time: 0,
    }
}

pub fn create_genesis_block_with_timestamp(
    provider: &dyn HashProvider,
    timestamp: &[u8],
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
) -> Result<Block, ChainParamsError> {
    let mut block = Block {
        header: BlockHeader {
            version,
            prev_block_hash: NULL_HASH,
            merkle_root: NULL_HASH,
            time,
            bits,
            nonce,
        },
        transactions: vec![genesis_coinbase(timestamp, time)],
    };
    block.header.merkle_root = block.compute_merkle_root(provider)?;
    Ok(block)
}

pub fn create_genesis_block(
    provider: &dyn HashProvider,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
) -> Result<Block, ChainParamsError> {
    create_genesis_block_with_timestamp(provider, GENESIS_TIMESTAMP, time, nonce, bits, version)
}

/// Build the genesis block for `spec` and check it against `anchor`.
///
/// Returns the block and the genesis hash the network is keyed on. The merkle
/// root is always checked when the coinbase is reproducible. The header hash
/// is only checked when the provider computes the consensus header hash;
/// otherwise the recorded hash is returned unchanged.
pub fn build_verified_genesis(
    provider: &dyn HashProvider,
    network: &str,
    spec: &GenesisSpec,
    anchor: &GenesisAnchor,
) -> Result<(Block, Hash256), ChainParamsError> {
    let mut block =
        create_genesis_block(provider, spec.time, spec.nonce, spec.bits, spec.version)?;
    let rebuilt_root = block.header.merkle_root;

    if rebuilt_root != anchor.merkle_root {
        if anchor.coinbase_reproducible {
            error!(
                "{network}: genesis merkle root {} != recorded {}",
                hash256_to_hex(&rebuilt_root),
                hash256_to_hex(&anchor.merkle_root)
            );
            return Err(ChainParamsError::new(
                ErrorCode::FatalGenesisMismatch,
                format!(
                    "{network}: merkle root {} != {}",
                    hash256_to_hex(&rebuilt_root),
                    hash256_to_hex(&anchor.merkle_root)
                ),
            ));
        }
        warn!(
            "{network}: rebuilt coinbase root {} != recorded {}, header keeps the recorded root",
            hash256_to_hex(&rebuilt_root),
            hash256_to_hex(&anchor.merkle_root)
        );
        block.header.merkle_root = anchor.merkle_root;
    }

    if !provider.is_consensus_header_hash() {
        debug!("{network}: header hash not checked, provider is not consensus");
        return Ok((block, anchor.hash));
    }

    let hash = block.hash(provider)?;
    if hash != anchor.hash {
        error!(
            "{network}: genesis hash {} != recorded {}",
            hash256_to_hex(&hash),
            hash256_to_hex(&anchor.hash)
        );
        return Err(ChainParamsError::new(
            ErrorCode::FatalGenesisMismatch,
            format!(
                "{network}: genesis hash {} != {}",
                hash256_to_hex(&hash),
                hash256_to_hex(&anchor.hash)
            ),
        ));
    }
    Ok((block, hash))
}
