use boost_crypto::HashProvider;

use crate::compactsize::encode_compact_size;
use crate::error::{ChainParamsError, ErrorCode};
use crate::hash::{Hash256, NULL_HASH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutPoint {
    pub hash: Hash256,
    pub n: u32,
}

impl OutPoint {
    /// The "no previous output" reference carried by coinbase inputs.
    pub const fn null() -> Self {
        Self {
            hash: NULL_HASH,
            n: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.hash == NULL_HASH && self.n == u32::MAX
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Vec<u8>,
}

/// Proof-of-stake era transaction: carries its own timestamp right after the
/// version field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub vin: Vec<TxIn>,
    pub vout: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.vin.len() == 1 && self.vin[0].prevout.is_null()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        encode_compact_size(self.vin.len() as u64, &mut out);
        for input in &self.vin {
            out.extend_from_slice(&input.prevout.hash);
            out.extend_from_slice(&input.prevout.n.to_le_bytes());
            encode_compact_size(input.script_sig.len() as u64, &mut out);
            out.extend_from_slice(&input.script_sig);
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }
        encode_compact_size(self.vout.len() as u64, &mut out);
        for output in &self.vout {
            out.extend_from_slice(&output.value.to_le_bytes());
            encode_compact_size(output.script_pubkey.len() as u64, &mut out);
            out.extend_from_slice(&output.script_pubkey);
        }
        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    pub fn txid(&self, provider: &dyn HashProvider) -> Result<Hash256, ChainParamsError> {
        provider
            .sha256d(&self.to_bytes())
            .map_err(|e| ChainParamsError::new(ErrorCode::HashProvider, format!("txid: {e}")))
    }
}
