//! Hard-coded chain anchors.
//!
//! A validator must reject any chain whose block at a checkpointed height
//! hashes to anything other than the recorded value, regardless of work.
//! This table performs no hashing itself; it is only as trustworthy as the
//! audit of the chain it was generated from.

use crate::error::{ChainParamsError, ErrorCode};
use crate::hash::{hash256_to_hex, Hash256};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash256,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointData {
    checkpoints: Vec<Checkpoint>,
    /// UNIX timestamp of the last checkpoint block.
    pub last_checkpoint_time: i64,
    /// Transactions between genesis and the last checkpoint.
    pub transactions_last_checkpoint: i64,
    /// Estimated transactions per day after the last checkpoint.
    pub transactions_per_day: i64,
}

impl CheckpointData {
    pub fn new(
        checkpoints: Vec<Checkpoint>,
        genesis_hash: &Hash256,
        last_checkpoint_time: i64,
        transactions_last_checkpoint: i64,
        transactions_per_day: i64,
    ) -> Result<Self, ChainParamsError> {
        let Some(first) = checkpoints.first() else {
            return Err(ChainParamsError::new(
                ErrorCode::InvalidCheckpoints,
                "checkpoints: empty table",
            ));
        };
        if first.height != 0 || first.hash != *genesis_hash {
            return Err(ChainParamsError::new(
                ErrorCode::InvalidCheckpoints,
                format!(
                    "checkpoints: first entry must be genesis {}, got {} at {}",
                    hash256_to_hex(genesis_hash),
                    hash256_to_hex(&first.hash),
                    first.height
                ),
            ));
        }
        for pair in checkpoints.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(ChainParamsError::new(
                    ErrorCode::InvalidCheckpoints,
                    format!(
                        "checkpoints: height {} does not follow {}",
                        pair[1].height, pair[0].height
                    ),
                ));
            }
        }

        Ok(Self {
            checkpoints,
            last_checkpoint_time,
            transactions_last_checkpoint,
            transactions_per_day,
        })
    }

    pub fn entries(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn hash_at(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints
            .binary_search_by_key(&height, |c| c.height)
            .ok()
            .map(|i| &self.checkpoints[i].hash)
    }

    pub fn last_checkpoint(&self) -> &Checkpoint {
        // Non-empty by construction.
        &self.checkpoints[self.checkpoints.len() - 1]
    }

    pub fn last_height(&self) -> u32 {
        self.last_checkpoint().height
    }

    /// Advisory estimate of the chain's transaction count at `now`, for sync
    /// progress reporting only.
    pub fn estimated_total_transactions(&self, now: i64) -> f64 {
        let elapsed = now.saturating_sub(self.last_checkpoint_time).max(0) as f64;
        self.transactions_last_checkpoint as f64
            + elapsed / SECONDS_PER_DAY as f64 * self.transactions_per_day as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(height: u32, fill: u8) -> Checkpoint {
        Checkpoint {
            height,
            hash: [fill; 32],
        }
    }

    #[test]
    fn lookups() {
        let data = CheckpointData::new(
            vec![cp(0, 0xaa), cp(100, 0x01), cp(1_000, 0x02)],
            &[0xaa; 32],
            1_000,
            50,
            10,
        )
        .unwrap();

        assert_eq!(data.hash_at(0), Some(&[0xaa; 32]));
        assert_eq!(data.hash_at(100), Some(&[0x01; 32]));
        assert_eq!(data.hash_at(101), None);
        assert_eq!(data.last_height(), 1_000);
        assert_eq!(data.entries().len(), 3);
    }

    #[test]
    fn rejects_missing_genesis_and_disorder() {
        let err = CheckpointData::new(vec![], &[0xaa; 32], 0, 0, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCheckpoints);

        let err = CheckpointData::new(vec![cp(0, 0xbb)], &[0xaa; 32], 0, 0, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCheckpoints);

        let err = CheckpointData::new(vec![cp(1, 0xaa)], &[0xaa; 32], 0, 0, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCheckpoints);

        let err = CheckpointData::new(
            vec![cp(0, 0xaa), cp(10, 0x01), cp(10, 0x02)],
            &[0xaa; 32],
            0,
            0,
            0,
        )
        .unwrap_err();
        assert!(err.msg.contains("does not follow"));
    }

    #[test]
    fn transaction_estimate_never_goes_backwards() {
        let data = CheckpointData::new(vec![cp(0, 0xaa)], &[0xaa; 32], 1_000, 50, 720).unwrap();
        assert_eq!(data.estimated_total_transactions(0), 50.0);
        assert_eq!(data.estimated_total_transactions(1_000), 50.0);
        assert_eq!(
            data.estimated_total_transactions(1_000 + SECONDS_PER_DAY),
            770.0
        );
    }

    #[test]
    fn transaction_estimate_at_clock_extremes() {
        let data = CheckpointData::new(vec![cp(0, 0xaa)], &[0xaa; 32], 1_000, 50, 720).unwrap();
        assert_eq!(data.estimated_total_transactions(i64::MIN), 50.0);
        let far = data.estimated_total_transactions(i64::MAX);
        assert!(far.is_finite());
        assert!(far > 50.0);

        let behind = CheckpointData::new(vec![cp(0, 0xaa)], &[0xaa; 32], i64::MIN, 7, 720).unwrap();
        assert!(behind.estimated_total_transactions(i64::MAX) >= 7.0);
    }
}
