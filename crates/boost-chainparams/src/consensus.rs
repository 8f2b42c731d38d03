use num_bigint::BigUint;

use crate::deployment::{Deployment, DeploymentPos, DeploymentTable};
use crate::hash::Hash256;
use crate::target::hash_value;

/// Which block-production rules apply at a height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockRules {
    ProofOfWork,
    ProofOfStake,
}

impl BlockRules {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockRules::ProofOfWork => "pow",
            BlockRules::ProofOfStake => "pos",
        }
    }
}

/// Consensus constants of one network. Plain data: retargeting, kernel and
/// activation logic read these values but live elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash256,
    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    pub pow_limit: Hash256,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    /// Highest height produced under proof-of-work rules.
    pub last_pow_block: u32,
    pub stake_min_age: i64,
    pub modifier_interval: i64,
    pub stake_split_age: i64,
    pub stake_combine_threshold: i64,
    pub time_limit_change: i64,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub minimum_chain_work: Hash256,
    pub(crate) deployments: DeploymentTable,
}

impl ConsensusParams {
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn rules_at(&self, height: u32) -> BlockRules {
        if height <= self.last_pow_block {
            BlockRules::ProofOfWork
        } else {
            BlockRules::ProofOfStake
        }
    }

    pub fn is_proof_of_work_height(&self, height: u32) -> bool {
        self.rules_at(height) == BlockRules::ProofOfWork
    }

    pub fn is_proof_of_stake_height(&self, height: u32) -> bool {
        self.rules_at(height) == BlockRules::ProofOfStake
    }

    pub fn deployments(&self) -> &DeploymentTable {
        &self.deployments
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        self.deployments.get(pos)
    }

    pub fn pow_limit_value(&self) -> BigUint {
        hash_value(&self.pow_limit)
    }

    pub fn minimum_chain_work_value(&self) -> BigUint {
        hash_value(&self.minimum_chain_work)
    }
}
