pub mod block;
pub mod checkpoints;
mod compactsize;
pub mod consensus;
pub mod constants;
pub mod deployment;
pub mod error;
pub mod genesis;
pub mod hash;
pub mod merkle;
pub mod network;
pub mod registry;
pub mod script;
pub mod seeds;
pub mod target;
pub mod tx;

pub use block::{Block, BlockHeader, BLOCK_HEADER_BYTES};
pub use checkpoints::{Checkpoint, CheckpointData};
pub use compactsize::encode_compact_size;
pub use consensus::{BlockRules, ConsensusParams};
pub use deployment::{Deployment, DeploymentPos, DeploymentTable, ALWAYS_ELIGIBLE_TIMEOUT};
pub use error::{ChainParamsError, ErrorCode};
pub use genesis::{create_genesis_block, create_genesis_block_with_timestamp, GENESIS_TIMESTAMP};
pub use hash::{hash256_from_hex, hash256_to_hex, Hash256};
pub use network::{Base58Type, Network, NetworkParams};
pub use registry::{install_global, params, select_params, NetworkRegistry};

#[cfg(test)]
mod test_support;
