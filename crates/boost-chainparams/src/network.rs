use core::fmt;
use core::str::FromStr;

use boost_crypto::HashProvider;
use log::debug;

use crate::block::Block;
use crate::checkpoints::{Checkpoint, CheckpointData};
use crate::consensus::ConsensusParams;
use crate::constants::{
    COIN, MAIN_MESSAGE_START, MAIN_PORT, NETWORK_KEY_MAIN, NETWORK_KEY_REGTEST,
    NETWORK_KEY_TEST, REGTEST_MESSAGE_START, REGTEST_PORT, TEST_PORT,
};
use crate::deployment::{Deployment, DeploymentTable};
use crate::error::{ChainParamsError, ErrorCode};
use crate::genesis::{build_verified_genesis, GenesisAnchor, GenesisSpec};
use crate::hash::{hash256_from_hex, hash256_to_hex, Hash256};
use crate::seeds::{DnsSeed, SeedSpec6, MAIN_DNS_SEEDS, MAIN_FIXED_SEEDS};
use crate::target::{compact_to_target, hash_value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Main => NETWORK_KEY_MAIN,
            Network::Test => NETWORK_KEY_TEST,
            Network::Regtest => NETWORK_KEY_REGTEST,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ChainParamsError;

    /// Keys are exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NETWORK_KEY_MAIN => Ok(Network::Main),
            NETWORK_KEY_TEST => Ok(Network::Test),
            NETWORK_KEY_REGTEST => Ok(Network::Regtest),
            _ => Err(ChainParamsError::new(
                ErrorCode::UnknownNetwork,
                format!("unknown network key: {s:?}"),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base58Type {
    PubkeyAddress = 0,
    ScriptAddress = 1,
    SecretKey = 2,
    ExtPublicKey = 3,
    ExtSecretKey = 4,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Base58Type::PubkeyAddress => "pubkey_address",
            Base58Type::ScriptAddress => "script_address",
            Base58Type::SecretKey => "secret_key",
            Base58Type::ExtPublicKey => "ext_public_key",
            Base58Type::ExtSecretKey => "ext_secret_key",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkParams {
    pub network: Network,
    pub consensus: ConsensusParams,
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub prune_after_height: u64,
    pub genesis: Block,
    /// False when the genesis coinbase rebuilt from the published inputs
    /// does not hash to the header's merkle root. The header then carries
    /// the recorded root and recomputing it from `genesis.transactions`
    /// will not match.
    pub genesis_coinbase_reproducible: bool,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: &'static [SeedSpec6],
    base58_prefixes: [&'static [u8]; 5],
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub checkpoints: CheckpointData,
}

impl NetworkParams {
    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes[kind as usize]
    }

    pub fn genesis_hash(&self) -> &Hash256 {
        &self.consensus.hash_genesis_block
    }

    pub fn key(&self) -> &'static str {
        self.network.as_str()
    }
}

const MAIN_PREFIXES: [&[u8]; 5] = [
    &[25],
    &[85],
    &[153],
    &[0x04, 0x88, 0xB2, 0x1E],
    &[0x04, 0x88, 0xAD, 0xE4],
];
const TEST_PREFIXES: [&[u8]; 5] = [
    &[111],
    &[196],
    &[239],
    &[0x04, 0x35, 0x87, 0xCF],
    &[0x04, 0x35, 0x83, 0x94],
];

const POW_LIMIT_MAIN: &str = "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
const POW_LIMIT_REGTEST: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
const MINIMUM_CHAIN_WORK: &str = "0x100010";

const GENESIS_BITS: u32 = 0x1e0f_ffff;
const REGTEST_GENESIS_BITS: u32 = 0x207f_ffff;

const GENESIS_MERKLE: &str = "603add6547a4c67f12f5a5fb5100fb455e3515b05e58a44a29a4496f7fcaaaf7";
const REGTEST_GENESIS_MERKLE: &str = "48c347e8ffa4e3b7f313f2301b055f3c35fe7ed6d0f5397e069f5afb2fb764da";

pub const MAIN_GENESIS_HASH: &str = "00000e81cae8e8cbbf9679d53ff1df5e23062dc667a332fd121f86e68f5d25e3";
pub const TEST_GENESIS_HASH: &str = "0000bfc0a4fd7d2215718380aae7e92f0821b0c4785a64039b173840ea1c36fb";
pub const REGTEST_GENESIS_HASH: &str = "502738ac5fdf9de575558e7d090b9abad173f05570aa9ced54b8fb00b30e71d0";

const MAIN_CHECKPOINTS: &[(u32, &str)] = &[
    (0, MAIN_GENESIS_HASH),
    (100, "000000ff3b169878019e2ef990113cb47dfe4b92d18f49ac0233011b89d0ae3b"),
    (1_000, "00000000087645f692b29da415d7cc55e0d0925ed1492c4703c2c4b634b8f29b"),
    (5_002, "0000000007499ff2a0bad402934236edb780872b3c3defe5f1612981b2307c8b"),
    (10_000, "000000000d0d85fcccc2c8e1e36ade1427006ec7ebdac9f9d7499c11251bb1fc"),
    (15_001, "000000000470415c747542f89ff3aaeb0e5387f0132035c9370fe7503796ca28"),
    (25_002, "00000000003d118a65638737be61aba2f8ff9f655d60153bb3c8607003f73e10"),
    (30_001, "000000000065dfe36520036c8c414baf9986a948fe9f793437f5e45c9c4ccd68"),
    (140_000, "20cc8a57580d99c07f2f3c77aab95f54ead88feb6a1d292f7eb51854944e0256"),
    (156_000, "c9c0e2e598da65a7a2036586403003f9994ccfaa7906fb2caaab5a50361ce049"),
    (306_500, "d509595cfd52380ac4059e8baedd01e3ac89694279c5fd79d2693308cf8ffa3e"),
    (489_550, "9801f200e470a13aca3c3fd54f0a17e5945eea24b378c535a008835af527beb0"),
    (600_000, "9dcdc9959bb6d16f6fc852f8a77828779d265d45c52ec216f6a7d235a689ee1d"),
    (811_300, "000002539bf0373bd1adc04e30fcb9ae5f46f27694d3bdbbdd6b0195e709db5c"),
    (884_400, "00000c0d2c9d2d326ca6413eb362f8576366f4559837006f88da773ebf556fc2"),
    (900_000, "0000028d002d0e42a0aefae9eb7d526fc1e6a212f2af90fb893daf95dad0c729"),
    (930_500, "000005de51c6c8cbd82b480195f6ac9665c5e7963b9531f7c6a7bf077443050f"),
    (1_319_500, "6ae145bba3b4eb2b15e6dc98f43f4d70eafa981150c8669db2d0cf87c1b7987e"),
];

fn production_deployments() -> Result<DeploymentTable, ChainParamsError> {
    DeploymentTable::new([
        // 2008-01-01 .. 2008-12-31
        Deployment::new(28, 1_199_145_601, 1_230_767_999),
        // 2018-08-01 .. 2019-08-01
        Deployment::new(0, 1_533_081_600, 1_564_617_600),
        Deployment::new(1, 1_533_081_600, 1_564_617_600),
    ])
}

fn regtest_deployments() -> Result<DeploymentTable, ChainParamsError> {
    DeploymentTable::new([
        Deployment::always_eligible(28),
        Deployment::always_eligible(0),
        Deployment::always_eligible(1),
    ])
}

fn checkpoint_table(
    entries: &[(u32, &str)],
    genesis_hash: &Hash256,
    hints: (i64, i64, i64),
) -> Result<CheckpointData, ChainParamsError> {
    let checkpoints = entries
        .iter()
        .map(|&(height, hex)| {
            Ok(Checkpoint {
                height,
                hash: hash256_from_hex(hex)?,
            })
        })
        .collect::<Result<Vec<_>, ChainParamsError>>()?;
    CheckpointData::new(checkpoints, genesis_hash, hints.0, hints.1, hints.2)
}

/// The genesis difficulty must not be easier than the network's ceiling.
fn check_genesis_bits(
    network: Network,
    bits: u32,
    pow_limit: &Hash256,
) -> Result<(), ChainParamsError> {
    let target = compact_to_target(bits)?;
    if target > hash_value(pow_limit) {
        return Err(ChainParamsError::new(
            ErrorCode::InvalidTarget,
            format!(
                "{network}: genesis bits {bits:#010x} above pow limit {}",
                hash256_to_hex(pow_limit)
            ),
        ));
    }
    Ok(())
}

struct Identity {
    network: Network,
    spec: GenesisSpec,
    anchor: GenesisAnchor,
    pow_limit: Hash256,
}

fn verified_genesis(
    provider: &dyn HashProvider,
    id: &Identity,
) -> Result<(Block, Hash256), ChainParamsError> {
    check_genesis_bits(id.network, id.spec.bits, &id.pow_limit)?;
    build_verified_genesis(provider, id.network.as_str(), &id.spec, &id.anchor)
}

pub fn main_params(provider: &dyn HashProvider) -> Result<NetworkParams, ChainParamsError> {
    let id = Identity {
        network: Network::Main,
        spec: GenesisSpec {
            time: 1_400_512_373,
            nonce: 5_726_282,
            bits: GENESIS_BITS,
            version: 1,
        },
        anchor: GenesisAnchor {
            hash: hash256_from_hex(MAIN_GENESIS_HASH)?,
            merkle_root: hash256_from_hex(GENESIS_MERKLE)?,
            coinbase_reproducible: false,
        },
        pow_limit: hash256_from_hex(POW_LIMIT_MAIN)?,
    };
    let (genesis, genesis_hash) = verified_genesis(provider, &id)?;

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1_000,
        pow_limit: id.pow_limit,
        pow_target_timespan: 16 * 60,
        pow_target_spacing: 60,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        last_pow_block: 43_200,
        stake_min_age: 24 * 60 * 60,
        modifier_interval: 10 * 60,
        stake_split_age: 24 * 60 * 60,
        stake_combine_threshold: 100 * COIN,
        time_limit_change: 1_455_825_600,
        // 75% of the window
        rule_change_activation_threshold: 15_120,
        miner_confirmation_window: 20_160,
        minimum_chain_work: hash256_from_hex(MINIMUM_CHAIN_WORK)?,
        deployments: production_deployments()?,
    };
    let checkpoints = checkpoint_table(
        MAIN_CHECKPOINTS,
        &genesis_hash,
        (1_527_684_187, 1_319_501, 720),
    )?;

    debug!("built main params, genesis {}", hash256_to_hex(&genesis_hash));
    Ok(NetworkParams {
        network: Network::Main,
        consensus,
        message_start: MAIN_MESSAGE_START,
        default_port: MAIN_PORT,
        prune_after_height: 100_000,
        genesis,
        genesis_coinbase_reproducible: id.anchor.coinbase_reproducible,
        dns_seeds: MAIN_DNS_SEEDS,
        fixed_seeds: MAIN_FIXED_SEEDS,
        base58_prefixes: MAIN_PREFIXES,
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: false,
        checkpoints,
    })
}

pub fn test_params(provider: &dyn HashProvider) -> Result<NetworkParams, ChainParamsError> {
    let id = Identity {
        network: Network::Test,
        spec: GenesisSpec {
            time: 1_400_512_373,
            nonce: 1_908_795,
            bits: GENESIS_BITS,
            version: 1,
        },
        anchor: GenesisAnchor {
            hash: hash256_from_hex(TEST_GENESIS_HASH)?,
            merkle_root: hash256_from_hex(GENESIS_MERKLE)?,
            coinbase_reproducible: false,
        },
        pow_limit: hash256_from_hex(POW_LIMIT_MAIN)?,
    };
    let (genesis, genesis_hash) = verified_genesis(provider, &id)?;

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        majority_enforce_block_upgrade: 50,
        majority_reject_block_outdated: 75,
        majority_window: 100,
        pow_limit: id.pow_limit,
        pow_target_timespan: 16 * 60,
        pow_target_spacing: 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        last_pow_block: 400_000,
        stake_min_age: 15 * 60,
        modifier_interval: 10 * 60,
        stake_split_age: 24 * 60 * 60,
        stake_combine_threshold: 100 * COIN,
        time_limit_change: 0,
        rule_change_activation_threshold: 1_512,
        miner_confirmation_window: 2_016,
        minimum_chain_work: hash256_from_hex(MINIMUM_CHAIN_WORK)?,
        deployments: production_deployments()?,
    };
    let checkpoints = checkpoint_table(
        &[(0, TEST_GENESIS_HASH)],
        &genesis_hash,
        (1_400_512_373, 1, 720),
    )?;

    debug!("built test params, genesis {}", hash256_to_hex(&genesis_hash));
    Ok(NetworkParams {
        network: Network::Test,
        consensus,
        message_start: MAIN_MESSAGE_START,
        default_port: TEST_PORT,
        prune_after_height: 1_000,
        genesis,
        genesis_coinbase_reproducible: id.anchor.coinbase_reproducible,
        dns_seeds: &[],
        fixed_seeds: &[],
        base58_prefixes: TEST_PREFIXES,
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: true,
        checkpoints,
    })
}

pub fn regtest_params(provider: &dyn HashProvider) -> Result<NetworkParams, ChainParamsError> {
    let id = Identity {
        network: Network::Regtest,
        spec: GenesisSpec {
            time: 1_296_688_602,
            nonce: 0,
            bits: REGTEST_GENESIS_BITS,
            version: 1,
        },
        anchor: GenesisAnchor {
            hash: hash256_from_hex(REGTEST_GENESIS_HASH)?,
            merkle_root: hash256_from_hex(REGTEST_GENESIS_MERKLE)?,
            coinbase_reproducible: true,
        },
        pow_limit: hash256_from_hex(POW_LIMIT_REGTEST)?,
    };
    let (genesis, genesis_hash) = verified_genesis(provider, &id)?;

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1_000,
        pow_limit: id.pow_limit,
        pow_target_timespan: 16 * 60,
        pow_target_spacing: 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        // Every height above genesis is proof-of-stake.
        last_pow_block: 0,
        stake_min_age: 24 * 60 * 60,
        modifier_interval: 10 * 60,
        stake_split_age: 24 * 60 * 60,
        stake_combine_threshold: 100 * COIN,
        time_limit_change: 0,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        minimum_chain_work: hash256_from_hex("0x00")?,
        deployments: regtest_deployments()?,
    };
    let checkpoints = checkpoint_table(&[(0, REGTEST_GENESIS_HASH)], &genesis_hash, (0, 0, 0))?;

    debug!("built regtest params, genesis {}", hash256_to_hex(&genesis_hash));
    Ok(NetworkParams {
        network: Network::Regtest,
        consensus,
        message_start: REGTEST_MESSAGE_START,
        default_port: REGTEST_PORT,
        prune_after_height: 1_000,
        genesis,
        genesis_coinbase_reproducible: id.anchor.coinbase_reproducible,
        dns_seeds: &[],
        fixed_seeds: &[],
        base58_prefixes: TEST_PREFIXES,
        mining_requires_peers: false,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_to_be_deprecated_field_rpc: false,
        checkpoints,
    })
}
