use boost_chainparams::{
    create_genesis_block_with_timestamp, hash256_to_hex, Base58Type, Block, ChainParamsError,
    DeploymentPos, Hash256, NetworkParams, NetworkRegistry, GENESIS_TIMESTAMP,
};
use boost_crypto::HashProvider;
use log::debug;
use serde::{Deserialize, Serialize};

const NETWORK_ENV: &str = "BOOST_NETWORK";
const DEFAULT_NETWORK: &str = "main";

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    network: Option<String>,

    #[serde(default)]
    height: u32,

    /// Custom genesis inputs. When `time` is absent the network's own
    /// genesis block is reported.
    #[serde(default)]
    timestamp: Option<String>,

    #[serde(default)]
    time: Option<u32>,

    #[serde(default)]
    nonce: u32,

    #[serde(default)]
    bits: Option<u32>,

    #[serde(default)]
    version: Option<i32>,

    /// Restricts `deployments` to one named slot.
    #[serde(default)]
    deployment: Option<String>,
}

#[derive(Serialize)]
struct Prefix {
    kind: &'static str,
    hex: String,
}

#[derive(Serialize)]
struct NetworkInfo {
    magic: String,
    default_port: u16,
    prune_after_height: u64,
    genesis_hash: String,
    dns_seeds: Vec<&'static str>,
    fixed_seeds: Vec<String>,
    base58_prefixes: Vec<Prefix>,
    mining_requires_peers: bool,
    default_consistency_checks: bool,
    require_standard: bool,
    mine_blocks_on_demand: bool,
    testnet_to_be_deprecated_field_rpc: bool,
}

#[derive(Serialize)]
struct GenesisInfo {
    header_hex: String,
    coinbase_hex: String,
    merkle_root: String,
    block_hash: String,
}

#[derive(Serialize)]
struct CheckpointEntry {
    height: u32,
    hash: String,
}

#[derive(Serialize)]
struct CheckpointInfo {
    entries: Vec<CheckpointEntry>,
    last_checkpoint_time: i64,
    transactions_last_checkpoint: i64,
    transactions_per_day: i64,
}

#[derive(Serialize)]
struct DeploymentEntry {
    name: &'static str,
    bit: u8,
    start_time: i64,
    timeout: i64,
    always_eligible: bool,
}

#[derive(Serialize, Default)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<NetworkInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    genesis: Option<GenesisInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    checkpoints: Option<CheckpointInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    deployments: Option<Vec<DeploymentEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    rules: Option<&'static str>,
}

fn err_code(e: &ChainParamsError) -> String {
    e.code.as_str().to_string()
}

fn failure(err: String) -> Response {
    Response {
        ok: false,
        err: Some(err),
        ..Response::default()
    }
}

fn load_hash_provider() -> Result<Box<dyn HashProvider>, String> {
    #[cfg(feature = "pow-dylib")]
    {
        if let Some(provider) = boost_crypto::PowDylibProvider::from_env()? {
            return Ok(Box::new(provider));
        }
    }
    #[cfg(not(feature = "pow-dylib"))]
    {
        if boost_crypto::pow_strict_from_env() {
            return Err("strict mode requires feature pow-dylib".into());
        }
    }

    #[cfg(feature = "dev-std")]
    {
        log::warn!("using dev-std hash provider: genesis hashes are not verified");
        return Ok(Box::new(boost_crypto::DevStdHashProvider));
    }
    #[cfg(not(feature = "dev-std"))]
    {
        Err("no hash provider available (build with feature pow-dylib or dev-std)".into())
    }
}

/// Only a `dev-std` build accepts a registry whose genesis hashes were not
/// recomputed.
fn load_registry(provider: &dyn HashProvider) -> Result<NetworkRegistry, ChainParamsError> {
    #[cfg(feature = "dev-std")]
    {
        if !provider.is_consensus_header_hash() {
            return NetworkRegistry::build_unverified(provider);
        }
    }
    NetworkRegistry::build(provider)
}

fn network_key(req: &Request) -> String {
    if let Some(key) = &req.network {
        return key.clone();
    }
    match std::env::var(NETWORK_ENV) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => DEFAULT_NETWORK.to_string(),
    }
}

fn genesis_info(block: &Block, block_hash: &Hash256) -> GenesisInfo {
    let coinbase_hex = block
        .transactions
        .first()
        .map(|tx| hex::encode(tx.to_bytes()))
        .unwrap_or_default();
    GenesisInfo {
        header_hex: hex::encode(block.header.to_bytes()),
        coinbase_hex,
        merkle_root: hash256_to_hex(&block.header.merkle_root),
        block_hash: hash256_to_hex(block_hash),
    }
}

fn network_info(p: &NetworkParams) -> NetworkInfo {
    NetworkInfo {
        magic: hex::encode(p.message_start),
        default_port: p.default_port,
        prune_after_height: p.prune_after_height,
        genesis_hash: hash256_to_hex(p.genesis_hash()),
        dns_seeds: p.dns_seeds.iter().map(|s| s.host).collect(),
        fixed_seeds: p
            .fixed_seeds
            .iter()
            .map(|s| s.socket_addr().to_string())
            .collect(),
        base58_prefixes: Base58Type::ALL
            .iter()
            .map(|kind| Prefix {
                kind: kind.as_str(),
                hex: hex::encode(p.base58_prefix(*kind)),
            })
            .collect(),
        mining_requires_peers: p.mining_requires_peers,
        default_consistency_checks: p.default_consistency_checks,
        require_standard: p.require_standard,
        mine_blocks_on_demand: p.mine_blocks_on_demand,
        testnet_to_be_deprecated_field_rpc: p.testnet_to_be_deprecated_field_rpc,
    }
}

fn run(req: &Request) -> Response {
    let provider = match load_hash_provider() {
        Ok(p) => p,
        Err(e) => return failure(format!("hash provider: {e}")),
    };
    let registry = match load_registry(provider.as_ref()) {
        Ok(r) => r,
        Err(e) => return failure(err_code(&e)),
    };
    handle(req, provider.as_ref(), &registry)
}

fn handle(req: &Request, provider: &dyn HashProvider, registry: &NetworkRegistry) -> Response {
    let key = network_key(req);
    let params = match registry.select(&key) {
        Ok(p) => p,
        Err(e) => return failure(err_code(&e)),
    };
    debug!("op {} on {}", req.op, params.network);

    let mut resp = Response {
        ok: true,
        network: Some(params.key()),
        ..Response::default()
    };
    match req.op.as_str() {
        "network_info" => {
            resp.info = Some(network_info(params));
        }
        "genesis" => {
            let Some(time) = req.time else {
                resp.genesis = Some(genesis_info(&params.genesis, params.genesis_hash()));
                return resp;
            };
            let timestamp = req
                .timestamp
                .as_deref()
                .map(str::as_bytes)
                .unwrap_or(GENESIS_TIMESTAMP);
            let built = create_genesis_block_with_timestamp(
                provider,
                timestamp,
                time,
                req.nonce,
                req.bits.unwrap_or(params.genesis.header.bits),
                req.version.unwrap_or(1),
            )
            .and_then(|block| {
                let hash = block.hash(provider)?;
                Ok(genesis_info(&block, &hash))
            });
            match built {
                Ok(info) => resp.genesis = Some(info),
                Err(e) => return failure(err_code(&e)),
            }
        }
        "checkpoints" => {
            let data = &params.checkpoints;
            resp.checkpoints = Some(CheckpointInfo {
                entries: data
                    .entries()
                    .iter()
                    .map(|c| CheckpointEntry {
                        height: c.height,
                        hash: hash256_to_hex(&c.hash),
                    })
                    .collect(),
                last_checkpoint_time: data.last_checkpoint_time,
                transactions_last_checkpoint: data.transactions_last_checkpoint,
                transactions_per_day: data.transactions_per_day,
            });
        }
        "deployments" => {
            let only = match req.deployment.as_deref().map(DeploymentPos::from_name) {
                None => None,
                Some(Some(pos)) => Some(pos),
                Some(None) => return failure("unknown deployment".to_string()),
            };
            resp.deployments = Some(
                params
                    .consensus
                    .deployments()
                    .iter()
                    .filter(|(pos, _)| only.map_or(true, |wanted| *pos == wanted))
                    .map(|(pos, d)| DeploymentEntry {
                        name: pos.name(),
                        bit: d.bit,
                        start_time: d.start_time,
                        timeout: d.timeout,
                        always_eligible: d.is_always_eligible(),
                    })
                    .collect(),
            );
        }
        "rules_at" => {
            resp.rules = Some(params.consensus.rules_at(req.height).as_str());
        }
        _ => return failure("unknown op".to_string()),
    }
    resp
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let resp = match serde_json::from_reader::<_, Request>(std::io::stdin()) {
        Ok(req) => run(&req),
        Err(e) => failure(format!("bad request: {e}")),
    };
    let _ = serde_json::to_writer(std::io::stdout(), &resp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use boost_crypto::DevStdHashProvider;

    fn ask(req: &Request) -> Response {
        let registry = NetworkRegistry::build_unverified(&DevStdHashProvider).unwrap();
        handle(req, &DevStdHashProvider, &registry)
    }

    fn request(op: &str, network: &str) -> Request {
        Request {
            op: op.to_string(),
            network: Some(network.to_string()),
            height: 0,
            timestamp: None,
            time: None,
            nonce: 0,
            bits: None,
            version: None,
            deployment: None,
        }
    }

    #[test]
    fn rules_at_reports_cutover() {
        let mut req = request("rules_at", "main");
        req.height = 43_200;
        assert_eq!(ask(&req).rules, Some("pow"));
        req.height = 43_201;
        assert_eq!(ask(&req).rules, Some("pos"));
    }

    #[test]
    fn unknown_network_is_an_error_code() {
        let resp = ask(&request("network_info", "mainnet"));
        assert!(!resp.ok);
        assert_eq!(resp.err.as_deref(), Some("UNKNOWN_NETWORK"));
    }

    #[test]
    fn regtest_genesis_merkle() {
        let resp = ask(&request("genesis", "regtest"));
        let genesis = resp.genesis.unwrap();
        assert_eq!(
            genesis.merkle_root,
            "48c347e8ffa4e3b7f313f2301b055f3c35fe7ed6d0f5397e069f5afb2fb764da"
        );
        assert_eq!(genesis.header_hex.len(), 160);
    }

    #[test]
    fn custom_genesis_uses_request_inputs() {
        let mut req = request("genesis", "regtest");
        req.time = Some(1_296_688_602);
        req.bits = Some(0x207f_ffff);
        let same = ask(&req).genesis.unwrap();
        assert_eq!(
            same.merkle_root,
            "48c347e8ffa4e3b7f313f2301b055f3c35fe7ed6d0f5397e069f5afb2fb764da"
        );

        req.timestamp = Some("other".to_string());
        let other = ask(&req).genesis.unwrap();
        assert_ne!(other.merkle_root, same.merkle_root);
    }

    #[test]
    fn network_info_serializes_prefixes() {
        let resp = ask(&request("network_info", "test"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["network"], "test");
        assert_eq!(json["info"]["magic"], "70352205");
        assert_eq!(json["info"]["base58_prefixes"][3]["hex"], "043587cf");
        assert!(json.get("err").is_none());
    }

    #[test]
    fn deployments_and_checkpoints() {
        let resp = ask(&request("deployments", "regtest"));
        let deployments = resp.deployments.unwrap();
        assert_eq!(deployments.len(), 3);
        assert!(deployments.iter().all(|d| d.always_eligible));

        let resp = ask(&request("checkpoints", "main"));
        let checkpoints = resp.checkpoints.unwrap();
        assert_eq!(checkpoints.entries[0].height, 0);
        assert_eq!(checkpoints.transactions_per_day, 720);
    }

    #[test]
    fn unknown_op() {
        let resp = ask(&request("mine", "regtest"));
        assert_eq!(resp.err.as_deref(), Some("unknown op"));
    }

    #[test]
    fn deployments_filtered_by_name() {
        let mut req = request("deployments", "main");
        req.deployment = Some("csv".to_string());
        let only = ask(&req).deployments.unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name, "csv");
        assert_eq!(only[0].bit, 0);

        req.deployment = Some("taproot".to_string());
        assert_eq!(ask(&req).err.as_deref(), Some("unknown deployment"));
    }

    #[cfg(not(feature = "dev-std"))]
    #[test]
    fn release_build_refuses_unverified_genesis() {
        let err = load_registry(&DevStdHashProvider).unwrap_err();
        assert_eq!(err.code, boost_chainparams::ErrorCode::FatalGenesisMismatch);
    }

    #[cfg(not(any(feature = "dev-std", feature = "pow-dylib")))]
    #[test]
    fn default_build_has_no_provider() {
        assert!(load_hash_provider().is_err());
    }
}
