use boost_chainparams::registry::{global, install_global};
use boost_chainparams::{
    hash256_to_hex, params, select_params, DeploymentPos, ErrorCode, Network, NetworkRegistry,
};
use boost_crypto::DevStdHashProvider;

// The process-wide handle is shared by every test in this binary, so the
// whole lifecycle is exercised in one test.
#[test]
fn global_handle_lifecycle() {
    assert!(global().is_none());
    assert_eq!(
        select_params("regtest").unwrap_err().code,
        ErrorCode::FatalUnselected
    );

    let mut registry = NetworkRegistry::build_unverified(&DevStdHashProvider).unwrap();
    registry
        .update_regtest_deployment(DeploymentPos::Csv, 1_000, 2_000)
        .unwrap();

    let installed = install_global(registry).unwrap();
    assert!(std::ptr::eq(installed, global().unwrap()));

    let again = NetworkRegistry::build_unverified(&DevStdHashProvider).unwrap();
    assert_eq!(
        install_global(again).unwrap_err().code,
        ErrorCode::AlreadyInstalled
    );

    let panicked = std::panic::catch_unwind(|| params().network);
    assert!(panicked.is_err());

    assert_eq!(
        select_params("bogus").unwrap_err().code,
        ErrorCode::UnknownNetwork
    );
    let active = select_params("regtest").unwrap();
    assert_eq!(active.network, Network::Regtest);
    assert!(std::ptr::eq(active, params()));

    let csv = params().consensus.deployment(DeploymentPos::Csv);
    assert_eq!((csv.start_time, csv.timeout), (1_000, 2_000));

    assert_eq!(
        select_params("main").unwrap_err().code,
        ErrorCode::AlreadySelected
    );
    assert_eq!(params().network, Network::Regtest);
}

#[test]
fn dev_provider_build_uses_recorded_hashes() {
    assert_eq!(
        NetworkRegistry::build(&DevStdHashProvider).unwrap_err().code,
        ErrorCode::FatalGenesisMismatch
    );

    let registry = NetworkRegistry::build_unverified(&DevStdHashProvider).unwrap();
    let main = registry.params_for_key("main").unwrap();
    assert_eq!(
        hash256_to_hex(main.genesis_hash()),
        "00000e81cae8e8cbbf9679d53ff1df5e23062dc667a332fd121f86e68f5d25e3"
    );
    assert_eq!(
        hash256_to_hex(&main.genesis.header.merkle_root),
        "603add6547a4c67f12f5a5fb5100fb455e3515b05e58a44a29a4496f7fcaaaf7"
    );
    assert!(!main.genesis_coinbase_reproducible);

    let regtest = registry.params(Network::Regtest);
    assert_eq!(
        hash256_to_hex(&regtest.genesis.header.merkle_root),
        "48c347e8ffa4e3b7f313f2301b055f3c35fe7ed6d0f5397e069f5afb2fb764da"
    );
    assert_eq!(regtest.checkpoints.hash_at(0), Some(regtest.genesis_hash()));
}

#[test]
fn registries_are_independent() {
    let mut a = NetworkRegistry::build_unverified(&DevStdHashProvider).unwrap();
    let b = NetworkRegistry::build_unverified(&DevStdHashProvider).unwrap();
    a.update_regtest_deployment(DeploymentPos::TestDummy, 5, 6)
        .unwrap();

    let untouched = b
        .params(Network::Regtest)
        .consensus
        .deployment(DeploymentPos::TestDummy);
    assert!(untouched.is_always_eligible());

    a.select("test").unwrap();
    assert_eq!(b.selected(), None);
}
