use boost_chainparams::{ChainParamsError, ErrorCode};

#[test]
fn error_code_as_str_covers_all_variants() {
    let cases: &[(ErrorCode, &str, bool)] = &[
        (
            ErrorCode::FatalGenesisMismatch,
            "FATAL_GENESIS_MISMATCH",
            true,
        ),
        (ErrorCode::FatalUnselected, "FATAL_UNSELECTED", true),
        (ErrorCode::UnknownNetwork, "UNKNOWN_NETWORK", false),
        (ErrorCode::AlreadySelected, "ALREADY_SELECTED", false),
        (ErrorCode::AlreadyInstalled, "ALREADY_INSTALLED", false),
        (ErrorCode::InvalidCheckpoints, "INVALID_CHECKPOINTS", true),
        (
            ErrorCode::InvalidDeploymentWindow,
            "INVALID_DEPLOYMENT_WINDOW",
            false,
        ),
        (ErrorCode::InvalidHex, "INVALID_HEX", false),
        (ErrorCode::InvalidTarget, "INVALID_TARGET", false),
        (ErrorCode::HashProvider, "HASH_PROVIDER", true),
    ];

    for (code, want, fatal) in cases {
        assert_eq!(code.as_str(), *want);
        assert_eq!(code.is_fatal(), *fatal, "{want}");
    }
}

#[test]
fn chain_params_error_display() {
    let e = ChainParamsError::new(ErrorCode::UnknownNetwork, "");
    assert_eq!(e.to_string(), "UNKNOWN_NETWORK");
    let e2 = ChainParamsError::new(ErrorCode::UnknownNetwork, "bogus");
    assert_eq!(e2.to_string(), "UNKNOWN_NETWORK: bogus");

    let boxed: Box<dyn std::error::Error> = Box::new(e2);
    assert!(boxed.to_string().starts_with("UNKNOWN_NETWORK"));
}
