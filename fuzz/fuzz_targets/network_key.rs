#![no_main]

use boost_chainparams::{ErrorCode, Network};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(key) = std::str::from_utf8(data) else {
        return;
    };
    match key.parse::<Network>() {
        Ok(network) => {
            if network.as_str() != key {
                panic!("accepted non-canonical key {key:?}");
            }
        }
        Err(e) => {
            if e.code != ErrorCode::UnknownNetwork {
                panic!("unexpected code {:?}", e.code);
            }
            if matches!(key, "main" | "test" | "regtest") {
                panic!("rejected canonical key {key:?}");
            }
        }
    }
});
