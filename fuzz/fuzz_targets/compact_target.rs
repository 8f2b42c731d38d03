#![no_main]

use boost_chainparams::target::compact_to_target;
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let bits = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let Ok(target) = compact_to_target(bits) else {
        return;
    };
    if target == BigUint::from(0u32) {
        panic!("zero target accepted for {bits:#010x}");
    }
    if target.bits() > 256 {
        panic!("target wider than 256 bits for {bits:#010x}");
    }
});
