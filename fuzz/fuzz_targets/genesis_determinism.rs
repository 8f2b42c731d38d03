#![no_main]

use boost_chainparams::{create_genesis_block_with_timestamp, BLOCK_HEADER_BYTES};
use boost_crypto::{sha256d, DevStdHashProvider};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let word = |at: usize| {
        u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
    };
    let (time, nonce, bits, version) = (word(0), word(4), word(8), word(12) as i32);
    let timestamp = &data[16..];

    let p = DevStdHashProvider;
    let a = create_genesis_block_with_timestamp(&p, timestamp, time, nonce, bits, version)
        .expect("software provider never fails");
    let b = create_genesis_block_with_timestamp(&p, timestamp, time, nonce, bits, version)
        .expect("software provider never fails");

    if a != b || a.header.to_bytes() != b.header.to_bytes() {
        panic!("genesis construction is not deterministic");
    }
    if a.header.to_bytes().len() != BLOCK_HEADER_BYTES {
        panic!("header length");
    }
    // A single transaction is its own merkle root.
    if a.header.merkle_root != sha256d(&a.transactions[0].to_bytes()) {
        panic!("merkle root != txid");
    }
    if a.transactions[0].time != time || !a.transactions[0].is_coinbase() {
        panic!("coinbase shape");
    }
});
