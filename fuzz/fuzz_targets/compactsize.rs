#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let mut word = [0u8; 8];
    word.copy_from_slice(&data[..8]);
    let n = u64::from_le_bytes(word);

    let mut enc = Vec::new();
    boost_chainparams::encode_compact_size(n, &mut enc);
    let want_len = match n {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    };
    if enc.len() != want_len {
        panic!("non-minimal: n={n} enc={enc:02x?}");
    }
    let payload = if want_len == 1 { &enc[..] } else { &enc[1..] };
    let mut back = [0u8; 8];
    back[..payload.len()].copy_from_slice(payload);
    if u64::from_le_bytes(back) != n {
        panic!("mismatch: n={n} enc={enc:02x?}");
    }
});
