pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn script_num_to_vec(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }
    let neg = value < 0;
    let mut abs = value.unsigned_abs();
    let mut out = Vec::new();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if neg { 0x80 } else { 0x00 });
    } else if neg {
        out[last] |= 0x80;
    }
    out
}

/// Append a data push. An empty push serializes as `OP_0`.
pub fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    match data.len() {
        0..=0x4b => script.push(data.len() as u8),
        0x4c..=0xff => {
            script.push(OP_PUSHDATA1);
            script.push(data.len() as u8);
        }
        0x100..=0xffff => {
            script.push(OP_PUSHDATA2);
            script.extend_from_slice(&(data.len() as u16).to_le_bytes());
        }
        _ => {
            script.push(OP_PUSHDATA4);
            script.extend_from_slice(&(data.len() as u32).to_le_bytes());
        }
    }
    script.extend_from_slice(data);
}

/// Append a script number as a data push of its minimal encoding.
pub fn push_script_num(script: &mut Vec<u8>, value: i64) {
    push_data(script, &script_num_to_vec(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_num_encoding() {
        assert!(script_num_to_vec(0).is_empty());
        assert_eq!(script_num_to_vec(42), vec![0x2a]);
        assert_eq!(script_num_to_vec(-1), vec![0x81]);
        assert_eq!(script_num_to_vec(128), vec![0x80, 0x00]);
        assert_eq!(script_num_to_vec(-128), vec![0x80, 0x80]);
        assert_eq!(script_num_to_vec(486_604_799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn zero_pushes_as_op_0() {
        let mut s = Vec::new();
        push_script_num(&mut s, 0);
        push_script_num(&mut s, 42);
        assert_eq!(s, vec![0x00, 0x01, 0x2a]);
    }

    #[test]
    fn push_data_switches_opcodes() {
        let mut s = Vec::new();
        push_data(&mut s, &[0u8; 75]);
        assert_eq!(s[0], 75);

        let mut s = Vec::new();
        push_data(&mut s, &[0u8; 76]);
        assert_eq!(&s[..2], &[OP_PUSHDATA1, 76]);

        let mut s = Vec::new();
        push_data(&mut s, &[0u8; 256]);
        assert_eq!(&s[..3], &[OP_PUSHDATA2, 0x00, 0x01]);
        assert_eq!(s.len(), 3 + 256);
    }
}
