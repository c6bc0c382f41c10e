#![no_main]

use libfuzzer_sys::fuzz_target;
use asn1_vocab::radix;

fuzz_target!(|data: (u8, &str)| {
    let (base, value) = data;
    let base = u32::from(base % 40);
    let encoded = match radix::encode(value, base) {
        Ok(encoded) => encoded,
        Err(_) => return
    };

    // Minimal: only zero itself may start with a zero octet.
    assert!(!encoded.is_empty());
    if encoded.len() > 1 {
        assert_ne!(encoded[0], 0);
    }

    let expected = value.trim_start_matches('0').to_lowercase();
    let back = radix::to_radix(&encoded, base).unwrap();
    if expected.is_empty() {
        assert_eq!(back, "0");
    }
    else {
        assert_eq!(back, expected);
    }
});
