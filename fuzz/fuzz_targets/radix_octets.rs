#![no_main]

use libfuzzer_sys::fuzz_target;
use asn1_vocab::radix;

fuzz_target!(|data: &[u8]| {
    let binary = radix::decode(data, 10);
    assert_eq!(binary.len(), data.len() * 8);

    if let Ok(decimal) = radix::to_radix(data, 10) {
        let start = data.iter().position(|&x| x != 0).unwrap_or(data.len());
        let encoded = radix::encode(&decimal, 10).unwrap();
        if start == data.len() {
            assert_eq!(encoded.as_ref(), b"\x00");
        }
        else {
            assert_eq!(encoded.as_ref(), &data[start..]);
        }
    }
});
