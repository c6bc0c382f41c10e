#![no_main]

use libfuzzer_sys::fuzz_target;
use asn1_vocab::{name_to_oid, oid_to_name};

fuzz_target!(|text: &str| {
    let oid = name_to_oid(text);
    assert_eq!(name_to_oid(oid), oid);

    let name = oid_to_name(text);
    if name != text {
        assert_eq!(name_to_oid(name), text);
    }
});
