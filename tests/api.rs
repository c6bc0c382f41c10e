//! Tests of the crate’s public interface as an external codec uses it.

use asn1_vocab::{
    name_to_oid, oid_to_name, Class, Directive, InvalidInput, TypeCode,
    UniversalType,
};
use asn1_vocab::radix::{self, decode, encode, to_radix};


#[test]
fn integer_content() {
    assert_eq!(encode("255", 10).unwrap().as_ref(), &[0xFF]);
    assert_eq!(encode("256", 10).unwrap().as_ref(), &[0x01, 0x00]);
    assert_eq!(encode("0", 10).unwrap().as_ref(), &[0x00]);
    assert_eq!(
        radix::encode_decimal("4294967296").unwrap().as_ref(),
        &[0x01, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn invalid_digits() {
    let err: InvalidInput = encode("9", 2).unwrap_err();
    assert_eq!(err.invalid_digit(), Some(('9', 0)));
    assert!(encode("12a", 10).is_err());
    assert!(encode("1", 0).unwrap_err().is_unsupported_base());

    // The error is a proper error type.
    let err: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(err.to_string(), "invalid digit '9' at position 0 for base 2");
}

#[test]
fn decode_ignores_base() {
    let encoded = encode("4711", 10).unwrap();
    assert_eq!(decode(&encoded, 10), "0001001001100111");
    assert_eq!(decode(&encoded, 16), "0001001001100111");
    assert_eq!(to_radix(&encoded, 10).unwrap(), "4711");
    assert_eq!(to_radix(&encoded, 16).unwrap(), "1267");
}

#[test]
fn decimal_round_trip_is_binary() {
    let value = "123456789012345678901234567890";
    let decoded = decode(&encode(value, 10).unwrap(), 10);
    assert_eq!(decoded.len() % 8, 0);
    assert_eq!(
        to_radix(&encode(&decoded, 2).unwrap(), 10).unwrap(), value
    );
}

#[test]
fn oid_names() {
    assert_eq!(name_to_oid("sha256"), "2.16.840.1.101.3.4.2.1");
    assert_eq!(name_to_oid("not-a-known-name"), "not-a-known-name");
    assert_eq!(oid_to_name("2.5.4.3"), "commonName");
    assert_eq!(oid_to_name("9.9.9"), "9.9.9");
}

#[test]
fn oid_names_of_owned_strings() {
    let text = String::from("sha384");
    let oid = name_to_oid(&text).to_owned();
    drop(text);
    assert_eq!(oid, "2.16.840.1.101.3.4.2.2");
}

#[test]
fn tag_vocabulary() {
    assert_eq!(Class::from_code(1), Some(Class::Application));
    assert_eq!(UniversalType::Sequence.number(), 16);
    assert_eq!(
        TypeCode::from_code(-3), Some(TypeCode::Directive(Directive::AnyRaw))
    );
    assert!(!TypeCode::from(UniversalType::Boolean).is_directive());
}
