//! Primitives for handling data encoded in BER and DER.
//!
//! This crate provides the small pieces a BER or DER codec needs but that
//! aren’t part of the encoding itself:
//!
//! * the [`radix`] module converts arbitrarily large numbers between digit
//!   strings and their minimal big-endian octets,
//! * the [`oid`] module translates between object identifiers and their
//!   common names, and
//! * the [`tag`] module defines the vocabulary of tag classes, universal
//!   types and decoder directives.
//!
//! The only error that can happen is an [`InvalidInput`] when converting a
//! malformed digit string.

pub use self::error::InvalidInput;
pub use self::oid::{name_to_oid, oid_to_name, OidRegistry};
pub use self::radix::Radix;
pub use self::tag::{Class, Directive, TypeCode, UniversalType};

#[macro_use] pub mod debug;

pub mod oid;
pub mod radix;
pub mod tag;

mod error;
