//! Conversion between digit strings and big-endian octets.
//!
//! BER encodes integers as big-endian octet sequences. Values arriving from
//! configuration or from a textual representation are usually digit strings
//! of arbitrary length though, far too large for any native integer. The
//! functions in this module convert between the two without going through
//! a native integer.
//!
//! [`encode`] turns a digit string in any base between 2 and 36 into its
//! minimal unsigned big-endian encoding. [`decode`] goes the other way but,
//! for compatibility with existing callers, always produces binary digits.
//! [`to_radix`] is the variant that actually honours the requested base.

use bytes::Bytes;
use smallvec::SmallVec;
use crate::error::InvalidInput;


//------------ Constants -----------------------------------------------------

/// The base assumed for digit strings unless told otherwise.
pub const DEFAULT_BASE: u32 = 10;

/// Inline capacity of the working buffers.
///
/// Sixty-four octets cover a 512 bit integer before we need to allocate.
type Buf = SmallVec<[u8; 64]>;


//------------ Radix ---------------------------------------------------------

/// The base of a digit string.
///
/// Digits are `0` to `9` followed by the letters `a` to `z`, so the
/// supported bases run from 2 to 36. Letters are accepted in either case
/// but always produced in lower case.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Radix(u8);

impl Radix {
    /// The smallest supported base.
    pub const MIN: u32 = 2;

    /// The largest supported base.
    pub const MAX: u32 = 36;

    pub const BINARY: Self = Radix(2);
    pub const OCTAL: Self = Radix(8);
    pub const DECIMAL: Self = Radix(10);
    pub const HEX: Self = Radix(16);

    /// Creates a radix from a base.
    ///
    /// Returns an error if `base` is not between 2 and 36.
    pub fn new(base: u32) -> Result<Self, InvalidInput> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Radix(base as u8))
        }
        else {
            xerr!(Err(InvalidInput::base(base)))
        }
    }

    /// Returns the base as an integer.
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// Returns the value of a digit character or `None` if it isn’t one.
    pub fn digit_value(self, ch: char) -> Option<u8> {
        ch.to_digit(self.get()).map(|value| value as u8)
    }

    /// Returns the character for a digit value or `None` if out of range.
    pub fn digit_char(self, value: u8) -> Option<char> {
        char::from_digit(u32::from(value), self.get())
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DECIMAL
    }
}


//------------ Encoding ------------------------------------------------------

/// Encodes a digit string into its minimal big-endian octets.
///
/// The value is the unsigned integer written by `value` in `base`. The
/// result is the binary expansion of that value padded with zero bits to
/// full octets. There are never any leading zero octets except for the
/// value zero itself which becomes a single zero octet. Leading zeros in
/// `value` do not affect the result.
///
/// Returns an error if `base` is not between 2 and 36, if `value` is empty,
/// or if it contains a character that isn’t a digit in `base`.
pub fn encode(value: &str, base: u32) -> Result<Bytes, InvalidInput> {
    let radix = Radix::new(base)?;
    if value.is_empty() {
        xerr!(return Err(InvalidInput::empty()))
    }

    // The accumulator is kept little-endian so that growing it only ever
    // appends.
    let mut acc = Buf::new();
    for (pos, ch) in value.chars().enumerate() {
        let digit = match radix.digit_value(ch) {
            Some(digit) => digit,
            None => xerr!(return Err(InvalidInput::digit(ch, pos, base)))
        };
        mul_add(&mut acc, radix.get(), digit);
    }
    if acc.is_empty() {
        acc.push(0)
    }
    acc.reverse();
    Ok(Bytes::copy_from_slice(&acc))
}

/// Encodes a decimal digit string.
pub fn encode_decimal(value: &str) -> Result<Bytes, InvalidInput> {
    encode(value, DEFAULT_BASE)
}

/// Sets `acc` to `acc * base + digit`.
///
/// `acc` is little-endian and never has a most significant zero octet.
fn mul_add(acc: &mut Buf, base: u32, digit: u8) {
    let mut carry = u32::from(digit);
    for octet in acc.iter_mut() {
        let val = u32::from(*octet) * base + carry;
        *octet = val as u8;
        carry = val >> 8;
    }
    // With a base of at most 36 the carry never exceeds one octet.
    if carry != 0 {
        acc.push(carry as u8)
    }
}


//------------ Decoding ------------------------------------------------------

/// Renders octets as a string of binary digits.
///
/// Each octet becomes exactly eight characters `'0'` or `'1'`, most
/// significant bit first, so the result is `8 * bytes.len()` long and an
/// empty slice results in an empty string.
///
/// The `base` argument is accepted but not applied: the result is binary
/// no matter what base is asked for. Existing callers rely on this, so it
/// stays. Use [`to_radix`] to get the value in a different base.
pub fn decode(bytes: &[u8], base: u32) -> String {
    let _ = base;
    let mut res = String::with_capacity(bytes.len() * 8);
    for &octet in bytes {
        for shift in (0..8).rev() {
            res.push(if (octet >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    res
}

/// Renders big-endian octets as a digit string in the given base.
///
/// The octets are read as an unsigned integer. The result has no leading
/// zeros and uses lower case letters for digits above nine. Both an empty
/// slice and a slice of only zero octets result in `"0"`.
///
/// Returns an error if `base` is not between 2 and 36.
pub fn to_radix(bytes: &[u8], base: u32) -> Result<String, InvalidInput> {
    let radix = Radix::new(base)?;
    let mut num: Buf = strip_zeros(bytes).into();

    // Digits are collected least significant first.
    let mut digits = Buf::new();
    while !num.is_empty() {
        digits.push(div_rem(&mut num, radix.get()));
        let lead = num.len() - strip_zeros(&num).len();
        num.drain(..lead);
    }
    if digits.is_empty() {
        return Ok(String::from("0"))
    }
    Ok(digits.iter().rev().filter_map(|&d| radix.digit_char(d)).collect())
}

/// Divides big-endian `num` by `base` in place, returning the remainder.
fn div_rem(num: &mut Buf, base: u32) -> u8 {
    let mut rem = 0u32;
    for octet in num.iter_mut() {
        let cur = (rem << 8) | u32::from(*octet);
        *octet = (cur / base) as u8;
        rem = cur % base;
    }
    rem as u8
}

fn strip_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&x| x != 0).unwrap_or(bytes.len());
    &bytes[start..]
}


//============ Tests =========================================================
