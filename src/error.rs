//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::{error, fmt};


//------------ InvalidInput --------------------------------------------------

/// A value handed to one of the converters was not acceptable.
///
/// This is the only error this crate produces. Lookups in the OID registry
/// never fail and neither does rendering octets as binary digits, so this
/// error only ever originates from parsing a digit string, from choosing an
/// unsupported base, or from building a registry out of empty entries.
///
/// The exact cause is available through the `Display` implementation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidInput(Kind);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Kind {
    /// A character that isn’t a digit of the base at the given position.
    Digit { ch: char, pos: usize, base: u32 },

    /// A base outside of 2 to 36.
    Base(u32),

    /// An empty digit string.
    Empty,

    /// A registry entry with an empty name or object identifier.
    Entry { name: String, oid: String },
}

impl InvalidInput {
    pub(crate) fn digit(ch: char, pos: usize, base: u32) -> Self {
        InvalidInput(Kind::Digit { ch, pos, base })
    }

    pub(crate) fn base(base: u32) -> Self {
        InvalidInput(Kind::Base(base))
    }

    pub(crate) fn empty() -> Self {
        InvalidInput(Kind::Empty)
    }

    pub(crate) fn entry(name: &str, oid: &str) -> Self {
        InvalidInput(Kind::Entry { name: name.into(), oid: oid.into() })
    }

    /// Returns the offending character and its position if there was one.
    pub fn invalid_digit(&self) -> Option<(char, usize)> {
        match self.0 {
            Kind::Digit { ch, pos, .. } => Some((ch, pos)),
            _ => None
        }
    }

    /// Returns whether the error was caused by an unsupported base.
    pub fn is_unsupported_base(&self) -> bool {
        matches!(self.0, Kind::Base(_))
    }
}


//--- Display and Error

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Kind::Digit { ch, pos, base } => {
                write!(
                    f, "invalid digit {:?} at position {} for base {}",
                    ch, pos, base
                )
            }
            Kind::Base(base) => {
                write!(f, "unsupported base {} (must be 2 to 36)", base)
            }
            Kind::Empty => f.write_str("empty digit string"),
            Kind::Entry { ref name, ref oid } => {
                write!(f, "empty registry entry {:?} => {:?}", name, oid)
            }
        }
    }
}

impl error::Error for InvalidInput { }


//============ Tests =========================================================
