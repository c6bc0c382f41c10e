//! The tag vocabulary shared with BER and DER codecs.
//!
//! A codec needs two independent sets of codes: the class of a tag and the
//! type a value is to be decoded as. The latter is either a real universal
//! tag number as defined in clause 8.4 of ITU Recommendation X.690 or a
//! directive that tells a schema-driven decoder to treat a field specially.
//!
//! Older codecs squeeze both into a single integer, using negative numbers
//! for the directives. [`TypeCode`] keeps them apart as separate variants
//! but still converts to and from that integer space via
//! [`TypeCode::from_code`] and [`TypeCode::code`].

use std::fmt;


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    Universal,
    Application,
    Context,
    Private,
}

impl Class {
    /// Returns the class for its numeric code between 0 and 3.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Class::Universal),
            1 => Some(Class::Application),
            2 => Some(Class::Context),
            3 => Some(Class::Private),
            _ => None
        }
    }

    /// Returns the numeric code of the class.
    pub const fn code(self) -> u8 {
        match self {
            Class::Universal => 0,
            Class::Application => 1,
            Class::Context => 2,
            Class::Private => 3,
        }
    }

    /// Returns the class encoded in the first identifier octet.
    ///
    /// Only the two most significant bits are considered.
    pub const fn from_ident_octet(octet: u8) -> Self {
        match octet {
            0x00..=0x3F => Class::Universal,
            0x40..=0x7F => Class::Application,
            0x80..=0xBF => Class::Context,
            0xC0..=0xFF => Class::Private
        }
    }

    /// Returns the class bits of the first identifier octet.
    pub const fn into_ident_octet(self) -> u8 {
        self.code() << 6
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Class::Universal => "UNIVERSAL",
            Class::Application => "APPLICATION",
            Class::Context => "CONTEXT-SPECIFIC",
            Class::Private => "PRIVATE",
        })
    }
}


//------------ UniversalType -------------------------------------------------

/// A type with a tag number in the universal class.
///
/// Tag numbers 14 and 15 as well as anything above 30 are not covered.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum UniversalType {
    Boolean = 1,
    Integer = 2,
    BitString = 3,
    OctetString = 4,
    Null = 5,
    ObjectIdentifier = 6,
    ObjectDescriptor = 7,

    /// The EXTERNAL and INSTANCE OF types.
    InstanceOf = 8,
    Real = 9,
    Enumerated = 10,
    EmbeddedPdv = 11,
    Utf8String = 12,
    RelativeOid = 13,

    /// The SEQUENCE and SEQUENCE OF types.
    Sequence = 16,

    /// The SET and SET OF types.
    Set = 17,
    NumericString = 18,
    PrintableString = 19,

    /// The TeletexString, also known as T61String.
    TeletexString = 20,
    VideotexString = 21,
    Ia5String = 22,
    UtcTime = 23,
    GeneralizedTime = 24,
    GraphicString = 25,

    /// The VisibleString, also known as ISO646String.
    VisibleString = 26,
    GeneralString = 27,
    UniversalString = 28,
    CharacterString = 29,
    BmpString = 30,
}

impl UniversalType {
    /// All universal types in order of their tag numbers.
    pub const ALL: [Self; 28] = [
        UniversalType::Boolean,
        UniversalType::Integer,
        UniversalType::BitString,
        UniversalType::OctetString,
        UniversalType::Null,
        UniversalType::ObjectIdentifier,
        UniversalType::ObjectDescriptor,
        UniversalType::InstanceOf,
        UniversalType::Real,
        UniversalType::Enumerated,
        UniversalType::EmbeddedPdv,
        UniversalType::Utf8String,
        UniversalType::RelativeOid,
        UniversalType::Sequence,
        UniversalType::Set,
        UniversalType::NumericString,
        UniversalType::PrintableString,
        UniversalType::TeletexString,
        UniversalType::VideotexString,
        UniversalType::Ia5String,
        UniversalType::UtcTime,
        UniversalType::GeneralizedTime,
        UniversalType::GraphicString,
        UniversalType::VisibleString,
        UniversalType::GeneralString,
        UniversalType::UniversalString,
        UniversalType::CharacterString,
        UniversalType::BmpString,
    ];

    /// Returns the type for a universal tag number.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|typ| typ.number() == number)
    }

    /// Returns the universal tag number of the type.
    pub const fn number(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for UniversalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            UniversalType::Boolean => "BOOLEAN",
            UniversalType::Integer => "INTEGER",
            UniversalType::BitString => "BIT STRING",
            UniversalType::OctetString => "OCTET STRING",
            UniversalType::Null => "NULL",
            UniversalType::ObjectIdentifier => "OBJECT IDENTIFIER",
            UniversalType::ObjectDescriptor => "ObjectDescriptor",
            UniversalType::InstanceOf => "INSTANCE OF",
            UniversalType::Real => "REAL",
            UniversalType::Enumerated => "ENUMERATED",
            UniversalType::EmbeddedPdv => "EMBEDDED PDV",
            UniversalType::Utf8String => "UTF8String",
            UniversalType::RelativeOid => "RELATIVE-OID",
            UniversalType::Sequence => "SEQUENCE",
            UniversalType::Set => "SET",
            UniversalType::NumericString => "NumericString",
            UniversalType::PrintableString => "PrintableString",
            UniversalType::TeletexString => "TeletexString",
            UniversalType::VideotexString => "VideotexString",
            UniversalType::Ia5String => "IA5String",
            UniversalType::UtcTime => "UTCTime",
            UniversalType::GeneralizedTime => "GeneralizedTime",
            UniversalType::GraphicString => "GraphicString",
            UniversalType::VisibleString => "VisibleString",
            UniversalType::GeneralString => "GeneralString",
            UniversalType::UniversalString => "UniversalString",
            UniversalType::CharacterString => "CHARACTER STRING",
            UniversalType::BmpString => "BMPString",
        })
    }
}


//------------ Directive -----------------------------------------------------

/// An instruction to a decoder in place of a type.
///
/// Schemas use these for fields whose type isn’t known up front or whose
/// content should not be interpreted at all.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Directive {
    /// Try each of a list of alternatives.
    Choice,

    /// Accept any value and decode it by its own tag.
    Any,

    /// Accept any value and keep its raw content octets.
    AnyRaw,

    /// Accept any value and skip over it.
    AnySkip,

    /// Accept any value and keep its complete DER encoding.
    AnyDer,
}

impl Directive {
    pub const ALL: [Self; 5] = [
        Directive::Choice,
        Directive::Any,
        Directive::AnyRaw,
        Directive::AnySkip,
        Directive::AnyDer,
    ];

    /// Returns the directive for its legacy code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|dir| dir.code() == code)
    }

    /// Returns the legacy code of the directive.
    ///
    /// These are negative so they can’t collide with tag numbers.
    pub const fn code(self) -> i32 {
        match self {
            Directive::Choice => -1,
            Directive::Any => -2,
            Directive::AnyRaw => -3,
            Directive::AnySkip => -4,
            Directive::AnyDer => -5,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Directive::Choice => "CHOICE",
            Directive::Any => "ANY",
            Directive::AnyRaw => "ANY (raw)",
            Directive::AnySkip => "ANY (skipped)",
            Directive::AnyDer => "ANY (DER)",
        })
    }
}


//------------ TypeCode ------------------------------------------------------

/// What a decoder should do with a field: a real tag or a directive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeCode {
    Universal(UniversalType),
    Directive(Directive),
}

impl TypeCode {
    /// Converts a code from the combined legacy integer space.
    ///
    /// Positive codes are universal tag numbers, negative codes are
    /// directives. Returns `None` for zero and anything unassigned.
    pub fn from_code(code: i32) -> Option<Self> {
        if code < 0 {
            Directive::from_code(code).map(TypeCode::Directive)
        }
        else {
            UniversalType::from_number(code as u32).map(TypeCode::Universal)
        }
    }

    /// Returns the code in the combined legacy integer space.
    pub const fn code(self) -> i32 {
        match self {
            TypeCode::Universal(typ) => typ.number() as i32,
            TypeCode::Directive(dir) => dir.code(),
        }
    }

    /// Returns whether this is a directive rather than a real tag.
    pub const fn is_directive(self) -> bool {
        matches!(self, TypeCode::Directive(_))
    }

    /// Returns the universal type if this is a real tag.
    pub const fn universal(self) -> Option<UniversalType> {
        match self {
            TypeCode::Universal(typ) => Some(typ),
            TypeCode::Directive(_) => None,
        }
    }
}

impl From<UniversalType> for TypeCode {
    fn from(typ: UniversalType) -> Self {
        TypeCode::Universal(typ)
    }
}

impl From<Directive> for TypeCode {
    fn from(dir: Directive) -> Self {
        TypeCode::Directive(dir)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TypeCode::Universal(typ) => fmt::Display::fmt(&typ, f),
            TypeCode::Directive(dir) => fmt::Display::fmt(&dir, f),
        }
    }
}


//============ Tests =========================================================
