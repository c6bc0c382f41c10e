//! Names for object identifiers.
//!
//! Object identifiers are globally unique, hierarchical values used to
//! identify algorithms, attribute types, extensions and all sorts of other
//! things. They are written as a sequence of integers separated by dots,
//! such as ‘1.2.840.113549.1.1.1’, but most of the time people refer to
//! them by a name like ‘rsaEncryption’.
//!
//! This module translates between the two. The object identifiers are
//! treated as opaque strings: they are neither parsed nor checked.
//!
//! The [`name_to_oid`] and [`oid_to_name`] functions use the crate’s
//! built-in table which covers the common PKIX, PKCS and CMS identifiers.
//! If you need different names, build your own [`OidRegistry`].

pub use self::registry::{Entry, OidRegistry};

use lazy_static::lazy_static;

mod registry;
mod table;


//------------ The Built-in Registry -----------------------------------------

lazy_static! {
    static ref BUILTIN: OidRegistry = init_builtin();
}

fn init_builtin() -> OidRegistry {
    let res = OidRegistry::build(
        table::ENTRIES.iter().map(|&(name, oid)| (name.into(), oid.into()))
    );
    #[cfg(feature = "log")]
    log::debug!(
        "built-in OID registry ready with {} names from {} entries",
        res.len(), table::ENTRIES.len()
    );
    res
}

/// Returns the built-in registry.
///
/// The registry is built the first time any of the built-in lookups is
/// used. After that it can be shared freely between threads.
pub fn registry() -> &'static OidRegistry {
    &BUILTIN
}

/// Resolves a name into its object identifier using the built-in table.
///
/// Returns `text` unchanged if it isn’t a known name. Since object
/// identifiers aren’t names, this means they simply pass through.
pub fn name_to_oid(text: &str) -> &str {
    registry().name_to_oid(text)
}

/// Resolves an object identifier into a name using the built-in table.
///
/// If there are several names for the identifier, the one defined first
/// is returned. Returns `oid` unchanged if there is no name.
pub fn oid_to_name(oid: &str) -> &str {
    registry().oid_to_name(oid)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_size() {
        assert_eq!(table::ENTRIES.len(), 229);
        assert_eq!(registry().len(), 204);
    }

    #[test]
    fn no_empty_entries() {
        for entry in registry() {
            assert!(!entry.name().is_empty());
            assert!(!entry.oid().is_empty());
        }
    }

    #[test]
    fn known_names() {
        assert_eq!(name_to_oid("sha256"), "2.16.840.1.101.3.4.2.1");
        assert_eq!(name_to_oid("commonName"), "2.5.4.3");
        assert_eq!(name_to_oid("rsaEncryption"), "1.2.840.113549.1.1.1");
        assert_eq!(name_to_oid("emailAddress"), "1.2.840.113549.1.9.1");
        assert_eq!(name_to_oid("s/mime"), "1.2.840.113549.1.9.15");
        assert_eq!(
            name_to_oid("domainComponent"), "0.9.2342.19200300.100.1.25"
        );
    }

    #[test]
    fn unknown_names() {
        assert_eq!(name_to_oid("not-a-known-name"), "not-a-known-name");
        assert_eq!(name_to_oid(""), "");
        assert_eq!(name_to_oid("SHA256"), "SHA256");
        assert_eq!(name_to_oid("2.5.4.3"), "2.5.4.3");
    }

    #[test]
    fn redefined_names() {
        assert_eq!(name_to_oid("md2"), "1.2.840.113549.2.2");
        assert_eq!(name_to_oid("timeStamping"), "1.3.6.1.5.5.7.48.3");

        // The earlier values have lost their name ...
        assert_eq!(oid_to_name("1.3.14.7.2.2.1"), "1.3.14.7.2.2.1");
        assert_eq!(oid_to_name("1.3.6.1.5.5.7.3.8"), "kp-timeStamping");

        // ... and the later ones go to the position of the first definition.
        assert_eq!(oid_to_name("1.2.840.113549.2.2"), "md2");
        assert_eq!(oid_to_name("1.3.6.1.5.5.7.48.3"), "timeStamping");
    }

    #[test]
    fn known_oids() {
        assert_eq!(oid_to_name("2.5.4.3"), "commonName");
        assert_eq!(oid_to_name("2.16.840.1.101.3.4.2.1"), "sha256");
        assert_eq!(oid_to_name("2.5.4.10"), "organization");
        assert_eq!(oid_to_name("2.5.4.7"), "locality");
        assert_eq!(oid_to_name("1.3.6.1.5.5.7.3.1"), "serverAuth");
        assert_eq!(oid_to_name("1.2.840.10045.4.1"), "SHA1withECDSA");
        assert_eq!(oid_to_name("1.2.840.10040.4.3"), "SHA1withDSA");
        assert_eq!(oid_to_name("1.2.840.10045.3.1.7"), "secp256r1");
        assert_eq!(oid_to_name("1.3.6.1.5.5.7.48.1"), "ocsp");
        assert_eq!(oid_to_name("1.3.6.1.5.5.7.1.1"), "authorityInfoAccess");
        assert_eq!(oid_to_name("2.5.4.97"), "organizationIdentifier");
    }

    #[test]
    fn unknown_oids() {
        assert_eq!(oid_to_name("9.9.9"), "9.9.9");
        assert_eq!(oid_to_name("commonName"), "commonName");
    }

    #[test]
    fn pass_through_is_fixed_point() {
        for text in &["not-a-known-name", "1.2.3.4", "sha256", "pkix"] {
            let once = name_to_oid(text);
            assert_eq!(name_to_oid(once), once);
        }
    }

    #[test]
    fn synonyms_resolve_to_first_name() {
        let reg = registry();
        for (idx, first) in reg.iter().enumerate() {
            for later in reg.iter().skip(idx + 1) {
                if later.oid() == first.oid() {
                    assert_eq!(
                        oid_to_name(name_to_oid(later.name())),
                        oid_to_name(name_to_oid(first.name()))
                    );
                    assert_eq!(
                        oid_to_name(name_to_oid(later.name())),
                        first.name()
                    );
                }
            }
        }
        assert_eq!(
            oid_to_name(name_to_oid("organizationName")),
            oid_to_name(name_to_oid("organization"))
        );
        assert_eq!(oid_to_name(name_to_oid("OCSP")), "ocsp");
        assert_eq!(oid_to_name(name_to_oid("prime256v1")), "secp256r1");
    }

    #[test]
    fn every_name_round_trips() {
        for entry in registry() {
            assert_eq!(name_to_oid(entry.name()), entry.oid());
            assert_eq!(name_to_oid(oid_to_name(entry.oid())), entry.oid());
        }
    }
}
