//! A bidirectional table of object identifier names.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::collections::HashMap;
use std::slice;
use crate::error::InvalidInput;


//------------ OidRegistry ---------------------------------------------------

/// A frozen mapping between names and object identifiers.
///
/// The registry is built once from an ordered list of name and object
/// identifier pairs and cannot be changed afterwards. Lookups in both
/// directions are hash map lookups.
///
/// # Duplicates
///
/// The list may contain the same name more than once. In this case, the
/// entry stays at the position where the name first appeared but takes the
/// object identifier given with its last appearance.
///
/// The list may also contain several names for the same object identifier.
/// Reverse lookups then return the name of the entry that comes first in
/// the registry’s order. This is not necessarily the most common name for
/// the identifier, but it is always the same one.
///
/// # Pass-through
///
/// The [`name_to_oid`] and [`oid_to_name`] methods return their argument
/// unchanged if it isn’t known. This way, an already numeric identifier can
/// be fed through the same path as a name. Use [`get_oid`] and [`get_name`]
/// to find out whether there was a match.
///
/// [`name_to_oid`]: #method.name_to_oid
/// [`oid_to_name`]: #method.oid_to_name
/// [`get_oid`]: #method.get_oid
/// [`get_name`]: #method.get_name
#[derive(Clone, Debug)]
pub struct OidRegistry {
    /// The entries in registry order.
    entries: Vec<Entry>,

    /// The index of the entry for each name.
    by_name: HashMap<Box<str>, usize>,

    /// The index of the first entry with each object identifier.
    by_oid: HashMap<Box<str>, usize>,
}

impl OidRegistry {
    /// Creates a registry from an ordered sequence of pairs.
    ///
    /// Each pair consists of a name and its object identifier in dotted
    /// decimal notation. The identifier is not checked for being well
    /// formed.
    ///
    /// Returns an error if any name or identifier is empty.
    pub fn new<I, N, O>(pairs: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = (N, O)>,
        N: AsRef<str>,
        O: AsRef<str>,
    {
        let mut checked = Vec::new();
        for (name, oid) in pairs {
            let (name, oid) = (name.as_ref(), oid.as_ref());
            if name.is_empty() || oid.is_empty() {
                xerr!(return Err(InvalidInput::entry(name, oid)))
            }
            checked.push((Box::from(name), Box::from(oid)));
        }
        Ok(Self::build(checked))
    }

    /// Creates a registry from pairs known to be non-empty.
    pub(super) fn build<I>(pairs: I) -> Self
    where I: IntoIterator<Item = (Box<str>, Box<str>)> {
        let mut entries: Vec<Entry> = Vec::new();
        let mut by_name: HashMap<Box<str>, usize> = HashMap::new();
        for (name, oid) in pairs {
            debug_assert!(!name.is_empty() && !oid.is_empty());
            match by_name.get(&name).copied() {
                Some(idx) => {
                    #[cfg(feature = "log")]
                    log::trace!(
                        "OID name {} redefined from {} to {}",
                        name, entries[idx].oid, oid
                    );
                    entries[idx].oid = oid;
                }
                None => {
                    by_name.insert(name.clone(), entries.len());
                    entries.push(Entry { name, oid });
                }
            }
        }

        // Only now that all redefinitions are resolved can we tell which
        // entry comes first for each identifier.
        let mut by_oid: HashMap<Box<str>, usize> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_oid.entry(entry.oid.clone()).or_insert(idx);
        }

        OidRegistry { entries, by_name, by_oid }
    }

    /// Returns the object identifier registered for `name`.
    pub fn get_oid(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(|&idx| self.entries[idx].oid())
    }

    /// Returns the first name registered for `oid`.
    pub fn get_name(&self, oid: &str) -> Option<&str> {
        self.by_oid.get(oid).map(|&idx| self.entries[idx].name())
    }

    /// Resolves a name into its object identifier.
    ///
    /// Returns `text` itself if it isn’t a registered name.
    pub fn name_to_oid<'a>(&'a self, text: &'a str) -> &'a str {
        self.get_oid(text).unwrap_or(text)
    }

    /// Resolves an object identifier into its first registered name.
    ///
    /// Returns `oid` itself if no name is registered for it.
    pub fn oid_to_name<'a>(&'a self, oid: &'a str) -> &'a str {
        self.get_name(oid).unwrap_or(oid)
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in registry order.
    pub fn iter(&self) -> slice::Iter<Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a OidRegistry {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


//------------ Entry ---------------------------------------------------------

/// A name and the object identifier it stands for.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    name: Box<str>,
    oid: Box<str>,
}

impl Entry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn oid(&self) -> &str {
        &self.oid
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> OidRegistry {
        OidRegistry::new(vec![
            ("cn", "2.5.4.3"),
            ("ts", "1.3.6.1.5.5.7.3.8"),
            ("commonName", "2.5.4.3"),
            ("ts-kp", "1.3.6.1.5.5.7.3.8"),
            ("ts", "1.3.6.1.5.5.7.48.3"),
            ("cn", "2.5.4.3"),
        ]).unwrap()
    }

    #[test]
    fn forward() {
        let reg = sample();
        assert_eq!(reg.get_oid("cn"), Some("2.5.4.3"));
        assert_eq!(reg.get_oid("commonName"), Some("2.5.4.3"));
        assert_eq!(reg.get_oid("CN"), None);
        assert_eq!(reg.name_to_oid("cn"), "2.5.4.3");
        assert_eq!(reg.name_to_oid("1.2.3"), "1.2.3");
    }

    #[test]
    fn last_definition_wins() {
        let reg = sample();
        assert_eq!(reg.get_oid("ts"), Some("1.3.6.1.5.5.7.48.3"));
        assert_eq!(reg.len(), 4);
    }

    #[test]
    fn first_name_wins() {
        let reg = sample();
        assert_eq!(reg.oid_to_name("2.5.4.3"), "cn");

        // "ts" was redefined, so only "ts-kp" is left for its first value.
        assert_eq!(reg.oid_to_name("1.3.6.1.5.5.7.3.8"), "ts-kp");

        // ... and "ts" keeps its original position for the new value.
        assert_eq!(reg.oid_to_name("1.3.6.1.5.5.7.48.3"), "ts");
        assert_eq!(reg.get_name("9.9.9"), None);
        assert_eq!(reg.oid_to_name("9.9.9"), "9.9.9");
    }

    #[test]
    fn order() {
        let reg = sample();
        let names: Vec<_> = reg.iter().map(Entry::name).collect();
        assert_eq!(names, ["cn", "ts", "commonName", "ts-kp"]);
        let oids: Vec<_> = (&reg).into_iter().map(Entry::oid).collect();
        assert_eq!(
            oids,
            ["2.5.4.3", "1.3.6.1.5.5.7.48.3", "2.5.4.3", "1.3.6.1.5.5.7.3.8"]
        );
    }

    #[test]
    fn empty_entries() {
        assert_eq!(
            OidRegistry::new(vec![("cn", "2.5.4.3"), ("", "2.5.4.6")])
                .unwrap_err(),
            InvalidInput::entry("", "2.5.4.6")
        );
        assert!(OidRegistry::new(vec![("cn", "")]).is_err());

        let reg = OidRegistry::new(Vec::<(String, String)>::new()).unwrap();
        assert!(reg.is_empty());
        assert_eq!(reg.name_to_oid("cn"), "cn");
    }

    #[test]
    fn owned_pairs() {
        let reg = OidRegistry::new(
            (1..4).map(|i| (format!("arc{}", i), format!("1.2.{}", i)))
        ).unwrap();
        assert_eq!(reg.name_to_oid("arc2"), "1.2.2");
        assert_eq!(reg.oid_to_name("1.2.3"), "arc3");
    }
}
