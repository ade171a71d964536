//! Key classification and equality policy for the linked hash table engine.
//!
//! Keys are partitioned by *kind* into one of three bucket strategies
//! (string, number, general).  Classification is a pure predicate on the key
//! type, evaluated at insertion time and stored next to the cell so removal
//! routes to the same bucket without re-classifying.  The partition is
//! purely a performance path: lookup, insertion, and removal behave
//! identically regardless of which bucket a key lands in.

use std::hash::{Hash, Hasher};
use std::rc::Rc;

use fnv::FnvHasher;

/// Which internal bucket strategy a key routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// String-like keys: hashed directly over their bytes.
    Str,
    /// Number-like keys: hashed over their bit pattern.
    Num,
    /// Everything else: hashed through the key's own `Hash` impl (or the
    /// map's custom hash function).
    General,
}

/// A type usable as a map key or set element.
///
/// The provided defaults classify a key as [`KeyKind::General`]; the string
/// and integer impls below override them to opt into the fast buckets.
/// Implementations must keep `kind` consistent with the accessor it selects:
/// a `Str` key returns `Some` from `as_str`, a `Num` key from `num_bits`.
pub trait MapKey: Eq + Hash + Clone {
    /// Classifies the key; a pure function of the key type.
    fn kind(&self) -> KeyKind {
        KeyKind::General
    }

    /// The key's string form, for [`KeyKind::Str`] keys.
    fn as_str(&self) -> Option<&str> {
        None
    }

    /// The key's bit pattern, for [`KeyKind::Num`] keys.
    fn num_bits(&self) -> Option<u64> {
        None
    }
}

macro_rules! impl_str_key {
    ($($ty:ty),+) => {$(
        impl MapKey for $ty {
            fn kind(&self) -> KeyKind {
                KeyKind::Str
            }
            fn as_str(&self) -> Option<&str> {
                Some(self)
            }
        }
    )+};
}

impl_str_key!(String, Box<str>, Rc<str>);

impl<'a> MapKey for &'a str {
    fn kind(&self) -> KeyKind {
        KeyKind::Str
    }
    fn as_str(&self) -> Option<&str> {
        Some(self)
    }
}

macro_rules! impl_num_key {
    ($($ty:ty),+) => {$(
        impl MapKey for $ty {
            fn kind(&self) -> KeyKind {
                KeyKind::Num
            }
            fn num_bits(&self) -> Option<u64> {
                Some(*self as i64 as u64)
            }
        }
    )+};
}

impl_num_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_general_key {
    ($($ty:ty),+) => {$(
        impl MapKey for $ty {}
    )+};
}

impl_general_key!(bool, char, ());

/// Computes a key's hash and bucket kind under the natural policy.
///
/// Str and Num keys bypass their `Hash` impl and hash the raw string bytes
/// or bit pattern with FNV, matching the source runtime's dedicated
/// string/number tables.  A key whose `kind` disagrees with its accessors
/// degrades safely to the general path.
pub(crate) fn natural_hash<K: MapKey>(key: &K) -> (u64, KeyKind) {
    match key.kind() {
        KeyKind::Str => {
            if let Some(s) = key.as_str() {
                let mut hasher = FnvHasher::default();
                hasher.write(s.as_bytes());
                return (hasher.finish(), KeyKind::Str);
            }
        }
        KeyKind::Num => {
            if let Some(bits) = key.num_bits() {
                let mut hasher = FnvHasher::default();
                hasher.write_u64(bits);
                return (hasher.finish(), KeyKind::Num);
            }
        }
        KeyKind::General => {}
    }
    let mut hasher = FnvHasher::default();
    key.hash(&mut hasher);
    (hasher.finish(), KeyKind::General)
}

/// A custom equality/hash configuration for a map or set.
///
/// Consistency is required: `equals(a, b)` implies `hash(a) == hash(b)`.
/// Without a validator, every key is considered valid; install one with
/// [`Equality::with_validator`] to make `get`/`contains`/`remove` answer
/// "not found" immediately for keys the configuration cannot handle,
/// without invoking `equals` or `hash` on them.
pub struct Equality<K> {
    equals: Rc<dyn Fn(&K, &K) -> bool>,
    hash: Rc<dyn Fn(&K) -> u64>,
    is_valid_key: Option<Rc<dyn Fn(&K) -> bool>>,
}

impl<K> Clone for Equality<K> {
    fn clone(&self) -> Self {
        Self {
            equals: Rc::clone(&self.equals),
            hash: Rc::clone(&self.hash),
            is_valid_key: self.is_valid_key.clone(),
        }
    }
}

impl<K> Equality<K> {
    /// Builds a policy from an equality predicate and a matching hash.
    pub fn new<E, H>(equals: E, hash: H) -> Self
    where
        E: Fn(&K, &K) -> bool + 'static,
        H: Fn(&K) -> u64 + 'static,
    {
        Self {
            equals: Rc::new(equals),
            hash: Rc::new(hash),
            is_valid_key: None,
        }
    }

    /// Adds a key validator gating lookups.
    pub fn with_validator<F>(mut self, is_valid_key: F) -> Self
    where
        F: Fn(&K) -> bool + 'static,
    {
        self.is_valid_key = Some(Rc::new(is_valid_key));
        self
    }

    pub(crate) fn key_equals(&self, a: &K, b: &K) -> bool {
        (self.equals)(a, b)
    }

    pub(crate) fn hash_of(&self, key: &K) -> u64 {
        (self.hash)(key)
    }

    pub(crate) fn accepts(&self, key: &K) -> bool {
        match &self.is_valid_key {
            Some(valid) => valid(key),
            None => true,
        }
    }
}

/// How a map resolves key identity: the key type's own `Eq`/`Hash` (with
/// the kind partition), or a caller-supplied [`Equality`] (all keys routed
/// to the general bucket).
pub(crate) enum KeyPolicy<K> {
    Natural,
    Custom(Equality<K>),
}

impl<K> Clone for KeyPolicy<K> {
    fn clone(&self) -> Self {
        match self {
            KeyPolicy::Natural => KeyPolicy::Natural,
            KeyPolicy::Custom(eq) => KeyPolicy::Custom(eq.clone()),
        }
    }
}
