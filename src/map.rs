//! Insertion-ordered hash map with partitioned key buckets.
//!
//! [`LinkedHashMap`] keeps one arena of doubly linked cells (the insertion
//! order) and three hash tables of cell pointers, one per [`KeyKind`].
//! String and number keys hash over their raw bytes or bit pattern; every
//! other key goes through its `Hash` impl.  A map built with a custom
//! [`Equality`] routes all keys to the general table and uses the supplied
//! predicate and hash instead.
//!
//! # Ordering rules
//! * Inserting a new key appends it to the end of the order.
//! * Overwriting an existing key's value keeps its position and does not
//!   count as a structural change, so live cursors survive it.
//! * Removing a key and inserting it again moves it to the end.
//!
//! Like [`crate::list::List`], the handle has reference semantics: `clone`
//! aliases the same map.

use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::rc::Rc;

use hashbrown::HashTable;

use crate::arena::{Arena, Cell, Ptr};
use crate::cursor::{Cursor, Sequence};
use crate::error::{CollectionError, Result};
use crate::key::{natural_hash, Equality, KeyKind, KeyPolicy, MapKey};

struct RawMap<K, V> {
    cells: Arena<K, V>,
    head: Ptr,
    tail: Ptr,
    strings: HashTable<Ptr>,
    numbers: HashTable<Ptr>,
    general: HashTable<Ptr>,
    policy: KeyPolicy<K>,
    mod_count: u64,
}

impl<K: MapKey, V> RawMap<K, V> {
    fn new(policy: KeyPolicy<K>) -> Self {
        Self {
            cells: Arena::new(),
            head: Ptr::NULL,
            tail: Ptr::NULL,
            strings: HashTable::new(),
            numbers: HashTable::new(),
            general: HashTable::new(),
            policy,
            mod_count: 0,
        }
    }

    fn hash_and_kind(&self, key: &K) -> (u64, KeyKind) {
        match &self.policy {
            KeyPolicy::Natural => natural_hash(key),
            KeyPolicy::Custom(eq) => (eq.hash_of(key), KeyKind::General),
        }
    }

    fn accepts(&self, key: &K) -> bool {
        match &self.policy {
            KeyPolicy::Natural => true,
            KeyPolicy::Custom(eq) => eq.accepts(key),
        }
    }

    fn keys_equal(&self, a: &K, b: &K) -> bool {
        match &self.policy {
            KeyPolicy::Natural => a == b,
            KeyPolicy::Custom(eq) => eq.key_equals(a, b),
        }
    }

    fn table(&self, kind: KeyKind) -> &HashTable<Ptr> {
        match kind {
            KeyKind::Str => &self.strings,
            KeyKind::Num => &self.numbers,
            KeyKind::General => &self.general,
        }
    }

    fn find_ptr(&self, key: &K, hash: u64, kind: KeyKind) -> Option<Ptr> {
        self.table(kind)
            .find(hash, |&p| self.keys_equal(key, &self.cells.cell(p).key))
            .copied()
    }

    /// Lookup with the validator gate applied.
    fn get_ptr(&self, key: &K) -> Option<Ptr> {
        if !self.accepts(key) {
            return None;
        }
        let (hash, kind) = self.hash_and_kind(key);
        self.find_ptr(key, hash, kind)
    }

    /// Inserts or overwrites.  Only a genuinely new key appends a cell and
    /// counts as a structural change; the validator is not consulted.
    fn insert_raw(&mut self, key: K, value: V) -> Option<V> {
        let (hash, kind) = self.hash_and_kind(&key);
        if let Some(ptr) = self.find_ptr(&key, hash, kind) {
            let cell = self.cells.cell_mut(ptr);
            return Some(std::mem::replace(&mut cell.value, value));
        }
        let prev_tail = self.tail;
        let ptr = self.cells.alloc(Cell {
            key,
            value,
            hash,
            kind,
            prev: prev_tail,
            next: Ptr::NULL,
        });
        if prev_tail.is_null() {
            self.head = ptr;
        } else {
            self.cells.cell_mut(prev_tail).next = ptr;
        }
        self.tail = ptr;
        // Disjoint field borrows: the rehash closure reads cell hashes
        // while the table itself is being mutated.
        let cells = &self.cells;
        let table = match kind {
            KeyKind::Str => &mut self.strings,
            KeyKind::Num => &mut self.numbers,
            KeyKind::General => &mut self.general,
        };
        table.insert_unique(hash, ptr, |&p| cells.cell(p).hash);
        self.mod_count += 1;
        None
    }

    fn remove_raw(&mut self, key: &K) -> Option<V> {
        if !self.accepts(key) {
            return None;
        }
        let (hash, kind) = self.hash_and_kind(key);
        let ptr = self.find_ptr(key, hash, kind)?;
        let table = match kind {
            KeyKind::Str => &mut self.strings,
            KeyKind::Num => &mut self.numbers,
            KeyKind::General => &mut self.general,
        };
        if let Ok(entry) = table.find_entry(hash, |&p| p == ptr) {
            entry.remove();
        }
        self.unlink(ptr);
        let cell = self.cells.free(ptr);
        self.mod_count += 1;
        Some(cell.value)
    }

    fn unlink(&mut self, ptr: Ptr) {
        let (prev, next) = {
            let cell = self.cells.cell(ptr);
            (cell.prev, cell.next)
        };
        if prev.is_null() {
            self.head = next;
        } else {
            self.cells.cell_mut(prev).next = next;
        }
        if next.is_null() {
            self.tail = prev;
        } else {
            self.cells.cell_mut(next).prev = prev;
        }
    }

    fn clear(&mut self) {
        if self.cells.len() == 0 {
            return;
        }
        self.cells.clear();
        self.head = Ptr::NULL;
        self.tail = Ptr::NULL;
        self.strings.clear();
        self.numbers.clear();
        self.general.clear();
        self.mod_count += 1;
    }
}

/// An insertion-ordered map handle with reference semantics.
pub struct LinkedHashMap<K, V> {
    inner: Rc<RefCell<RawMap<K, V>>>,
}

impl<K, V> Clone for LinkedHashMap<K, V> {
    fn clone(&self) -> Self {
        LinkedHashMap {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K: MapKey, V: Clone> LinkedHashMap<K, V> {
    fn with_policy(policy: KeyPolicy<K>) -> Self {
        LinkedHashMap {
            inner: Rc::new(RefCell::new(RawMap::new(policy))),
        }
    }

    /// Creates an empty map using the key type's own equality and hash.
    pub fn new() -> Self {
        Self::with_policy(KeyPolicy::Natural)
    }

    /// Creates an empty map resolving key identity through `equality`.
    pub fn with_equality(equality: Equality<K>) -> Self {
        Self::with_policy(KeyPolicy::Custom(equality))
    }

    /// An empty map with the same key policy as `self`.
    pub(crate) fn new_like(&self) -> Self {
        Self::with_policy(self.inner.borrow().policy.clone())
    }

    /// Creates a map from key-value pairs; later duplicates overwrite
    /// earlier values without moving the key.
    pub fn from_entries<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let map = Self::new();
        {
            let mut raw = map.inner.borrow_mut();
            for (key, value) in entries {
                raw.insert_raw(key, value);
            }
        }
        map
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `self` and `other` are the same map object.
    pub fn ptr_eq(&self, other: &LinkedHashMap<K, V>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The value for `key`, or `None` when absent or rejected by the
    /// map's key validator.
    pub fn get(&self, key: &K) -> Option<V> {
        let raw = self.inner.borrow();
        raw.get_ptr(key).map(|ptr| raw.cells.cell(ptr).value.clone())
    }

    /// The stored key equal to `key` under the map's equality, which may
    /// differ from `key` itself under a custom policy.
    pub(crate) fn get_key(&self, key: &K) -> Option<K> {
        let raw = self.inner.borrow();
        raw.get_ptr(key).map(|ptr| raw.cells.cell(ptr).key.clone())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.borrow().get_ptr(key).is_some()
    }

    /// Whether some entry holds `value`; a linear walk in insertion order.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let raw = self.inner.borrow();
        let mut ptr = raw.head;
        while !ptr.is_null() {
            let cell = raw.cells.cell(ptr);
            if cell.value == *value {
                return true;
            }
            ptr = cell.next;
        }
        false
    }

    /// Inserts `key` with `value`, returning the previous value when the
    /// key was already present.  Overwriting keeps the key's position and
    /// its original key object; inserting a new key appends it.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.borrow_mut().insert_raw(key, value)
    }

    /// The value for `key`, computing and inserting one with `if_absent`
    /// when missing.
    ///
    /// `if_absent` is user code; if it mutates this map, the late insert
    /// is abandoned with [`CollectionError::ConcurrentModification`].
    pub fn put_if_absent<F: FnOnce() -> V>(&self, key: K, if_absent: F) -> Result<V> {
        let start_mod = {
            let raw = self.inner.borrow();
            if let Some(ptr) = raw.get_ptr(&key) {
                return Ok(raw.cells.cell(ptr).value.clone());
            }
            raw.mod_count
        };
        let value = if_absent();
        let mut raw = self.inner.borrow_mut();
        if raw.mod_count != start_mod {
            return Err(CollectionError::ConcurrentModification);
        }
        raw.insert_raw(key, value.clone());
        Ok(value)
    }

    /// Replaces the value for an existing `key` with `update(old)`,
    /// returning the new value.  Fails with
    /// [`CollectionError::InvalidArgument`] when the key is absent.
    pub fn update<F: FnOnce(V) -> V>(&self, key: &K, update: F) -> Result<V> {
        let (old, start_mod) = {
            let raw = self.inner.borrow();
            match raw.get_ptr(key) {
                Some(ptr) => (raw.cells.cell(ptr).value.clone(), raw.mod_count),
                None => {
                    return Err(CollectionError::InvalidArgument {
                        name: "key",
                        message: "key not in map".to_string(),
                    })
                }
            }
        };
        let new = update(old);
        let mut raw = self.inner.borrow_mut();
        if raw.mod_count != start_mod {
            return Err(CollectionError::ConcurrentModification);
        }
        match raw.get_ptr(key) {
            Some(ptr) => {
                raw.cells.cell_mut(ptr).value = new.clone();
                Ok(new)
            }
            None => Err(CollectionError::ConcurrentModification),
        }
    }

    /// Removes `key`, returning its value when it was present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.borrow_mut().remove_raw(key)
    }

    /// Inserts every entry of `other`, in its order.
    pub fn add_all(&self, other: &LinkedHashMap<K, V>) -> Result<()> {
        let mut cur = other.entries().cursor();
        while cur.move_next()? {
            if let Some((key, value)) = cur.current() {
                self.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    /// The keys, in insertion order.
    pub fn keys(&self) -> Keys<K, V> {
        Keys { map: self.clone() }
    }

    /// The values, in insertion order of their keys.
    pub fn values(&self) -> Values<K, V> {
        Values { map: self.clone() }
    }

    /// The key-value pairs, in insertion order.
    pub fn entries(&self) -> Entries<K, V> {
        Entries { map: self.clone() }
    }

    /// Invokes `action` for every entry in insertion order; mutation from
    /// `action` fails the walk with
    /// [`CollectionError::ConcurrentModification`].
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut action: F) -> Result<()> {
        let mut cur = self.entries().cursor();
        while cur.move_next()? {
            if let Some((key, value)) = cur.current() {
                action(key, value);
            }
        }
        Ok(())
    }

    /// A new map with the same keys in the same order and values produced
    /// by `transform`.  The result uses natural key identity.
    pub fn map_values<W, F>(&self, mut transform: F) -> Result<LinkedHashMap<K, W>>
    where
        W: Clone,
        F: FnMut(&K, &V) -> W,
    {
        let out = LinkedHashMap::new();
        let mut cur = self.entries().cursor();
        while cur.move_next()? {
            if let Some((key, value)) = cur.current() {
                out.insert(key.clone(), transform(key, value));
            }
        }
        Ok(out)
    }

    /// Copies the entries into a vector, in insertion order.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        let raw = self.inner.borrow();
        let mut out = Vec::with_capacity(raw.cells.len());
        let mut ptr = raw.head;
        while !ptr.is_null() {
            let cell = raw.cells.cell(ptr);
            out.push((cell.key.clone(), cell.value.clone()));
            ptr = cell.next;
        }
        out
    }
}

impl<K: MapKey, V: Clone> Default for LinkedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: MapKey + Debug, V: Clone + Debug> Debug for LinkedHashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.inner.borrow();
        let mut map = f.debug_map();
        let mut ptr = raw.head;
        while !ptr.is_null() {
            let cell = raw.cells.cell(ptr);
            map.entry(&cell.key, &cell.value);
            ptr = cell.next;
        }
        map.finish()
    }
}

// --- Map views ---

macro_rules! map_view {
    ($seq:ident, $cursor:ident, $item:ty, |$cell:ident| $project:expr) => {
        pub struct $seq<K, V> {
            map: LinkedHashMap<K, V>,
        }

        impl<K, V> Clone for $seq<K, V> {
            fn clone(&self) -> Self {
                Self {
                    map: self.map.clone(),
                }
            }
        }

        impl<K: MapKey, V: Clone> Sequence for $seq<K, V> {
            type Item = $item;
            type Cursor = $cursor<K, V>;

            fn cursor(&self) -> Self::Cursor {
                let raw = self.map.inner.borrow();
                $cursor {
                    map: self.map.clone(),
                    mod_count: raw.mod_count,
                    next: raw.head,
                    current: None,
                }
            }
        }

        pub struct $cursor<K, V> {
            map: LinkedHashMap<K, V>,
            mod_count: u64,
            next: Ptr,
            current: Option<$item>,
        }

        impl<K: MapKey, V: Clone> Cursor for $cursor<K, V> {
            type Item = $item;

            fn move_next(&mut self) -> Result<bool> {
                let raw = self.map.inner.borrow();
                if raw.mod_count != self.mod_count {
                    return Err(CollectionError::ConcurrentModification);
                }
                if self.next.is_null() {
                    return Ok(false);
                }
                let $cell = raw.cells.cell(self.next);
                self.current = Some($project);
                self.next = $cell.next;
                Ok(true)
            }

            fn current(&self) -> Option<&$item> {
                self.current.as_ref()
            }
        }
    };
}

map_view!(Keys, KeysCursor, K, |cell| cell.key.clone());
map_view!(Values, ValuesCursor, V, |cell| cell.value.clone());
map_view!(Entries, EntriesCursor, (K, V), |cell| (
    cell.key.clone(),
    cell.value.clone()
));

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHasher;
    use std::hash::Hasher;

    fn lowercase_equality() -> Equality<String> {
        Equality::new(
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
            |k: &String| {
                let mut h = FnvHasher::default();
                h.write(k.to_ascii_lowercase().as_bytes());
                h.finish()
            },
        )
    }

    #[test]
    fn test_insertion_order_preserved() {
        let map = LinkedHashMap::new();
        map.insert("c".to_string(), 3);
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        assert_eq!(
            map.keys().to_list().unwrap().to_vec(),
            vec!["c".to_string(), "a".to_string(), "b".to_string()]
        );
        assert_eq!(map.values().to_list().unwrap().to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_overwrite_keeps_position_remove_reinsert_moves_to_end() {
        let map = LinkedHashMap::new();
        map.insert("x".to_string(), 1);
        map.insert("y".to_string(), 2);
        // Overwrite: position unchanged.
        assert_eq!(map.insert("x".to_string(), 10), Some(1));
        assert_eq!(
            map.keys().to_list().unwrap().to_vec(),
            vec!["x".to_string(), "y".to_string()]
        );
        // Remove then reinsert: appended.
        assert_eq!(map.remove(&"x".to_string()), Some(10));
        assert_eq!(map.insert("x".to_string(), 3), None);
        assert_eq!(
            map.keys().to_list().unwrap().to_vec(),
            vec!["y".to_string(), "x".to_string()]
        );
        assert_eq!(map.values().to_list().unwrap().to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_value_overwrite_does_not_invalidate_cursors() {
        let map = LinkedHashMap::new();
        map.insert(1i64, "a");
        map.insert(2i64, "b");
        map.insert(3i64, "c");
        let mut cur = map.entries().cursor();
        assert!(cur.move_next().unwrap());
        map.insert(3i64, "z");
        assert!(cur.move_next().unwrap());
        assert!(cur.move_next().unwrap());
        assert_eq!(cur.current(), Some(&(3i64, "z")));
    }

    #[test]
    fn test_structural_change_fails_cursor() {
        let map = LinkedHashMap::new();
        map.insert(1i64, 1);
        map.insert(2i64, 2);

        let mut cur = map.keys().cursor();
        assert!(cur.move_next().unwrap());
        map.remove(&1i64);
        assert_eq!(
            cur.move_next(),
            Err(CollectionError::ConcurrentModification)
        );

        let mut cur = map.keys().cursor();
        assert!(cur.move_next().unwrap());
        map.clear();
        assert_eq!(
            cur.move_next(),
            Err(CollectionError::ConcurrentModification)
        );
    }

    #[test]
    fn test_get_contains_remove() {
        let map = LinkedHashMap::new();
        map.insert("a".to_string(), 1);
        assert_eq!(map.get(&"a".to_string()), Some(1));
        assert_eq!(map.get(&"b".to_string()), None);
        assert!(map.contains_key(&"a".to_string()));
        assert!(map.contains_value(&1));
        assert!(!map.contains_value(&2));
        assert_eq!(map.remove(&"a".to_string()), Some(1));
        assert_eq!(map.remove(&"a".to_string()), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_key_kinds_share_one_map_behavior() {
        // The bucket partition is invisible: each kind supports the same
        // operations with the same ordering rules.
        let strings = LinkedHashMap::new();
        strings.insert("k".to_string(), 1);
        let numbers = LinkedHashMap::new();
        numbers.insert(42i64, 1);
        let general = LinkedHashMap::new();
        general.insert(true, 1);

        assert_eq!(strings.get(&"k".to_string()), Some(1));
        assert_eq!(numbers.get(&42i64), Some(1));
        assert_eq!(general.get(&true), Some(1));
        assert_eq!(strings.remove(&"k".to_string()), Some(1));
        assert_eq!(numbers.remove(&42i64), Some(1));
        assert_eq!(general.remove(&true), Some(1));
    }

    #[test]
    fn test_put_if_absent() {
        let map = LinkedHashMap::new();
        map.insert("a".to_string(), 1);
        // Present: the supplier must not run.
        let value = map
            .put_if_absent("a".to_string(), || panic!("supplier invoked"))
            .unwrap();
        assert_eq!(value, 1);
        // Absent: computed, stored, returned.
        assert_eq!(map.put_if_absent("b".to_string(), || 2).unwrap(), 2);
        assert_eq!(map.get(&"b".to_string()), Some(2));
    }

    #[test]
    fn test_put_if_absent_detects_reentrant_mutation() {
        let map = LinkedHashMap::new();
        let alias = map.clone();
        let result = map.put_if_absent("a".to_string(), || {
            alias.insert("b".to_string(), 9);
            1
        });
        assert_eq!(result, Err(CollectionError::ConcurrentModification));
        // The late insert was abandoned.
        assert!(!map.contains_key(&"a".to_string()));
    }

    #[test]
    fn test_update() {
        let map = LinkedHashMap::new();
        map.insert("n".to_string(), 10);
        assert_eq!(map.update(&"n".to_string(), |v| v + 1).unwrap(), 11);
        assert_eq!(map.get(&"n".to_string()), Some(11));
        assert!(matches!(
            map.update(&"missing".to_string(), |v| v),
            Err(CollectionError::InvalidArgument { name: "key", .. })
        ));
    }

    #[test]
    fn test_custom_equality_folds_keys() {
        let map = LinkedHashMap::with_equality(lowercase_equality());
        assert_eq!(map.insert("Foo".to_string(), 1), None);
        assert_eq!(map.insert("FOO".to_string(), 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"foo".to_string()), Some(2));
        // Overwrite kept the first-inserted key object.
        assert_eq!(
            map.keys().to_list().unwrap().to_vec(),
            vec!["Foo".to_string()]
        );
        assert_eq!(map.remove(&"fOo".to_string()), Some(2));
    }

    #[test]
    fn test_validator_gates_lookups_not_inserts() {
        let eq = lowercase_equality().with_validator(|k: &String| !k.is_empty());
        let map = LinkedHashMap::with_equality(eq);
        map.insert("a".to_string(), 1);
        assert_eq!(map.get(&"".to_string()), None);
        assert!(!map.contains_key(&"".to_string()));
        assert_eq!(map.remove(&"".to_string()), None);
        // Insert bypasses the gate.
        map.insert("".to_string(), 0);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_alias_visibility() {
        let a = LinkedHashMap::new();
        let b = a.clone();
        b.insert(1i64, "one");
        assert_eq!(a.get(&1i64), Some("one"));
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_for_each_and_map_values() {
        let map = LinkedHashMap::from_entries(vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
        ]);
        let mut seen = Vec::new();
        map.for_each(|k, v| seen.push((k.clone(), *v))).unwrap();
        assert_eq!(seen, vec![("a".to_string(), 1), ("b".to_string(), 2)]);

        let doubled = map.map_values(|_, v| v * 2).unwrap();
        assert_eq!(
            doubled.to_vec(),
            vec![("a".to_string(), 2), ("b".to_string(), 4)]
        );
    }

    #[test]
    fn test_for_each_mutation_detected() {
        let map = LinkedHashMap::from_entries(vec![(1i64, 1), (2i64, 2)]);
        let alias = map.clone();
        let result = map.for_each(|k, _| {
            if *k == 1 {
                alias.remove(&1i64);
            }
        });
        assert_eq!(result, Err(CollectionError::ConcurrentModification));
    }

    #[test]
    fn test_add_all_preserves_source_order() {
        let a = LinkedHashMap::from_entries(vec![(1i64, "a"), (2i64, "b")]);
        let b = LinkedHashMap::from_entries(vec![(2i64, "B"), (3i64, "c")]);
        a.add_all(&b).unwrap();
        assert_eq!(a.to_vec(), vec![(1, "a"), (2, "B"), (3, "c")]);
    }

    #[test]
    fn test_cursor_idempotent_after_exhaustion() {
        let map = LinkedHashMap::from_entries(vec![(1i64, "a")]);
        let mut cur = map.values().cursor();
        assert!(cur.move_next().unwrap());
        for _ in 0..3 {
            assert!(!cur.move_next().unwrap());
            assert_eq!(cur.current(), Some(&"a"));
        }
    }

    #[test]
    fn test_slot_reuse_keeps_order_correct() {
        let map = LinkedHashMap::new();
        for i in 0..5i64 {
            map.insert(i, i);
        }
        map.remove(&2);
        map.remove(&0);
        map.insert(9, 9);
        map.insert(10, 10);
        assert_eq!(
            map.keys().to_list().unwrap().to_vec(),
            vec![1, 3, 4, 9, 10]
        );
    }

    #[test]
    fn test_debug_renders_in_order() {
        let map = LinkedHashMap::from_entries(vec![("b".to_string(), 2), ("a".to_string(), 1)]);
        assert_eq!(format!("{:?}", map), "{\"b\": 2, \"a\": 1}");
    }
}
