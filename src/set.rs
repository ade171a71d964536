//! Insertion-ordered hash set, layered on the map engine.
//!
//! [`LinkedHashSet`] stores its elements as the keys of a
//! [`LinkedHashMap`] with `()` values, inheriting the map's ordering
//! rules, key-kind partition, custom equality support, and cursor
//! invalidation behavior for free.
//!
//! When a custom equality folds several distinct values together, the set
//! keeps the *first* instance added; [`LinkedHashSet::lookup`] retrieves
//! that canonical instance.

use std::fmt::{self, Debug};

use crate::cursor::{Cursor, Sequence};
use crate::error::Result;
use crate::key::{Equality, MapKey};
use crate::list::List;
use crate::map::{KeysCursor, LinkedHashMap};

/// An insertion-ordered set handle with reference semantics.
pub struct LinkedHashSet<T> {
    map: LinkedHashMap<T, ()>,
}

impl<T> Clone for LinkedHashSet<T> {
    fn clone(&self) -> Self {
        LinkedHashSet {
            map: self.map.clone(),
        }
    }
}

impl<T: MapKey> LinkedHashSet<T> {
    /// Creates an empty set using the element type's own equality and hash.
    pub fn new() -> Self {
        LinkedHashSet {
            map: LinkedHashMap::new(),
        }
    }

    /// Creates an empty set resolving element identity through `equality`.
    pub fn with_equality(equality: Equality<T>) -> Self {
        LinkedHashSet {
            map: LinkedHashMap::with_equality(equality),
        }
    }

    /// Creates a set containing the elements of `source`, collapsing
    /// duplicates and keeping each element's first occurrence.
    pub fn from<S: Sequence<Item = T>>(source: &S) -> Result<Self> {
        let set = Self::new();
        let mut cur = source.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                set.add(item.clone());
            }
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `self` and `other` are the same set object.
    pub fn ptr_eq(&self, other: &LinkedHashSet<T>) -> bool {
        self.map.ptr_eq(&other.map)
    }

    /// Adds `value`, reporting whether it was newly inserted.  When an
    /// equal element is already present the set is unchanged and the
    /// original instance is kept.
    pub fn add(&self, value: T) -> bool {
        // Overwriting an existing key keeps the stored key object, so a
        // duplicate add leaves the original instance in place.
        self.map.insert(value, ()).is_none()
    }

    /// Adds every element of `source`.
    pub fn add_all<S: Sequence<Item = T>>(&self, source: &S) -> Result<()> {
        let mut cur = source.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                self.add(item.clone());
            }
        }
        Ok(())
    }

    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// The stored element equal to `value` under the set's equality; the
    /// canonical instance when a custom policy folds values together.
    pub fn lookup(&self, value: &T) -> Option<T> {
        self.map.get_key(value)
    }

    /// Removes `value`, reporting whether it was present.
    pub fn remove(&self, value: &T) -> bool {
        self.map.remove(value).is_some()
    }

    pub fn clear(&self) {
        self.map.clear();
    }

    /// Whether every element of `other` is in this set, under *this*
    /// set's equality.
    pub fn contains_all<S: Sequence<Item = T>>(&self, other: &S) -> Result<bool> {
        let mut cur = other.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if !self.contains(item) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// A new set with this set's equality, containing this set's elements
    /// followed by the elements of `other` not already present.
    pub fn union(&self, other: &LinkedHashSet<T>) -> Result<LinkedHashSet<T>> {
        let out = self.new_like();
        out.add_all(self)?;
        out.add_all(other)?;
        Ok(out)
    }

    /// A new set with this set's equality, containing the elements of this
    /// set that `other` also contains (membership judged by `other`).
    pub fn intersection(&self, other: &LinkedHashSet<T>) -> Result<LinkedHashSet<T>> {
        let out = self.new_like();
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if other.contains(item) {
                    out.add(item.clone());
                }
            }
        }
        Ok(out)
    }

    /// A new set with this set's equality, containing the elements of this
    /// set that `other` does not contain.
    pub fn difference(&self, other: &LinkedHashSet<T>) -> Result<LinkedHashSet<T>> {
        let out = self.new_like();
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if !other.contains(item) {
                    out.add(item.clone());
                }
            }
        }
        Ok(out)
    }

    fn new_like(&self) -> Self {
        LinkedHashSet {
            map: self.map.new_like(),
        }
    }

    /// Copies the elements into a new growable list, in insertion order.
    pub fn to_list(&self) -> Result<List<T>> {
        self.keys_seq().to_list()
    }

    fn keys_seq(&self) -> crate::map::Keys<T, ()> {
        self.map.keys()
    }
}

impl<T: MapKey> Sequence for LinkedHashSet<T> {
    type Item = T;
    type Cursor = KeysCursor<T, ()>;

    fn cursor(&self) -> Self::Cursor {
        self.keys_seq().cursor()
    }
}

impl<T: MapKey> Default for LinkedHashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MapKey + Debug> Debug for LinkedHashSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (key, ()) in self.map.to_vec() {
            set.entry(&key);
        }
        set.finish()
    }
}
