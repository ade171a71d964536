//! Growable, fixed-length, and unmodifiable indexable sequences.
//!
//! [`List`] is a handle with the source runtime's reference semantics:
//! cloning a `List` aliases it, and every alias observes mutations made
//! through any other.  The backing storage is a plain `Vec`, plus the
//! list's kind and a modification counter.
//!
//! Structural operations (anything changing the length) bump the counter
//! and fail on non-growable lists; element writes are permitted on
//! fixed-length lists and never invalidate in-flight cursors.  The
//! [`List::reversed`] and [`List::get_range`] views are index-addressable:
//! they read elements by position instead of stepping a source cursor.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::rc::Rc;

use rand::Rng;

use crate::cursor::{Cursor, Sequence};
use crate::error::{CollectionError, Result};

/// What a list permits: structural mutation, element writes, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Length and elements both mutable.
    Growable,
    /// Elements mutable, length frozen.
    FixedLength,
    /// Fully read-only.
    Unmodifiable,
}

struct RawList<T> {
    items: Vec<T>,
    kind: ListKind,
    mod_count: u64,
}

/// An ordered, index-addressable sequence with reference semantics.
///
/// `clone` produces an alias of the same list, not a copy; use
/// [`List::from`] or [`List::sublist`] to copy elements.  Identity is
/// exposed through [`List::ptr_eq`].
pub struct List<T> {
    inner: Rc<RefCell<RawList<T>>>,
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
            || self.inner.borrow().items == other.inner.borrow().items
    }
}

fn check_growable(kind: ListKind, op: &'static str) -> Result<()> {
    if kind == ListKind::Growable {
        Ok(())
    } else {
        Err(CollectionError::Unsupported(op))
    }
}

fn check_mutable(kind: ListKind, op: &'static str) -> Result<()> {
    if kind == ListKind::Unmodifiable {
        Err(CollectionError::Unsupported(op))
    } else {
        Ok(())
    }
}

fn check_range(start: usize, end: usize, length: usize) -> Result<()> {
    if start > end || end > length {
        Err(CollectionError::InvalidRange { start, end, length })
    } else {
        Ok(())
    }
}

impl<T: Clone> List<T> {
    fn with_raw(items: Vec<T>, kind: ListKind) -> Self {
        List {
            inner: Rc::new(RefCell::new(RawList {
                items,
                kind,
                mod_count: 0,
            })),
        }
    }

    /// Creates an empty growable list.
    pub fn new() -> Self {
        Self::with_raw(Vec::new(), ListKind::Growable)
    }

    /// Creates an empty growable list with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_raw(Vec::with_capacity(capacity), ListKind::Growable)
    }

    /// Creates a fixed-length list of `length` copies of `fill`.
    pub fn filled(length: usize, fill: T) -> Self {
        Self::with_raw(vec![fill; length], ListKind::FixedLength)
    }

    /// Creates a growable list of `length` copies of `fill`.
    pub fn filled_growable(length: usize, fill: T) -> Self {
        Self::with_raw(vec![fill; length], ListKind::Growable)
    }

    /// Creates a growable list of `length` elements produced by `generate`.
    pub fn generate<F: FnMut(usize) -> T>(length: usize, generate: F) -> Self {
        Self::with_raw((0..length).map(generate).collect(), ListKind::Growable)
    }

    /// Creates a growable list owning `items`.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::with_raw(items, ListKind::Growable)
    }

    /// Creates a growable list containing the elements of `source`.
    pub fn from<S: Sequence<Item = T>>(source: &S) -> Result<Self> {
        Ok(Self::with_raw(collect(source)?, ListKind::Growable))
    }

    /// Creates an unmodifiable list containing the elements of `source`.
    pub fn unmodifiable<S: Sequence<Item = T>>(source: &S) -> Result<Self> {
        Ok(Self::with_raw(collect(source)?, ListKind::Unmodifiable))
    }

    // --- Introspection ---

    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    pub fn kind(&self) -> ListKind {
        self.inner.borrow().kind
    }

    /// Whether `self` and `other` are the same list object.
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Copies the elements into a plain vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.borrow().items.clone()
    }

    // --- Element access ---

    /// The element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.borrow().items.get(index).cloned()
    }

    /// The element at `index`; the error carries the index and the length
    /// at the time of the failure.
    pub fn at(&self, index: usize) -> Result<T> {
        let raw = self.inner.borrow();
        raw.items
            .get(index)
            .cloned()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                length: raw.items.len(),
            })
    }

    /// Replaces the element at `index`.  An element write, permitted on
    /// fixed-length lists; does not invalidate cursors.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_mutable(raw.kind, "element write on an unmodifiable list")?;
        let length = raw.items.len();
        match raw.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CollectionError::IndexOutOfRange { index, length }),
        }
    }

    // --- Structural mutation (growable only) ---

    /// Appends `value`.
    pub fn push(&self, value: T) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "add on a non-growable list")?;
        raw.items.push(value);
        raw.mod_count += 1;
        Ok(())
    }

    /// Appends every element of `source`, in order.
    pub fn add_all<S: Sequence<Item = T>>(&self, source: &S) -> Result<()> {
        let mut cur = source.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                self.push(item.clone())?;
            }
        }
        Ok(())
    }

    /// Inserts `value` at `index`, shifting later elements up.
    pub fn insert(&self, index: usize, value: T) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "insert on a non-growable list")?;
        if index > raw.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                length: raw.items.len(),
            });
        }
        raw.items.insert(index, value);
        raw.mod_count += 1;
        Ok(())
    }

    /// Inserts every element of `source` at `index`, in order.
    pub fn insert_all<S: Sequence<Item = T>>(&self, index: usize, source: &S) -> Result<()> {
        let mut at = index;
        let mut cur = source.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                self.insert(at, item.clone())?;
                at += 1;
            }
        }
        Ok(())
    }

    /// Removes the first occurrence of `value`, reporting whether one was
    /// found.
    pub fn remove(&self, value: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "remove on a non-growable list")?;
        match raw.items.iter().position(|x| x == value) {
            Some(pos) => {
                raw.items.remove(pos);
                raw.mod_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&self, index: usize) -> Result<T> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "removeAt on a non-growable list")?;
        if index >= raw.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                length: raw.items.len(),
            });
        }
        let removed = raw.items.remove(index);
        raw.mod_count += 1;
        Ok(removed)
    }

    /// Removes and returns the last element; fails on an empty list.
    pub fn remove_last(&self) -> Result<T> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "removeLast on a non-growable list")?;
        match raw.items.pop() {
            Some(item) => {
                raw.mod_count += 1;
                Ok(item)
            }
            None => Err(CollectionError::NoElement),
        }
    }

    /// Removes every element satisfying `test`.
    pub fn remove_where<F: FnMut(&T) -> bool>(&self, mut test: F) -> Result<()> {
        self.filter_in_place(&mut |item| !test(item))
    }

    /// Keeps only the elements satisfying `test`.
    pub fn retain_where<F: FnMut(&T) -> bool>(&self, mut test: F) -> Result<()> {
        self.filter_in_place(&mut |item| test(item))
    }

    // The predicate is user code, so no borrow may be held while it runs:
    // elements are cloned out one at a time and the modification counter is
    // re-checked before every step and before the final write-back.
    fn filter_in_place(&self, keep: &mut dyn FnMut(&T) -> bool) -> Result<()> {
        let start_mod = {
            let raw = self.inner.borrow();
            check_growable(raw.kind, "removeWhere on a non-growable list")?;
            raw.mod_count
        };
        let mut kept = Vec::new();
        let mut index = 0;
        loop {
            let item = {
                let raw = self.inner.borrow();
                if raw.mod_count != start_mod {
                    return Err(CollectionError::ConcurrentModification);
                }
                if index >= raw.items.len() {
                    break;
                }
                raw.items[index].clone()
            };
            if keep(&item) {
                kept.push(item);
            }
            index += 1;
        }
        let mut raw = self.inner.borrow_mut();
        if raw.mod_count != start_mod {
            return Err(CollectionError::ConcurrentModification);
        }
        if kept.len() != raw.items.len() {
            raw.mod_count += 1;
        }
        raw.items = kept;
        Ok(())
    }

    /// Removes every element.
    pub fn clear(&self) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "clear on a non-growable list")?;
        if !raw.items.is_empty() {
            raw.items.clear();
            raw.mod_count += 1;
        }
        Ok(())
    }

    /// Sets the length, filling new slots with copies of `fill`.
    pub fn resize(&self, new_length: usize, fill: T) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "length change on a non-growable list")?;
        if new_length != raw.items.len() {
            raw.items.resize(new_length, fill);
            raw.mod_count += 1;
        }
        Ok(())
    }

    /// Shortens the list to `new_length`; no-op when already shorter.
    pub fn truncate(&self, new_length: usize) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "length change on a non-growable list")?;
        if new_length < raw.items.len() {
            raw.items.truncate(new_length);
            raw.mod_count += 1;
        }
        Ok(())
    }

    // --- Ordering ---

    /// Sorts in place by `compare`.  Not stable: equal-comparing elements
    /// may reorder between calls.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&self, mut compare: F) -> Result<()> {
        // The comparator is user code; sort a snapshot and write it back
        // only if no structural change happened in between.
        let (mut items, start_mod) = {
            let raw = self.inner.borrow();
            check_mutable(raw.kind, "sort on an unmodifiable list")?;
            (raw.items.clone(), raw.mod_count)
        };
        items.sort_unstable_by(|a, b| compare(a, b));
        let mut raw = self.inner.borrow_mut();
        if raw.mod_count != start_mod {
            return Err(CollectionError::ConcurrentModification);
        }
        raw.items = items;
        Ok(())
    }

    /// Sorts in place by the natural order of the elements.
    pub fn sort(&self) -> Result<()>
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Permutes the elements with a Fisher–Yates shuffle driven by `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_mutable(raw.kind, "shuffle on an unmodifiable list")?;
        let items = &mut raw.items;
        for i in (1..items.len()).rev() {
            let j = rng.gen_range(0..=i);
            items.swap(i, j);
        }
        Ok(())
    }

    /// [`List::shuffle`] with the thread-local random source.
    pub fn shuffle_default(&self) -> Result<()> {
        self.shuffle(&mut rand::thread_rng())
    }

    // --- Range operations ---

    /// A lazy view of the elements from `start` to `end` (exclusive),
    /// reading the live list by index.
    pub fn get_range(&self, start: usize, end: usize) -> Result<RangeView<T>> {
        check_range(start, end, self.len())?;
        Ok(RangeView {
            list: self.clone(),
            start,
            end,
        })
    }

    /// Overwrites the elements from `start` to `end` (exclusive) with the
    /// leading elements of `source`.
    pub fn set_range(&self, start: usize, end: usize, source: &[T]) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_mutable(raw.kind, "setRange on an unmodifiable list")?;
        check_range(start, end, raw.items.len())?;
        let count = end - start;
        if source.len() < count {
            return Err(CollectionError::InvalidArgument {
                name: "source",
                message: format!("{} elements needed, {} available", count, source.len()),
            });
        }
        raw.items[start..end].clone_from_slice(&source[..count]);
        Ok(())
    }

    /// Copies the elements from `src_start..src_end` over the range
    /// starting at `target`, reading from the original values even when
    /// the ranges overlap.
    pub fn copy_within(&self, src_start: usize, src_end: usize, target: usize) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_mutable(raw.kind, "setRange on an unmodifiable list")?;
        let length = raw.items.len();
        check_range(src_start, src_end, length)?;
        let count = src_end - src_start;
        if count > length || target > length - count {
            return Err(CollectionError::InvalidRange {
                start: target,
                end: target.saturating_add(count),
                length,
            });
        }
        let snapshot: Vec<T> = raw.items[src_start..src_end].to_vec();
        raw.items[target..target + count].clone_from_slice(&snapshot);
        Ok(())
    }

    /// Removes the elements from `start` to `end` (exclusive).
    pub fn remove_range(&self, start: usize, end: usize) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "removeRange on a non-growable list")?;
        check_range(start, end, raw.items.len())?;
        if start != end {
            raw.items.drain(start..end);
            raw.mod_count += 1;
        }
        Ok(())
    }

    /// Overwrites the elements from `start` to `end` (exclusive) with
    /// copies of `fill`.
    pub fn fill_range(&self, start: usize, end: usize, fill: &T) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_mutable(raw.kind, "fillRange on an unmodifiable list")?;
        check_range(start, end, raw.items.len())?;
        for slot in &mut raw.items[start..end] {
            *slot = fill.clone();
        }
        Ok(())
    }

    /// Replaces the elements from `start` to `end` (exclusive) with the
    /// contents of `replacement`; the list may grow or shrink.
    pub fn replace_range(&self, start: usize, end: usize, replacement: &[T]) -> Result<()> {
        let mut raw = self.inner.borrow_mut();
        check_growable(raw.kind, "replaceRange on a non-growable list")?;
        check_range(start, end, raw.items.len())?;
        raw.items.splice(start..end, replacement.iter().cloned());
        if end - start != replacement.len() {
            raw.mod_count += 1;
        }
        Ok(())
    }

    // --- Search ---

    /// Index of the first occurrence of `value` at or after `start`.
    pub fn index_of(&self, value: &T, start: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let raw = self.inner.borrow();
        raw.items
            .iter()
            .skip(start)
            .position(|x| x == value)
            .map(|pos| pos + start)
    }

    /// Index of the last occurrence of `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.inner.borrow().items.iter().rposition(|x| x == value)
    }

    // --- Derived structures ---

    /// A new growable list copying the elements from `start` to `end`
    /// (exclusive; defaults to the length).
    pub fn sublist(&self, start: usize, end: Option<usize>) -> Result<List<T>> {
        let raw = self.inner.borrow();
        let end = end.unwrap_or(raw.items.len());
        check_range(start, end, raw.items.len())?;
        Ok(List::from_vec(raw.items[start..end].to_vec()))
    }

    /// A lazy view of the elements in reverse order, computed by index
    /// arithmetic over the live list.
    pub fn reversed(&self) -> ReversedView<T> {
        ReversedView { list: self.clone() }
    }

    /// A read-only map view of the live list, with keys `0..len`.
    pub fn as_map(&self) -> ListAsMap<T> {
        ListAsMap { list: self.clone() }
    }
}

fn collect<S: Sequence>(source: &S) -> Result<Vec<S::Item>> {
    let mut items = Vec::new();
    let mut cur = source.cursor();
    while cur.move_next()? {
        if let Some(item) = cur.current() {
            items.push(item.clone());
        }
    }
    Ok(items)
}

impl<T: Clone> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.borrow().items.iter()).finish()
    }
}

// --- Sequence over the live list ---

impl<T: Clone> Sequence for List<T> {
    type Item = T;
    type Cursor = ListCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        let raw = self.inner.borrow();
        ListCursor {
            list: self.clone(),
            mod_count: raw.mod_count,
            next: 0,
            current: None,
        }
    }
}

/// Cursor over a live list; fails once the list's length has changed.
pub struct ListCursor<T> {
    list: List<T>,
    mod_count: u64,
    next: usize,
    current: Option<T>,
}

impl<T: Clone> Cursor for ListCursor<T> {
    type Item = T;

    fn move_next(&mut self) -> Result<bool> {
        let raw = self.list.inner.borrow();
        if raw.mod_count != self.mod_count {
            return Err(CollectionError::ConcurrentModification);
        }
        if self.next < raw.items.len() {
            self.current = Some(raw.items[self.next].clone());
            self.next += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

// --- Index-addressable views ---

/// Lazy reverse-order view over a live list.
#[derive(Clone)]
pub struct ReversedView<T> {
    list: List<T>,
}

impl<T: Clone> Sequence for ReversedView<T> {
    type Item = T;
    type Cursor = ReversedCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        let raw = self.list.inner.borrow();
        ReversedCursor {
            list: self.list.clone(),
            mod_count: raw.mod_count,
            remaining: raw.items.len(),
            current: None,
        }
    }
}

pub struct ReversedCursor<T> {
    list: List<T>,
    mod_count: u64,
    remaining: usize,
    current: Option<T>,
}

impl<T: Clone> Cursor for ReversedCursor<T> {
    type Item = T;

    fn move_next(&mut self) -> Result<bool> {
        let raw = self.list.inner.borrow();
        if raw.mod_count != self.mod_count {
            return Err(CollectionError::ConcurrentModification);
        }
        if self.remaining == 0 {
            return Ok(false);
        }
        self.remaining -= 1;
        self.current = raw.items.get(self.remaining).cloned();
        Ok(self.current.is_some())
    }

    fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

/// Lazy sub-range view over a live list, produced by [`List::get_range`].
#[derive(Clone, Debug)]
pub struct RangeView<T> {
    list: List<T>,
    start: usize,
    end: usize,
}

impl<T: Clone> Sequence for RangeView<T> {
    type Item = T;
    type Cursor = RangeCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        let raw = self.list.inner.borrow();
        RangeCursor {
            list: self.list.clone(),
            mod_count: raw.mod_count,
            next: self.start,
            end: self.end,
            current: None,
        }
    }
}

pub struct RangeCursor<T> {
    list: List<T>,
    mod_count: u64,
    next: usize,
    end: usize,
    current: Option<T>,
}

impl<T: Clone> Cursor for RangeCursor<T> {
    type Item = T;

    fn move_next(&mut self) -> Result<bool> {
        let raw = self.list.inner.borrow();
        if raw.mod_count != self.mod_count {
            return Err(CollectionError::ConcurrentModification);
        }
        if self.next >= self.end {
            return Ok(false);
        }
        self.current = raw.items.get(self.next).cloned();
        self.next += 1;
        Ok(self.current.is_some())
    }

    fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

// --- asMap bridge ---

/// Read-only index→value map view of a live list.
///
/// Reflects the list it was created from: keys are exactly `0..len` in
/// ascending order at any moment.  There are no mutating operations.
#[derive(Clone)]
pub struct ListAsMap<T> {
    list: List<T>,
}

impl<T: Clone> ListAsMap<T> {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The value for `key`, or `None` when `key` is not a valid index.
    pub fn get(&self, key: usize) -> Option<T> {
        self.list.get(key)
    }

    pub fn contains_key(&self, key: usize) -> bool {
        key < self.list.len()
    }

    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.index_of(value, 0).is_some()
    }

    /// The keys `0..len`, tracking the live list.
    pub fn keys(&self) -> IndexKeys<T> {
        IndexKeys {
            list: self.list.clone(),
        }
    }

    /// The values, in index order.
    pub fn values(&self) -> List<T> {
        self.list.clone()
    }

    /// Invokes `action` for every index/value pair in ascending key order.
    pub fn for_each<F: FnMut(usize, &T)>(&self, mut action: F) -> Result<()> {
        let mut index = 0;
        let mut cur = self.list.cursor();
        while cur.move_next()? {
            if let Some(value) = cur.current() {
                action(index, value);
            }
            index += 1;
        }
        Ok(())
    }
}

/// Sequence of the valid indices of a live list.
#[derive(Clone)]
pub struct IndexKeys<T> {
    list: List<T>,
}

impl<T: Clone> Sequence for IndexKeys<T> {
    type Item = usize;
    type Cursor = IndexKeysCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        let raw = self.list.inner.borrow();
        IndexKeysCursor {
            list: self.list.clone(),
            mod_count: raw.mod_count,
            next: 0,
            current: None,
        }
    }
}

pub struct IndexKeysCursor<T> {
    list: List<T>,
    mod_count: u64,
    next: usize,
    current: Option<usize>,
}

impl<T: Clone> Cursor for IndexKeysCursor<T> {
    type Item = usize;

    fn move_next(&mut self) -> Result<bool> {
        let raw = self.list.inner.borrow();
        if raw.mod_count != self.mod_count {
            return Err(CollectionError::ConcurrentModification);
        }
        if self.next < raw.items.len() {
            self.current = Some(self.next);
            self.next += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn current(&self) -> Option<&usize> {
        self.current.as_ref()
    }
}
