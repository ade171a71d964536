//! The two-method iteration protocol every sequence in this crate speaks.
//!
//! [`Cursor`] is a stateful, single-pass `move_next`/`current` cursor;
//! [`Sequence`] is an immutable descriptor that can mint fresh, independent
//! cursors on demand.  All of the lazy view types in [`crate::lazy`] and all
//! terminal operations (`to_list`, `fold`, `join`, ...) are defined purely in
//! terms of this protocol — a terminal operation drives exactly one fresh
//! cursor and never touches the backing storage directly.
//!
//! Cursors over live collections capture the collection's modification
//! counter when they are created and fail with
//! [`CollectionError::ConcurrentModification`] on the first `move_next` after
//! a structural change.  That is why `move_next` returns a `Result`.

use std::fmt::Display;

use crate::error::{CollectionError, Result};
use crate::key::MapKey;
use crate::lazy::{
    ExpandSeq, FilterSeq, MapSeq, SkipSeq, SkipWhileSeq, TakeSeq, TakeWhileSeq,
};
use crate::list::List;
use crate::set::LinkedHashSet;

/// A transient cursor over a sequence.
///
/// # Contract
/// * `move_next` advances the cursor: `Ok(true)` and an updated `current`
///   when an element is available, `Ok(false)` once exhausted.  After
///   exhaustion it is safely repeatable and keeps returning `Ok(false)`.
/// * `current` is `None` before the first successful `move_next`.  After a
///   failed `move_next` it still returns the element from the prior
///   successful step — it is never reset.
/// * There is no `reset`; obtain a fresh cursor from the [`Sequence`].
pub trait Cursor {
    type Item: Clone;

    /// Advances to the next element, reporting whether one was produced.
    fn move_next(&mut self) -> Result<bool>;

    /// The element produced by the last successful [`Cursor::move_next`].
    fn current(&self) -> Option<&Self::Item>;
}

/// A lazy descriptor of how to produce a sequence of elements.
///
/// Sequences are cheap to clone and never cache: every call to
/// [`Sequence::cursor`] builds a fresh cursor chain, and re-iterating a
/// derived view re-invokes its transforms for every element visited.
///
/// The combinators (`map`, `filter`, `expand`, `take`, `skip`, ...) wrap
/// `self` in a new descriptor without doing any work; the terminal
/// operations (`to_list`, `fold`, `join`, ...) drive one fresh cursor to
/// completion.
pub trait Sequence: Clone {
    type Item: Clone;
    type Cursor: Cursor<Item = Self::Item>;

    /// Builds a fresh cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor;

    // --- Combinators (lazy, effort proportional to consumption) ---

    /// A view applying `f` to every element.  `f` runs once per produced
    /// element per iteration pass, at the `move_next` that produces it.
    fn map<B, F>(self, f: F) -> MapSeq<Self, F>
    where
        B: Clone,
        F: Fn(&Self::Item) -> B + Clone,
    {
        MapSeq::new(self, f)
    }

    /// A view keeping only the elements for which `test` returns `true`.
    fn filter<F>(self, test: F) -> FilterSeq<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        FilterSeq::new(self, test)
    }

    /// A view expanding each element into the sub-sequence `f` produces,
    /// drained to exhaustion before the next source element is consumed.
    fn expand<S2, F>(self, f: F) -> ExpandSeq<Self, S2, F>
    where
        S2: Sequence,
        F: Fn(&Self::Item) -> S2 + Clone,
    {
        ExpandSeq::new(self, f)
    }

    /// A view of at most the first `count` elements.
    fn take(self, count: usize) -> TakeSeq<Self> {
        TakeSeq::new(self, count)
    }

    /// A view of the leading elements satisfying `test`; stops permanently
    /// at the first failure.
    fn take_while<F>(self, test: F) -> TakeWhileSeq<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        TakeWhileSeq::new(self, test)
    }

    /// A view skipping the first `count` elements.
    fn skip(self, count: usize) -> SkipSeq<Self> {
        SkipSeq::new(self, count)
    }

    /// A view skipping the leading elements satisfying `test`.
    fn skip_while<F>(self, test: F) -> SkipWhileSeq<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        SkipWhileSeq::new(self, test)
    }

    // --- Terminal operations (drive one fresh cursor) ---

    /// Materializes the sequence into a new growable [`List`].
    fn to_list(&self) -> Result<List<Self::Item>> {
        let list = List::new();
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                list.push(item.clone())?;
            }
        }
        Ok(list)
    }

    /// Materializes the sequence into a new [`LinkedHashSet`], collapsing
    /// duplicates under the set's natural equality.
    fn to_set(&self) -> Result<LinkedHashSet<Self::Item>>
    where
        Self::Item: MapKey,
    {
        let set = LinkedHashSet::new();
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                set.add(item.clone());
            }
        }
        Ok(set)
    }

    /// Invokes `action` for every element in order.
    fn for_each<F>(&self, mut action: F) -> Result<()>
    where
        F: FnMut(&Self::Item),
    {
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                action(item);
            }
        }
        Ok(())
    }

    /// Left-to-right fold starting from `seed`; never fails on empty input.
    fn fold<B, F>(&self, seed: B, mut combine: F) -> Result<B>
    where
        F: FnMut(B, &Self::Item) -> B,
    {
        let mut acc = seed;
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                acc = combine(acc, item);
            }
        }
        Ok(acc)
    }

    /// Left-to-right fold seeded with the first element; fails with
    /// [`CollectionError::NoElement`] on empty input.
    fn reduce<F>(&self, mut combine: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, &Self::Item) -> Self::Item,
    {
        let mut cur = self.cursor();
        if !cur.move_next()? {
            return Err(CollectionError::NoElement);
        }
        let mut acc = match cur.current() {
            Some(item) => item.clone(),
            None => return Err(CollectionError::NoElement),
        };
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                acc = combine(acc, item);
            }
        }
        Ok(acc)
    }

    /// Whether `test` holds for every element.  Vacuously `true` when empty.
    fn every<F>(&self, mut test: F) -> Result<bool>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if !test(item) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Whether `test` holds for at least one element.
    fn any<F>(&self, mut test: F) -> Result<bool>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if test(item) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Concatenates the display form of every element, separated by `sep`.
    fn join(&self, sep: &str) -> Result<String>
    where
        Self::Item: Display,
    {
        let mut out = String::new();
        let mut first = true;
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if !first {
                    out.push_str(sep);
                }
                out.push_str(&item.to_string());
                first = false;
            }
        }
        Ok(out)
    }

    /// The first element; [`CollectionError::NoElement`] when empty.
    fn first(&self) -> Result<Self::Item> {
        let mut cur = self.cursor();
        if !cur.move_next()? {
            return Err(CollectionError::NoElement);
        }
        cur.current().cloned().ok_or(CollectionError::NoElement)
    }

    /// The last element; [`CollectionError::NoElement`] when empty.
    fn last(&self) -> Result<Self::Item> {
        let mut last = None;
        let mut cur = self.cursor();
        while cur.move_next()? {
            last = cur.current().cloned();
        }
        last.ok_or(CollectionError::NoElement)
    }

    /// The sole element; fails with [`CollectionError::NoElement`] when
    /// empty and [`CollectionError::TooManyElements`] when there are more.
    fn single(&self) -> Result<Self::Item> {
        let mut cur = self.cursor();
        if !cur.move_next()? {
            return Err(CollectionError::NoElement);
        }
        let found = cur.current().cloned();
        if cur.move_next()? {
            return Err(CollectionError::TooManyElements);
        }
        found.ok_or(CollectionError::NoElement)
    }

    /// The element at position `index`, stepping the cursor from the start.
    ///
    /// Fails with [`CollectionError::IndexOutOfRange`] when the sequence
    /// ends first; the reported length is the number of elements seen.
    fn element_at(&self, index: usize) -> Result<Self::Item> {
        let mut seen = 0;
        let mut cur = self.cursor();
        while cur.move_next()? {
            if seen == index {
                if let Some(item) = cur.current() {
                    return Ok(item.clone());
                }
            }
            seen += 1;
        }
        Err(CollectionError::IndexOutOfRange {
            index,
            length: seen,
        })
    }

    /// The first element satisfying `test`; [`CollectionError::NoElement`]
    /// when none match.
    fn first_where<F>(&self, mut test: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if test(item) {
                    return Ok(item.clone());
                }
            }
        }
        Err(CollectionError::NoElement)
    }

    /// The last element satisfying `test`; [`CollectionError::NoElement`]
    /// when none match.
    fn last_where<F>(&self, mut test: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if test(item) {
                    found = Some(item.clone());
                }
            }
        }
        found.ok_or(CollectionError::NoElement)
    }

    /// The unique element satisfying `test`; [`CollectionError::NoElement`]
    /// when none match, [`CollectionError::TooManyElements`] when several do.
    fn single_where<F>(&self, mut test: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if test(item) {
                    if found.is_some() {
                        return Err(CollectionError::TooManyElements);
                    }
                    found = Some(item.clone());
                }
            }
        }
        found.ok_or(CollectionError::NoElement)
    }

    /// Number of elements, counted by stepping to exhaustion.
    fn count(&self) -> Result<usize> {
        let mut n = 0;
        let mut cur = self.cursor();
        while cur.move_next()? {
            n += 1;
        }
        Ok(n)
    }

    /// Whether the sequence produces no elements.
    fn is_empty(&self) -> Result<bool> {
        let mut cur = self.cursor();
        Ok(!cur.move_next()?)
    }

    /// Whether some element equals `value`.
    fn contains(&self, value: &Self::Item) -> Result<bool>
    where
        Self::Item: PartialEq,
    {
        let mut cur = self.cursor();
        while cur.move_next()? {
            if let Some(item) = cur.current() {
                if item == value {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy::ItemsSeq;

    fn digits() -> ItemsSeq<i32> {
        ItemsSeq::of(vec![1, 2, 3, 4, 5])
    }

    #[test]
    fn test_fold_and_reduce() {
        assert_eq!(digits().fold(100, |acc, x| acc + x).unwrap(), 115);
        assert_eq!(digits().reduce(|acc, x| acc * x).unwrap(), 120);

        let empty = ItemsSeq::<i32>::of(vec![]);
        assert_eq!(empty.fold(7, |acc, x| acc + x).unwrap(), 7);
        assert_eq!(empty.reduce(|acc, x| acc + x), Err(CollectionError::NoElement));
    }

    #[test]
    fn test_first_last_single() {
        assert_eq!(digits().first().unwrap(), 1);
        assert_eq!(digits().last().unwrap(), 5);
        assert_eq!(digits().single(), Err(CollectionError::TooManyElements));
        assert_eq!(ItemsSeq::of(vec![9]).single().unwrap(), 9);
        assert_eq!(
            ItemsSeq::<i32>::of(vec![]).single(),
            Err(CollectionError::NoElement)
        );
    }

    #[test]
    fn test_where_variants() {
        assert_eq!(digits().first_where(|x| x % 2 == 0).unwrap(), 2);
        assert_eq!(digits().last_where(|x| x % 2 == 0).unwrap(), 4);
        assert_eq!(digits().single_where(|x| *x == 3).unwrap(), 3);
        assert_eq!(
            digits().single_where(|x| x % 2 == 0),
            Err(CollectionError::TooManyElements)
        );
        assert_eq!(
            digits().first_where(|x| *x > 10),
            Err(CollectionError::NoElement)
        );
    }

    #[test]
    fn test_element_at() {
        assert_eq!(digits().element_at(0).unwrap(), 1);
        assert_eq!(digits().element_at(4).unwrap(), 5);
        assert_eq!(
            digits().element_at(5),
            Err(CollectionError::IndexOutOfRange {
                index: 5,
                length: 5
            })
        );
    }

    #[test]
    fn test_every_any_contains_count() {
        assert!(digits().every(|x| *x > 0).unwrap());
        assert!(!digits().every(|x| *x > 1).unwrap());
        assert!(digits().any(|x| *x == 4).unwrap());
        assert!(!digits().any(|x| *x == 40).unwrap());
        assert!(digits().contains(&3).unwrap());
        assert_eq!(digits().count().unwrap(), 5);
        assert!(!digits().is_empty().unwrap());
        assert!(ItemsSeq::<i32>::of(vec![]).is_empty().unwrap());
    }

    #[test]
    fn test_join() {
        assert_eq!(digits().join(", ").unwrap(), "1, 2, 3, 4, 5");
        assert_eq!(ItemsSeq::<i32>::of(vec![]).join(", ").unwrap(), "");
    }

    #[test]
    fn test_cursor_idempotent_after_exhaustion() {
        let seq = ItemsSeq::of(vec![10, 20]);
        let mut cur = seq.cursor();
        assert!(cur.current().is_none());
        assert!(cur.move_next().unwrap());
        assert!(cur.move_next().unwrap());
        assert_eq!(cur.current(), Some(&20));
        for _ in 0..3 {
            assert!(!cur.move_next().unwrap());
            assert_eq!(cur.current(), Some(&20));
        }
    }

    #[test]
    fn test_to_list_and_to_set() {
        let list = digits().to_list().unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);

        let set = ItemsSeq::of(vec![1i64, 2, 2, 3, 1]).to_set().unwrap();
        assert_eq!(set.to_list().unwrap().to_vec(), vec![1, 2, 3]);
    }
}
