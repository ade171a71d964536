//! Lazy, composable views over any [`Sequence`].
//!
//! Each view is a small immutable descriptor wrapping its source plus a
//! transform, predicate, or count.  Nothing is materialized: requesting a
//! cursor builds a fresh dependent cursor from a fresh source cursor, so
//! iterating a view twice is fully independent and re-invokes the transform
//! for every element visited.
//!
//! Every dependent cursor caches the element it last produced, which keeps
//! the protocol's retention rule (`current` unchanged after exhaustion) true
//! even when the underlying source cursor has moved past a non-matching
//! element.

use std::rc::Rc;

use crate::cursor::{Cursor, Sequence};
use crate::error::Result;

// --- map ---

/// View applying a transform to each element of a source sequence.
#[derive(Clone)]
pub struct MapSeq<S, F> {
    source: S,
    transform: F,
}

impl<S, F> MapSeq<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<S, B, F> Sequence for MapSeq<S, F>
where
    S: Sequence,
    B: Clone,
    F: Fn(&S::Item) -> B + Clone,
{
    type Item = B;
    type Cursor = MapCursor<S::Cursor, F, B>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            source: self.source.cursor(),
            transform: self.transform.clone(),
            current: None,
        }
    }
}

pub struct MapCursor<C, F, B> {
    source: C,
    transform: F,
    current: Option<B>,
}

impl<C, F, B> Cursor for MapCursor<C, F, B>
where
    C: Cursor,
    B: Clone,
    F: Fn(&C::Item) -> B,
{
    type Item = B;

    fn move_next(&mut self) -> Result<bool> {
        if !self.source.move_next()? {
            return Ok(false);
        }
        if let Some(item) = self.source.current() {
            self.current = Some((self.transform)(item));
        }
        Ok(true)
    }

    fn current(&self) -> Option<&B> {
        self.current.as_ref()
    }
}

// --- filter ---

/// View keeping only the elements a predicate accepts.
#[derive(Clone)]
pub struct FilterSeq<S, F> {
    source: S,
    test: F,
}

impl<S, F> FilterSeq<S, F> {
    pub(crate) fn new(source: S, test: F) -> Self {
        Self { source, test }
    }
}

impl<S, F> Sequence for FilterSeq<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            source: self.source.cursor(),
            test: self.test.clone(),
            current: None,
        }
    }
}

pub struct FilterCursor<C: Cursor, F> {
    source: C,
    test: F,
    current: Option<C::Item>,
}

impl<C, F> Cursor for FilterCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn move_next(&mut self) -> Result<bool> {
        while self.source.move_next()? {
            if let Some(item) = self.source.current() {
                if (self.test)(item) {
                    self.current = Some(item.clone());
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn current(&self) -> Option<&C::Item> {
        self.current.as_ref()
    }
}

// --- expand ---

/// View flattening each element into the sub-sequence a transform produces.
#[derive(Clone)]
pub struct ExpandSeq<S, S2, F> {
    source: S,
    transform: F,
    _marker: std::marker::PhantomData<S2>,
}

impl<S, S2, F> ExpandSeq<S, S2, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Self {
            source,
            transform,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<S, S2, F> Sequence for ExpandSeq<S, S2, F>
where
    S: Sequence,
    S2: Sequence,
    F: Fn(&S::Item) -> S2 + Clone,
{
    type Item = S2::Item;
    type Cursor = ExpandCursor<S::Cursor, S2, F>;

    fn cursor(&self) -> Self::Cursor {
        ExpandCursor {
            outer: self.source.cursor(),
            transform: self.transform.clone(),
            inner: None,
            current: None,
        }
    }
}

pub struct ExpandCursor<C, S2: Sequence, F> {
    outer: C,
    transform: F,
    inner: Option<S2::Cursor>,
    current: Option<S2::Item>,
}

impl<C, S2, F> Cursor for ExpandCursor<C, S2, F>
where
    C: Cursor,
    S2: Sequence,
    F: Fn(&C::Item) -> S2,
{
    type Item = S2::Item;

    fn move_next(&mut self) -> Result<bool> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.move_next()? {
                    self.current = inner.current().cloned();
                    return Ok(true);
                }
                // Sub-sequence exhausted; an empty one contributes nothing.
                self.inner = None;
            }
            if !self.outer.move_next()? {
                return Ok(false);
            }
            if let Some(item) = self.outer.current() {
                self.inner = Some((self.transform)(item).cursor());
            }
        }
    }

    fn current(&self) -> Option<&S2::Item> {
        self.current.as_ref()
    }
}

// --- take / take_while ---

/// View of at most the first `count` elements of a source sequence.
#[derive(Clone)]
pub struct TakeSeq<S> {
    source: S,
    count: usize,
}

impl<S> TakeSeq<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for TakeSeq<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            source: self.source.cursor(),
            remaining: self.count,
            current: None,
        }
    }
}

pub struct TakeCursor<C: Cursor> {
    source: C,
    remaining: usize,
    current: Option<C::Item>,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn move_next(&mut self) -> Result<bool> {
        if self.remaining == 0 {
            return Ok(false);
        }
        if self.source.move_next()? {
            self.remaining -= 1;
            self.current = self.source.current().cloned();
            Ok(true)
        } else {
            self.remaining = 0;
            Ok(false)
        }
    }

    fn current(&self) -> Option<&C::Item> {
        self.current.as_ref()
    }
}

/// View of the leading elements satisfying a predicate.
#[derive(Clone)]
pub struct TakeWhileSeq<S, F> {
    source: S,
    test: F,
}

impl<S, F> TakeWhileSeq<S, F> {
    pub(crate) fn new(source: S, test: F) -> Self {
        Self { source, test }
    }
}

impl<S, F> Sequence for TakeWhileSeq<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileCursor {
            source: self.source.cursor(),
            test: self.test.clone(),
            done: false,
            current: None,
        }
    }
}

pub struct TakeWhileCursor<C: Cursor, F> {
    source: C,
    test: F,
    done: bool,
    current: Option<C::Item>,
}

impl<C, F> Cursor for TakeWhileCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn move_next(&mut self) -> Result<bool> {
        if self.done {
            return Ok(false);
        }
        if self.source.move_next()? {
            if let Some(item) = self.source.current() {
                if (self.test)(item) {
                    self.current = Some(item.clone());
                    return Ok(true);
                }
            }
        }
        // First failure (or source exhaustion) stops the view permanently.
        self.done = true;
        Ok(false)
    }

    fn current(&self) -> Option<&C::Item> {
        self.current.as_ref()
    }
}

// --- skip / skip_while ---

/// View skipping the first `count` elements of a source sequence.
#[derive(Clone)]
pub struct SkipSeq<S> {
    source: S,
    count: usize,
}

impl<S> SkipSeq<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for SkipSeq<S> {
    type Item = S::Item;
    type Cursor = SkipCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SkipCursor {
            source: self.source.cursor(),
            remaining: self.count,
            current: None,
        }
    }
}

pub struct SkipCursor<C: Cursor> {
    source: C,
    remaining: usize,
    current: Option<C::Item>,
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn move_next(&mut self) -> Result<bool> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if !self.source.move_next()? {
                self.remaining = 0;
                return Ok(false);
            }
        }
        if self.source.move_next()? {
            self.current = self.source.current().cloned();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn current(&self) -> Option<&C::Item> {
        self.current.as_ref()
    }
}

/// View skipping the leading elements satisfying a predicate.
#[derive(Clone)]
pub struct SkipWhileSeq<S, F> {
    source: S,
    test: F,
}

impl<S, F> SkipWhileSeq<S, F> {
    pub(crate) fn new(source: S, test: F) -> Self {
        Self { source, test }
    }
}

impl<S, F> Sequence for SkipWhileSeq<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = SkipWhileCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        SkipWhileCursor {
            source: self.source.cursor(),
            test: self.test.clone(),
            skipping: true,
            current: None,
        }
    }
}

pub struct SkipWhileCursor<C: Cursor, F> {
    source: C,
    test: F,
    skipping: bool,
    current: Option<C::Item>,
}

impl<C, F> Cursor for SkipWhileCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn move_next(&mut self) -> Result<bool> {
        if self.skipping {
            self.skipping = false;
            loop {
                if !self.source.move_next()? {
                    return Ok(false);
                }
                if let Some(item) = self.source.current() {
                    if !(self.test)(item) {
                        self.current = Some(item.clone());
                        return Ok(true);
                    }
                }
            }
        }
        if self.source.move_next()? {
            self.current = self.source.current().cloned();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn current(&self) -> Option<&C::Item> {
        self.current.as_ref()
    }
}

// --- owned element sequence ---

/// An owned, shareable sequence over a fixed slice of elements.
///
/// Useful for literal element lists and as the sub-sequence type of
/// [`Sequence::expand`] transforms, where the produced sequence must carry
/// its own storage.
#[derive(Clone)]
pub struct ItemsSeq<T> {
    items: Rc<[T]>,
}

impl<T: Clone> ItemsSeq<T> {
    /// Wraps a vector of elements.
    pub fn of(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T: Clone> Sequence for ItemsSeq<T> {
    type Item = T;
    type Cursor = ItemsCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        ItemsCursor {
            items: Rc::clone(&self.items),
            next: 0,
        }
    }
}

pub struct ItemsCursor<T> {
    items: Rc<[T]>,
    next: usize,
}

impl<T: Clone> Cursor for ItemsCursor<T> {
    type Item = T;

    fn move_next(&mut self) -> Result<bool> {
        if self.next < self.items.len() {
            self.next += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn current(&self) -> Option<&T> {
        if self.next == 0 {
            None
        } else {
            self.items.get(self.next - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as StdCell;

    #[test]
    fn test_views_are_lazy_until_iterated() {
        let map_calls = Rc::new(StdCell::new(0));
        let filter_calls = Rc::new(StdCell::new(0));

        let mc = Rc::clone(&map_calls);
        let fc = Rc::clone(&filter_calls);
        let view = ItemsSeq::of(vec![1, 2, 3])
            .map(move |x: &i32| {
                mc.set(mc.get() + 1);
                x * 10
            })
            .filter(move |x: &i32| {
                fc.set(fc.get() + 1);
                *x > 10
            });

        // Constructing the chain invokes nothing.
        assert_eq!(map_calls.get(), 0);
        assert_eq!(filter_calls.get(), 0);

        assert_eq!(view.to_list().unwrap().to_vec(), vec![20, 30]);
        assert_eq!(map_calls.get(), 3);
        assert_eq!(filter_calls.get(), 3);

        // Iterating again re-invokes the transforms per element.
        assert_eq!(view.to_list().unwrap().to_vec(), vec![20, 30]);
        assert_eq!(map_calls.get(), 6);
        assert_eq!(filter_calls.get(), 6);
    }

    #[test]
    fn test_map_transform_runs_once_per_element_per_pass() {
        let calls = Rc::new(StdCell::new(0));
        let c = Rc::clone(&calls);
        let view = ItemsSeq::of(vec![5, 6]).map(move |x: &i32| {
            c.set(c.get() + 1);
            *x
        });
        let mut cur = view.cursor();
        assert!(cur.move_next().unwrap());
        // Reading current twice does not re-run the transform.
        assert_eq!(cur.current(), Some(&5));
        assert_eq!(cur.current(), Some(&5));
        assert!(cur.move_next().unwrap());
        assert!(!cur.move_next().unwrap());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_filter_retains_last_match_after_exhaustion() {
        let view = ItemsSeq::of(vec![1, 2, 3, 4]).filter(|x: &i32| x % 2 == 0);
        let mut cur = view.cursor();
        assert!(cur.move_next().unwrap());
        assert_eq!(cur.current(), Some(&2));
        assert!(cur.move_next().unwrap());
        assert_eq!(cur.current(), Some(&4));
        assert!(!cur.move_next().unwrap());
        // The trailing odd elements must not leak into `current`.
        assert_eq!(cur.current(), Some(&4));
    }

    #[test]
    fn test_expand_flattens_and_skips_empty() {
        let view = ItemsSeq::of(vec![0usize, 2, 0, 3]).expand(|n: &usize| {
            ItemsSeq::of(vec![*n; *n])
        });
        assert_eq!(view.to_list().unwrap().to_vec(), vec![2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_take_and_take_while() {
        let src = ItemsSeq::of(vec![1, 2, 3, 4, 1]);
        assert_eq!(src.clone().take(2).to_list().unwrap().to_vec(), vec![1, 2]);
        assert_eq!(
            src.clone().take(10).to_list().unwrap().to_vec(),
            vec![1, 2, 3, 4, 1]
        );
        assert_eq!(src.clone().take(0).count().unwrap(), 0);

        // take_while stops permanently at the first failure; the trailing 1
        // is not produced even though it satisfies the predicate.
        assert_eq!(
            src.take_while(|x: &i32| *x < 3).to_list().unwrap().to_vec(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_skip_and_skip_while() {
        let src = ItemsSeq::of(vec![1, 2, 3, 4, 1]);
        assert_eq!(
            src.clone().skip(2).to_list().unwrap().to_vec(),
            vec![3, 4, 1]
        );
        assert_eq!(src.clone().skip(10).count().unwrap(), 0);
        assert_eq!(
            src.skip_while(|x: &i32| *x < 3)
                .to_list()
                .unwrap()
                .to_vec(),
            vec![3, 4, 1]
        );
    }

    #[test]
    fn test_take_cursor_repeatable_after_stop() {
        let view = ItemsSeq::of(vec![7, 8, 9]).take(1);
        let mut cur = view.cursor();
        assert!(cur.move_next().unwrap());
        assert!(!cur.move_next().unwrap());
        assert!(!cur.move_next().unwrap());
        assert_eq!(cur.current(), Some(&7));
    }

    #[test]
    fn test_chained_views_compose() {
        let out = ItemsSeq::of(vec![1, 2, 3, 4, 5, 6])
            .filter(|x: &i32| x % 2 == 0)
            .map(|x: &i32| x * x)
            .skip(1)
            .to_list()
            .unwrap();
        assert_eq!(out.to_vec(), vec![16, 36]);
    }
}
