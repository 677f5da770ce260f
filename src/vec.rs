// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedStackVec` type and its inherent API.
//!
//! `FixedStackVec<T, N>` is a fixed-capacity vector whose `N` slots live inline
//! in the value itself. Each slot is either vacant or holds one live `T`; the
//! live slots always form the prefix `[0..len)`.
//!
//! The storage backend (what a "slot" is) is selected by the
//! `unsafe-maybe-uninit` feature. Everything in this file is written against
//! the small per-backend surface (`new`, `get`, `get_mut`, `write_back`,
//! `pop_back`) plus whole-slot moves on `buf`, so it is shared by both.
//!
//! No heap allocations are performed.

#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod slots;

#[cfg(feature = "unsafe-maybe-uninit")]
pub(crate) use maybe_uninit::Slot;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub(crate) use slots::Slot;

// Crate imports
use crate::{
    error::Error,
    iter::{Iter, IterMut},
    position::Position,
};

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A fixed-capacity, stack-allocated vector.
///
/// `FixedStackVec<T, N>` stores up to `N` elements inline and tracks a logical
/// length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - elements are constructed into a slot when pushed or inserted and dropped
///   exactly once when popped, erased, cleared, or when the vector drops;
/// - `T` needs no bounds to be stored; cloning the vector requires `T: Clone`;
/// - no heap allocations are performed.
///
/// # Contract checks
///
/// Exceeding the capacity is a programming error, not a recoverable
/// condition: [`push_back`](Self::push_back) and [`insert`](Self::insert)
/// panic when the vector is full. Use [`try_push_back`](Self::try_push_back)
/// or the `TryFrom`/[`try_from_iter`](Self::try_from_iter) constructors when
/// overflow is an expected input.
///
/// Indexing (`v[i]`, `v[pos]`), [`front`](Self::front), and
/// [`back`](Self::back) panic outside the live range. The checked
/// alternatives are [`get`](Self::get), [`first`](Self::first), and
/// [`last`](Self::last).
///
/// # Positions
///
/// Positional editing uses [`Position`] cursors obtained from
/// [`begin`](Self::begin) and [`end`](Self::end):
///
/// ```rust
/// use fixed_stack_vec::FixedStackVec;
///
/// let mut v: FixedStackVec<i32, 4> = FixedStackVec::new();
/// v.push_back(10);
/// v.push_back(20);
/// v.push_back(30);
/// assert_eq!((*v.front(), *v.back()), (10, 30));
///
/// v.insert(v.begin() + 1, 99);
/// assert!(v.iter().eq(&[10, 99, 20, 30]));
///
/// let next = v.erase(v.begin() + 2);
/// assert_eq!(v[next], 30);
/// assert!(v.iter().eq(&[10, 99, 30]));
/// ```
///
/// # Complexity
///
/// - The type size is roughly `N * size_of::<Slot<T>>() + O(1)`; moving the
///   vector copies all `N` slots, not just the live prefix.
/// - `push_back`, `pop_back`, indexing, and `swap_with` are `O(1)` in the
///   element count. `insert`, `erase`, `erase_range`, `retain`, and `clear`
///   are `O(len)`.
pub struct FixedStackVec<T, const N: usize> {
    pub(crate) buf: [Slot<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> FixedStackVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](Self::capacity); there is no growth strategy.
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Position of the first slot.
    #[inline]
    pub const fn begin(&self) -> Position {
        Position::new(0)
    }

    /// Position one past the last live element.
    #[inline]
    pub const fn end(&self) -> Position {
        Position::new(self.len)
    }

    /// Iterates over the live elements, front to back. Use `.rev()` for
    /// back-to-front traversal.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Mutable counterpart of [`iter`](Self::iter).
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(i) => self.get_mut(i),
            None => None,
        }
    }

    /// Returns the element in slot 0.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        &self[0]
    }

    /// Mutable counterpart of [`front`](Self::front).
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    /// Returns the element in slot `len - 1`.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.last() {
            Some(v) => v,
            None => crate::index::out_of_bounds(0, 0),
        }
    }

    /// Mutable counterpart of [`back`](Self::back).
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        let len = self.len;
        match self.last_mut() {
            Some(v) => v,
            None => crate::index::out_of_bounds(len, len),
        }
    }

    /// Returns `true` if any live element equals `x`.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == x)
    }
}

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Appends `value` at the back.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full (`len == N`).
    #[inline]
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        assert!(
            self.len < N,
            "capacity exceeded: len {}, capacity {}",
            self.len,
            N
        );
        self.write_back(value);
    }

    /// Appends `value` if there is room, otherwise hands it back in `Err`.
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<(), T> {
        if self.len == N {
            return Err(value);
        }
        self.write_back(value);
        Ok(())
    }

    /// Drops every live element, back to front. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Pops until `len <= new_len`; a no-op when already that short.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            let _ = self.pop_back();
        }
    }

    /// Inserts `value` before `pos`, shifting `[pos, end)` one slot right.
    ///
    /// Returns `pos`, which now denotes the inserted element. Inserting at
    /// [`end`](Self::end) is equivalent to [`push_back`](Self::push_back).
    ///
    /// # Panics
    ///
    /// Panics if the vector is full or `pos > end()`.
    #[track_caller]
    pub fn insert(&mut self, pos: Position, value: T) -> Position {
        let index = pos.index();
        assert!(
            index <= self.len,
            "insertion position {} is past the end (len {})",
            index,
            self.len
        );
        self.push_back(value);
        self.buf[index..self.len].rotate_right(1);
        pos
    }

    /// Removes the element at `pos`, shifting the tail one slot left.
    ///
    /// Returns `pos`, which now denotes the element that followed the erased
    /// one, or [`end`](Self::end) if the erased element was last.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= end()`.
    #[track_caller]
    pub fn erase(&mut self, pos: Position) -> Position {
        let index = pos.index();
        if index >= self.len {
            crate::index::out_of_bounds(index, self.len);
        }
        self.buf[index..self.len].rotate_left(1);
        let _ = self.pop_back();
        pos
    }

    /// Removes the half-open range `[first, last)`.
    ///
    /// The result is the same as erasing at `first` `last - first` times;
    /// an empty range is a no-op. Returns `first`, which now denotes the
    /// element that followed the range (or `end()`).
    ///
    /// # Panics
    ///
    /// Panics unless `first <= last <= end()`.
    #[track_caller]
    pub fn erase_range(&mut self, first: Position, last: Position) -> Position {
        let (start, stop) = (first.index(), last.index());
        assert!(
            start <= stop,
            "erase range starts at {} but ends at {}",
            start,
            stop
        );
        assert!(
            stop <= self.len,
            "erase range end {} exceeds length {}",
            stop,
            self.len
        );
        let count = stop - start;
        if count > 0 {
            self.buf[start..self.len].rotate_left(count);
            self.truncate(self.len - count);
        }
        first
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.buf[index..self.len].rotate_left(1);
        self.pop_back()
    }

    /// Fallible variant of [`remove`](Self::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Retains only the elements for which `f` returns `true`, preserving
    /// their order. Rejected elements are dropped.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut kept = 0;
        for read in 0..self.len {
            if self.get(read).is_some_and(&mut f) {
                self.buf.swap(kept, read);
                kept += 1;
            }
        }
        self.truncate(kept);
    }

    /// Exchanges the contents of `self` and `other`.
    ///
    /// Storage and length are swapped wholesale; no element is cloned or
    /// dropped.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Appends clones of all of `src` if it fits; otherwise leaves `self`
    /// unchanged and returns [`Error::Full`].
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.spare_capacity() {
            return Err(Error::Full);
        }
        for item in src {
            self.write_back(item.clone());
        }
        Ok(())
    }

    /// Builds a vector from an iterator, erroring with [`Error::Full`] if it
    /// yields more than `N` items.
    ///
    /// Items pushed before the overflow are dropped; the source iterator is
    /// left consumed up to and including the first item that did not fit.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            v.try_push_back(item).map_err(|_| Error::Full)?;
        }
        Ok(v)
    }
}

impl<T, const N: usize> Default for FixedStackVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for FixedStackVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self {
            out.write_back(item.clone());
        }
        out
    }

    /// Clones `source` into a temporary and swaps it in, so a panicking
    /// `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        self.swap_with(&mut tmp);
    }
}

impl<T, const N: usize> From<[T; N]> for FixedStackVec<T, N> {
    fn from(src: [T; N]) -> Self {
        let mut v = Self::new();
        for item in src {
            v.write_back(item);
        }
        v
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedStackVec<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

impl<T, const N: usize> Extend<T> for FixedStackVec<T, N> {
    /// Appends items until the vector is full; remaining items are not consumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let spare = self.spare_capacity();
        for item in iter.into_iter().take(spare) {
            self.write_back(item);
        }
    }
}

impl<T, const N: usize> FromIterator<T> for FixedStackVec<T, N> {
    /// Takes at most the first `N` items and does not consume any further.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

struct Elements<'a, T, const N: usize>(&'a FixedStackVec<T, N>);

impl<T: fmt::Debug, const N: usize> fmt::Debug for Elements<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedStackVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedStackVec")
            .field("len", &self.len)
            .field("elements", &Elements(self))
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedStackVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
impl<T: Eq, const N: usize> Eq for FixedStackVec<T, N> {}
impl<T: Ord, const N: usize> Ord for FixedStackVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for FixedStackVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}
impl<T: Hash, const N: usize> Hash for FixedStackVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}


#[cfg(test)]
mod proptests {
    // Imports
    use super::FixedStackVec;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    const CAP: usize = 16;

    #[derive(Debug, Clone)]
    enum Op {
        Push(u16),
        Pop,
        Insert(usize, u16),
        Erase(usize),
        EraseRange(usize, usize),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<u16>().prop_map(Op::Push),
            1 => Just(Op::Pop),
            3 => (any::<usize>(), any::<u16>()).prop_map(|(i, x)| Op::Insert(i, x)),
            2 => any::<usize>().prop_map(Op::Erase),
            1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::EraseRange(a, b)),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        /// Property: push_back grows len by one and keeps push order
        #[test]
        fn push_keeps_order(values in prop::collection::vec(any::<u32>(), 0..=CAP)) {
            let mut v: FixedStackVec<u32, CAP> = FixedStackVec::new();
            for (i, &x) in values.iter().enumerate() {
                prop_assert_eq!(v.len(), i);
                v.push_back(x);
                prop_assert_eq!(v.len() + v.spare_capacity(), CAP);
            }
            prop_assert!(v.iter().eq(values.iter()));
        }

        /// Property: every edit sequence agrees with a `Vec` model
        #[test]
        fn edits_match_vec_model(ops in prop::collection::vec(op(), 0..64)) {
            let mut v: FixedStackVec<u16, CAP> = FixedStackVec::new();
            let mut model: Vec<u16> = Vec::new();

            for op in ops {
                match op {
                    Op::Push(x) => {
                        let accepted = v.try_push_back(x).is_ok();
                        prop_assert_eq!(accepted, model.len() < CAP);
                        if accepted {
                            model.push(x);
                        }
                    }
                    Op::Pop => prop_assert_eq!(v.pop_back(), model.pop()),
                    Op::Insert(i, x) => {
                        if model.len() < CAP {
                            let k = i % (model.len() + 1);
                            let pos = v.insert(v.begin() + k, x);
                            model.insert(k, x);
                            prop_assert_eq!(pos.index(), k);
                        }
                    }
                    Op::Erase(i) => {
                        if !model.is_empty() {
                            let k = i % model.len();
                            let pos = v.erase(v.begin() + k);
                            model.remove(k);
                            prop_assert_eq!(pos.index(), k);
                        }
                    }
                    Op::EraseRange(a, b) => {
                        let a = a % (model.len() + 1);
                        let b = b % (model.len() + 1);
                        let (first, last) = (a.min(b), a.max(b));
                        let pos = v.erase_range(v.begin() + first, v.begin() + last);
                        model.drain(first..last).for_each(drop);
                        prop_assert_eq!(pos.index(), first);
                    }
                    Op::Clear => {
                        v.clear();
                        model.clear();
                    }
                }
                prop_assert_eq!(v.len(), model.len());
                prop_assert!(v.iter().eq(model.iter()));
            }
        }

        /// Property: clone equals the original and does not alias it
        #[test]
        fn clone_is_independent(values in prop::collection::vec(any::<i64>(), 1..=CAP)) {
            let original: FixedStackVec<i64, CAP> = values.iter().copied().collect();
            let mut copy = original.clone();
            prop_assert_eq!(&copy, &original);
            let bumped = copy.front().wrapping_add(1);
            *copy.front_mut() = bumped;
            prop_assert!(original.iter().eq(values.iter()));
        }
    }
}
