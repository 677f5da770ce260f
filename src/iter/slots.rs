// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

// Core imports
use core::{iter::FusedIterator, slice};

/// Borrowing iterator returned by [`FixedStackVec::iter`].
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new<const N: usize>(v: &'a FixedStackVec<T, N>) -> Self {
        Self {
            slots: v.buf[..v.len].iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.slots.next()?.as_ref()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.slots.nth(n)?.as_ref()
    }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.slots.next_back()?.as_ref()
    }
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        self.slots.nth_back(n)?.as_ref()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator returned by [`FixedStackVec::iter_mut`].
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new<const N: usize>(v: &'a mut FixedStackVec<T, N>) -> Self {
        Self {
            slots: v.buf[..v.len].iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.slots.next()?.as_mut()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}
impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.slots.next_back()?.as_mut()
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owned iterator returned by `FixedStackVec::into_iter()`.
///
/// Takes elements out of their slots; whatever is left is dropped with the
/// iterator.
pub struct IntoIter<T, const N: usize> {
    buf: [Option<T>; N],
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(v: FixedStackVec<T, N>) -> Self {
        let FixedStackVec { buf, len } = v;
        Self {
            buf,
            front: 0,
            back: len,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            self.buf[i].take()
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}
impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            self.buf[self.back].take()
        } else {
            None
        }
    }
}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
