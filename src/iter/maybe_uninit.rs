// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

// Core imports
use core::{iter::FusedIterator, slice};

/// Borrowing iterator returned by [`FixedStackVec::iter`].
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new<const N: usize>(v: &'a FixedStackVec<T, N>) -> Self {
        Self {
            inner: v.as_slice().iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth(n)
    }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth_back(n)
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator returned by [`FixedStackVec::iter_mut`].
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new<const N: usize>(v: &'a mut FixedStackVec<T, N>) -> Self {
        Self {
            inner: v.as_mut_slice().iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owned iterator returned by `FixedStackVec::into_iter()`.
///
/// Elements in `[front, back)` are still owned by the iterator and are
/// dropped with it.
pub struct IntoIter<T, const N: usize> {
    // `v.len` is zero, so `v`'s own drop releases nothing.
    v: FixedStackVec<T, N>,
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(mut v: FixedStackVec<T, N>) -> Self {
        let back = v.len;
        v.len = 0;
        Self { v, front: 0, back }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `buf[front..back)` were the live prefix handed over in
            // `new`; advancing `front` first means slot `i` is read once.
            Some(unsafe { self.v.buf[i].assume_init_read() })
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
            // SAFETY: as in `next`, with `back` shrunk before the read.
            Some(unsafe { self.v.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
