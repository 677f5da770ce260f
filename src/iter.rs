// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedStackVec`](crate::FixedStackVec).
//!
//! - [`Iter`] / [`IterMut`] borrow the live prefix front to back.
//! - [`IntoIter`] yields by value; elements it never yields are dropped with it.
//! - All three are `DoubleEndedIterator`, `ExactSizeIterator`, and
//!   `FusedIterator`; reverse traversal is `.rev()`.

#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod slots;

#[cfg(feature = "unsafe-maybe-uninit")]
pub use maybe_uninit::{IntoIter, Iter, IterMut};
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub use slots::{IntoIter, Iter, IterMut};

// Crate imports
use crate::vec::FixedStackVec;

impl<'a, T, const N: usize> IntoIterator for &'a FixedStackVec<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedStackVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for FixedStackVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedStackVec;
    use crate::testing::Ledger;
    use alloc::vec::Vec;

    #[test]
    fn test_forward_and_reverse() {
        let v: FixedStackVec<i32, 6> = FixedStackVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
        assert_eq!(v.iter().len(), 4);
        assert_eq!(v.iter().nth(2), Some(&3));
        assert_eq!(v.iter().nth_back(0), Some(&4));
    }

    #[test]
    fn test_iter_mut_and_ref_into_iter() {
        let mut v: FixedStackVec<i32, 4> = FixedStackVec::try_from(&[1, 2, 3][..]).unwrap();
        for x in &mut v {
            *x *= 10;
        }
        for x in v.iter_mut().rev().take(1) {
            *x += 1;
        }
        let mut collected = Vec::new();
        for x in &v {
            collected.push(*x);
        }
        assert_eq!(collected, [10, 20, 31]);
    }

    #[test]
    fn test_into_iter_double_ended() {
        let v: FixedStackVec<i32, 6> = FixedStackVec::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let v: FixedStackVec<i32, 6> = FixedStackVec::try_from(&[1, 2, 3][..]).unwrap();
        let mut it = v.iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.next_back();
        assert_eq!(it.len(), 1);
    }

    #[test]
    fn test_into_iter_drops_unyielded_elements() {
        let ledger = Ledger::default();
        let mut v: FixedStackVec<_, 5> = FixedStackVec::new();
        for id in 1..=4 {
            v.push_back(ledger.probe(id));
        }

        let mut it = v.into_iter();
        let first = it.next().unwrap();
        let last = it.next_back().unwrap();
        assert_eq!((first.id, last.id), (1, 4));
        assert_eq!(ledger.drops(), 0);

        drop(it);
        assert_eq!(ledger.drops(), 2);
        drop((first, last));
        assert_eq!(ledger.drops(), 4);
    }

    #[test]
    fn test_empty_and_zero_capacity() {
        let v: FixedStackVec<u8, 0> = FixedStackVec::default();
        assert_eq!(v.iter().next(), None);
        let mut it = v.into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_iter_is_clone() {
        let v: FixedStackVec<i32, 3> = FixedStackVec::from([1, 2, 3]);
        let mut it = v.iter();
        it.next();
        let rest: Vec<_> = it.clone().copied().collect();
        assert_eq!(rest, [2, 3]);
        assert_eq!(it.count(), 2);
    }
}
