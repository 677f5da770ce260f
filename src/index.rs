// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedStackVec`](crate::FixedStackVec).
//!
//! - `v[i]` and `v[pos]` panic when the index is outside `[0..len)`, like
//!   slice indexing; [`get`](crate::FixedStackVec::get) is the checked form.
//! - With `unsafe-maybe-uninit`, all standard range forms index into the live
//!   prefix and return slices.

// Crate imports
use crate::{position::Position, vec::FixedStackVec};

// Core imports
use core::ops::{Index, IndexMut};

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T, const N: usize> Index<usize> for FixedStackVec<T, N> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Some(v) => v,
            None => out_of_bounds(i, self.len),
        }
    }
}
impl<T, const N: usize> IndexMut<usize> for FixedStackVec<T, N> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(i) {
            Some(v) => v,
            None => out_of_bounds(i, len),
        }
    }
}

impl<T, const N: usize> Index<Position> for FixedStackVec<T, N> {
    type Output = T;
    #[track_caller]
    fn index(&self, pos: Position) -> &T {
        &self[pos.index()]
    }
}
impl<T, const N: usize> IndexMut<Position> for FixedStackVec<T, N> {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        &mut self[pos.index()]
    }
}

/// Implements [`Index`] and [`IndexMut`] for a range type via the live slice.
#[cfg(feature = "unsafe-maybe-uninit")]
macro_rules! index_range_impl {
    ($($range:ty),* $(,)?) => {
        $(
            impl<T, const N: usize> Index<$range> for FixedStackVec<T, N> {
                type Output = [T];
                #[track_caller]
                fn index(&self, r: $range) -> &[T] {
                    &self.as_slice()[r]
                }
            }
            impl<T, const N: usize> IndexMut<$range> for FixedStackVec<T, N> {
                #[track_caller]
                fn index_mut(&mut self, r: $range) -> &mut [T] {
                    &mut self.as_mut_slice()[r]
                }
            }
        )*
    };
}

#[cfg(feature = "unsafe-maybe-uninit")]
index_range_impl!(
    core::ops::Range<usize>,
    core::ops::RangeFrom<usize>,
    core::ops::RangeTo<usize>,
    core::ops::RangeInclusive<usize>,
    core::ops::RangeToInclusive<usize>,
    core::ops::RangeFull,
);
