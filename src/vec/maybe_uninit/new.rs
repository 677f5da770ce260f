// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Constructs an empty vector. The backing buffer is left uninitialized.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }
}
