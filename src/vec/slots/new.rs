// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Constructs an empty vector with every slot vacant.
    ///
    /// Does not require `T: Default`; no `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { None }; N],
            len: 0,
        }
    }
}
