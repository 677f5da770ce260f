// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

impl<T, const N: usize> Drop for FixedStackVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}
