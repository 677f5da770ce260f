// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Removes and returns the last element if any.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, `buf[..old_len]` was initialized by
            // invariant, so `buf[self.len]` holds a `T`. Shrinking `len` first
            // hands ownership of that value to us; the slot is not read again.
            let out = unsafe { self.buf[self.len].assume_init_read() };
            Some(out)
        }
    }
}
