// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Fills slot `len` and grows `len`. Callers check `len < N` first.
    #[inline]
    pub(crate) fn write_back(&mut self, value: T) {
        self.buf[self.len] = Some(value);
        self.len += 1;
    }
}
