// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Writes `value` into slot `len` and grows `len`. Callers check `len < N`
    /// first; the slot index is still bounds-checked.
    #[inline]
    pub(crate) fn write_back(&mut self, value: T) {
        self.buf[self.len].write(value);
        self.len += 1;
    }
}
