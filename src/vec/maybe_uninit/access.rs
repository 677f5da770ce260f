// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedStackVec;

impl<T, const N: usize> FixedStackVec<T, N> {
    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns a reference to the element at `i` without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be less than `self.len()`. Calling this with `i >= len` is
    /// undefined behavior even if the result is unused.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.len, "get_unchecked index {i} >= len {}", self.len);
        // SAFETY: The caller guarantees `i < len`, and `buf[..len]` is
        // initialized by invariant.
        unsafe { self.buf.get_unchecked(i).assume_init_ref() }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `i` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len, "get_unchecked_mut index {i} >= len {}", self.len);
        // SAFETY: As in `get_unchecked`; `&mut self` gives exclusive access.
        unsafe { self.buf.get_unchecked_mut(i).assume_init_mut() }
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::FixedStackVec;

    #[test]
    fn test_unchecked_access_matches_checked() {
        let mut v: FixedStackVec<i32, 4> = FixedStackVec::from([1, 2, 3, 4]);
        for i in 0..v.len() {
            // SAFETY: i < len
            let x = unsafe { *v.get_unchecked(i) };
            assert_eq!(Some(&x), v.get(i));
        }
        // SAFETY: 2 < len
        unsafe { *v.get_unchecked_mut(2) = 30 };
        assert_eq!(v.as_slice(), &[1, 2, 30, 4]);
    }
}
