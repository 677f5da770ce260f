// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random-access positions into a [`FixedStackVec`](crate::FixedStackVec).
//!
//! A [`Position`] is a slot index. It does not borrow the vector, so it can be
//! obtained from [`begin`](crate::FixedStackVec::begin) /
//! [`end`](crate::FixedStackVec::end), moved around with ordinary arithmetic,
//! and handed back to [`insert`](crate::FixedStackVec::insert) or
//! [`erase`](crate::FixedStackVec::erase).
//!
//! Any operation that changes the length or reorders elements logically
//! invalidates previously obtained positions, except the one it returns.

// Core imports
use core::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A cursor denoting one slot of a [`FixedStackVec`](crate::FixedStackVec).
///
/// `begin() + v.len() == end()`. Positions compare by slot index, and the
/// difference of two positions is the signed distance between them.
///
/// ```rust
/// use fixed_stack_vec::FixedStackVec;
///
/// let mut v: FixedStackVec<i32, 4> = FixedStackVec::new();
/// v.push_back(1);
/// v.push_back(3);
///
/// let pos = v.insert(v.begin() + 1, 2);
/// assert_eq!(v[pos], 2);
/// assert_eq!(v.end() - v.begin(), 3);
/// assert!(pos < v.end());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The slot index this position denotes.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The following position.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The preceding position.
    ///
    /// # Panics
    ///
    /// Panics in debug builds when called on the first slot.
    #[inline]
    #[must_use]
    pub const fn prev(self) -> Self {
        Self(self.0 - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> usize {
        pos.0
    }
}

impl Add<usize> for Position {
    type Output = Position;
    fn add(self, rhs: usize) -> Position {
        Position(self.0 + rhs)
    }
}

impl AddAssign<usize> for Position {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sub<usize> for Position {
    type Output = Position;
    fn sub(self, rhs: usize) -> Position {
        Position(self.0 - rhs)
    }
}

impl SubAssign<usize> for Position {
    fn sub_assign(&mut self, rhs: usize) {
        self.0 -= rhs;
    }
}

/// Signed distance from `rhs` to `self`.
impl Sub<Position> for Position {
    type Output = isize;
    fn sub(self, rhs: Position) -> isize {
        if self.0 >= rhs.0 {
            (self.0 - rhs.0) as isize
        } else {
            -((rhs.0 - self.0) as isize)
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Position;
    use alloc::string::ToString;

    #[test]
    fn test_arithmetic() {
        let mut p = Position::new(2);
        assert_eq!((p + 3).index(), 5);
        assert_eq!((p - 2).index(), 0);
        p += 4;
        assert_eq!(p.index(), 6);
        p -= 1;
        assert_eq!(p.index(), 5);
        assert_eq!(p.next().index(), 6);
        assert_eq!(p.prev().index(), 4);
    }

    #[test]
    fn test_difference_is_signed() {
        let a = Position::new(1);
        let b = Position::new(4);
        assert_eq!(b - a, 3);
        assert_eq!(a - b, -3);
        assert_eq!(a - a, 0);
    }

    #[test]
    fn test_ordering() {
        let a = Position::new(1);
        let b = Position::new(2);
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_display_and_into_usize() {
        let p = Position::new(7);
        assert_eq!(p.to_string(), "@7");
        let i: usize = p.into();
        assert_eq!(i, 7);
        assert_eq!(Position::default().index(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_prev_of_first_panics_in_debug() {
        let _ = Position::new(0).prev();
    }
}
