// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-stack-vec`
//!
//! A `no_std`, fixed-capacity, stack-allocated vector for any element type,
//! **with no `unsafe` by default**.
//!
//! The core type, [`FixedStackVec<T, N>`], stores up to `N` elements inline
//! and tracks a logical length `len ∈ 0..=N`. Elements are constructed into
//! a slot when pushed or inserted and dropped exactly once when they leave
//! the vector; slots past `len` hold nothing.
//!
//! ## When to use this crate
//!
//! - You are in a `no_std` or embedded environment, or want no allocation.
//! - You know the maximum element count at compile time.
//! - You want a sequence with positional `insert`/`erase` and value
//!   semantics (`Clone`, `clone_from`, `swap_with`) over non-`Copy` data.
//!
//! It may not be the best fit if you need growth past `N`, or very large
//! capacities (moving a `FixedStackVec` copies all `N` slots).
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `unsafe-maybe-uninit` feature
//! flag:
//!
//! - **Default backend (safe)**:
//!   - Each slot is an `Option<T>`; `None` marks a vacant slot.
//!   - The crate is `no_std` and `#![forbid(unsafe_code)]` (outside tests).
//!   - Elements are reachable through [`get`](FixedStackVec::get), indexing,
//!     and iterators, but not as a contiguous `&[T]`.
//!
//! - **`unsafe-maybe-uninit` backend**:
//!   - Each slot is a `MaybeUninit<T>`; only `[0..len)` is initialized.
//!   - A small amount of internal `unsafe` manages slot lifetimes.
//!   - Adds slice views ([`as_slice`](FixedStackVec::as_slice),
//!     `Deref<Target = [T]>`, range indexing) and the unchecked accessors
//!     [`get_unchecked`](FixedStackVec::get_unchecked) /
//!     [`get_unchecked_mut`](FixedStackVec::get_unchecked_mut).
//!
//! Neither backend requires `T: Default`.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `FixedStackVec<T, N>` as a
//!   sequence of at most `N` elements.
//! - `unsafe-maybe-uninit`: see above.
//!
//! ## Capacity and bounds
//!
//! Exceeding the capacity is treated as a programming error:
//! [`push_back`](FixedStackVec::push_back) and
//! [`insert`](FixedStackVec::insert) **panic** on a full vector. Out-of-range
//! indexing, [`front`](FixedStackVec::front)/[`back`](FixedStackVec::back) on
//! an empty vector, and invalid positions panic too.
//!
//! Where overflow is an expected input, use the fallible forms:
//! [`try_push_back`](FixedStackVec::try_push_back) (hands the value back),
//! [`TryFrom<&[T]>`], [`FixedStackVec::try_from_iter`], and
//! [`FixedStackVec::extend_from_slice`], which return [`Error::Full`].
//! Collecting (`FromIterator`) and `Extend` take at most the items that fit
//! and leave the rest of the iterator unconsumed.
//!
//! ## Example
//!
//! ```rust
//! use fixed_stack_vec::FixedStackVec;
//!
//! let mut v: FixedStackVec<String, 4> = FixedStackVec::new();
//! v.push_back("a".to_string());
//! v.push_back("c".to_string());
//! v.insert(v.begin() + 1, "b".to_string());
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.back(), "c");
//!
//! let copy = v.clone();
//! v.erase_range(v.begin(), v.begin() + 2);
//! assert_eq!(v.iter().collect::<Vec<_>>(), ["c"]);
//! assert_eq!(copy.len(), 3);
//! ```

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod position;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};
pub use position::Position;
pub use vec::FixedStackVec;
