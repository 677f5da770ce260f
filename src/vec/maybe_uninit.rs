// Invariants for the `unsafe-maybe-uninit` backend:
// - `0 <= len <= N` always holds.
// - Elements in `buf[..len]` are initialized `T` values, each owned exactly once.
// - Elements in `buf[len..N]` are logically uninitialized and must never be
//   read or dropped as `T`.
// - `len` is updated before a value is moved out of a slot, so a panic in
//   `T::drop` cannot cause a double drop.
// - All public methods maintain these invariants.

mod access;
mod drop;
mod new;
mod pop;
mod push;
mod slice;

/// One storage slot: uninitialized when vacant.
pub(crate) type Slot<T> = core::mem::MaybeUninit<T>;
