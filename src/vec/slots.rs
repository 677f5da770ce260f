// Invariants for the default (safe) backend:
// - `0 <= len <= N` always holds.
// - `buf[..len]` are all `Some`.
// - `buf[len..N]` are all `None`; a vacant slot owns nothing to drop.
// - All public methods maintain these invariants.

mod access;
mod new;
mod pop;
mod push;

/// One storage slot: `None` when vacant.
pub(crate) type Slot<T> = Option<T>;
