// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle probes for tests: elements that record their clones and drops.

// Imports
use alloc::vec::Vec;
use core::{
    cell::{Cell, RefCell},
    fmt,
};

/// Shared record of what happened to every [`Probe`] created from it.
#[derive(Default)]
pub(crate) struct Ledger {
    clones: Cell<usize>,
    dropped: RefCell<Vec<i32>>,
    clone_budget: Cell<Option<usize>>,
}

impl Ledger {
    pub(crate) fn probe(&self, id: i32) -> Probe<'_> {
        Probe { id, ledger: self }
    }

    pub(crate) fn clones(&self) -> usize {
        self.clones.get()
    }

    pub(crate) fn drops(&self) -> usize {
        self.dropped.borrow().len()
    }

    /// Ids in the order their probes were dropped.
    pub(crate) fn dropped_ids(&self) -> Vec<i32> {
        self.dropped.borrow().clone()
    }

    /// Lets `n` more clones succeed; the next one panics.
    pub(crate) fn fail_after(&self, n: usize) {
        self.clone_budget.set(Some(n));
    }

    pub(crate) fn allow_clones(&self) {
        self.clone_budget.set(None);
    }
}

pub(crate) struct Probe<'a> {
    pub(crate) id: i32,
    ledger: &'a Ledger,
}

impl Clone for Probe<'_> {
    fn clone(&self) -> Self {
        if let Some(left) = self.ledger.clone_budget.get() {
            if left == 0 {
                panic!("clone budget exhausted at probe {}", self.id);
            }
            self.ledger.clone_budget.set(Some(left - 1));
        }
        self.ledger.clones.set(self.ledger.clones.get() + 1);
        Probe {
            id: self.id,
            ledger: self.ledger,
        }
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.ledger.dropped.borrow_mut().push(self.id);
    }
}

impl PartialEq for Probe<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Probe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe({})", self.id)
    }
}
