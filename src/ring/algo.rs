// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! In-place restructuring of a ring.
//!
//! Each operation here only rewrites links; payloads are neither moved,
//! copied, nor reallocated (except where an operation deletes elements
//! outright).

use super::arena::SENTINEL;
use super::base::Ring;

impl<T> Ring<T> {
    /// Reverses the traversal order in place.
    ///
    /// Walks once around the circle, the sentinel included, and swaps each
    /// slot's `next` and `prev` links.
    /// Applying this twice restores the original order.
    ///
    /// This operation computes in *O*(*n*) time and never allocates.
    pub fn reverse(&mut self) {
        if self.is_empty() {
            return;
        }

        let mut current = SENTINEL;
        loop {
            let slot = self.arena.slot_mut(current);
            core::mem::swap(&mut slot.next, &mut slot.prev);

            // The old `next` link now sits in `prev`.
            current = slot.prev;
            if current == SENTINEL {
                break;
            }
        }
    }

    /// Exchanges each pair of adjacent elements, front to back.
    ///
    /// For n elements the pairs are (1,2), (3,4), …; an unpaired trailing
    /// element stays in place.
    /// A forward pass rewrites the `next` links pair by pair, then a second
    /// pass rebuilds every `prev` link from the new `next` chain.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn swap_pairs(&mut self) {
        let mut anchor = SENTINEL;
        loop {
            let first = self.next_of(anchor);
            if first == SENTINEL {
                break;
            }
            let second = self.next_of(first);
            if second == SENTINEL {
                break;
            }

            let rest = self.next_of(second);
            self.set_next(anchor, second);
            self.set_next(second, first);
            self.set_next(first, rest);
            anchor = first;
        }

        self.rebuild_prev_links();
    }

    /// Deletes every maximal run of two or more consecutive equal values,
    /// first member included, and returns the number of deleted elements.
    ///
    /// Meaningful as duplicate removal only on a ring sorted ascending, where
    /// equal values are guaranteed to be adjacent; on any other ring it still
    /// removes exactly the consecutive equal runs.
    /// Single occurrences survive.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn remove_duplicate_runs(&mut self) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut current = self.next_of(SENTINEL);

        while current != SENTINEL {
            let mut run_end = self.next_of(current);
            while run_end != SENTINEL && self.get(run_end) == self.get(current) {
                run_end = self.next_of(run_end);
            }

            if run_end != self.next_of(current) {
                // A run of at least two: delete all of its members and
                // resume at the first element past the run, which may open
                // a run of its own.
                let mut member = current;
                while member != run_end {
                    let next = self.next_of(member);
                    self.remove(member);
                    removed += 1;
                    member = next;
                }
            }

            current = run_end;
        }

        removed
    }

    /// Deletes the element `n` hops behind the first one and returns its
    /// payload, or `None` if the ring holds `n` or fewer elements.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn remove_nth(&mut self, n: usize) -> Option<T> {
        let mut id = self.next_of(SENTINEL);
        for _ in 0..n {
            if id == SENTINEL {
                return None;
            }
            id = self.next_of(id);
        }

        self.remove(id)
    }

    /// Walks the `next` chain from the sentinel around the circle and makes
    /// every `prev` link the inverse of the `next` link it answers to.
    pub(crate) fn rebuild_prev_links(&mut self) {
        let mut previous = SENTINEL;
        let mut current = self.next_of(SENTINEL);

        while current != SENTINEL {
            self.set_prev(current, previous);
            previous = current;
            current = self.next_of(current);
        }

        self.set_prev(SENTINEL, previous);
    }
}
