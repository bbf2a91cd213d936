// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Stable merge sort by link rearrangement.
//!
//! For the duration of the sort, the circle is treated as an open chain of
//! `next` links terminated by the sentinel handle; `prev` links are ignored
//! and rebuilt in one pass at the end.
//! Splitting walks a slow and a fast handle (two hops of fast per one hop of
//! slow) and cuts the chain after the slow one; merging always takes the
//! smaller head and prefers the left chain on ties, which keeps elements of
//! equal value in their original relative order.

use super::arena::{NodeId, SENTINEL};
use super::base::Ring;

impl<T: Ord> Ring<T> {
    /// Sorts the elements into ascending order.
    ///
    /// The sort is stable and rearranges links only: no element is created,
    /// destroyed, or moved to another slot.
    /// Recursion depth is *O*(log *n*); there is no auxiliary element
    /// storage.
    ///
    /// This operation computes in *O*(*n* log *n*) time.
    pub fn sort(&mut self) {
        if self.is_empty() || self.is_singular() {
            return;
        }

        // The `next` chain of a ring already ends at the sentinel handle, so
        // it can be sorted as an open chain as-is.
        let head = self.next_of(SENTINEL);
        let head = self.sort_chain(head);

        self.set_next(SENTINEL, head);
        self.rebuild_prev_links();
    }

    /// Sorts the open chain starting at `head` and returns its new head.
    fn sort_chain(&mut self, head: NodeId) -> NodeId {
        if head == SENTINEL || self.next_of(head) == SENTINEL {
            return head;
        }

        // Find the midpoint: `fast` advances two hops per one hop of `slow`,
        // so the chain is cut after the node `slow` ends up on.
        let mut slow = head;
        let mut fast = self.next_of(head);

        while fast != SENTINEL {
            fast = self.next_of(fast);
            if fast != SENTINEL {
                slow = self.next_of(slow);
                fast = self.next_of(fast);
            }
        }

        let right = self.next_of(slow);
        self.set_next(slow, SENTINEL);

        let left = self.sort_chain(head);
        let right = self.sort_chain(right);
        self.merge_chains(left, right)
    }

    /// Merges two sorted open chains into one and returns its head.
    ///
    /// The sentinel slot's `next` link serves as the scratch head of the
    /// output chain; it is rewritten by the caller afterwards anyway.
    fn merge_chains(&mut self, mut left: NodeId, mut right: NodeId) -> NodeId {
        let mut tail = SENTINEL;

        while left != SENTINEL && right != SENTINEL {
            // Ties take the left chain, keeping the sort stable.
            if self.get(left) <= self.get(right) {
                self.set_next(tail, left);
                tail = left;
                left = self.next_of(left);
            } else {
                self.set_next(tail, right);
                tail = right;
                right = self.next_of(right);
            }
        }

        let rest = if left != SENTINEL { left } else { right };
        self.set_next(tail, rest);

        self.next_of(SENTINEL)
    }
}
