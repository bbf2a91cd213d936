// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A circular doubly linked list over an owning slot arena.
//!
//! Every [`Ring`] reserves slot 0 of its arena for a payload-free *sentinel*
//! that is permanently part of the circle.
//! An empty ring is the sentinel linked to itself; in a non-empty ring, the
//! sentinel's `next` link is the first element and its `prev` link is the
//! last element.
//! Keeping the sentinel in the circle means that inserting and removing at
//! either end are unconditional link rewrites with no special case for an
//! empty or single-element ring.
//!
//! Elements are addressed by [`NodeId`] handles into the arena instead of by
//! node addresses.
//! A handle stays valid for the lifetime of its element; once the element is
//! removed, the slot is recycled and the handle must no longer be used (the
//! accessors return `None` for a vacant slot, but a later insertion may
//! legitimately reuse it).
//!
//! ```
//! use ring_queue::Ring;
//!
//! let mut ring = Ring::new();
//!
//! let b = ring.push_back(2);
//! ring.push_back(3);
//! ring.push_front(1);
//!
//! assert_eq!(ring.remove(b), Some(2));
//! assert!(ring.iter().eq([1, 3].iter()));
//! ```
//!
//! Besides the link primitives, the ring carries the in-place restructuring
//! operations that only rewrite links and never move a payload:
//! [`reverse`](Ring::reverse), [`swap_pairs`](Ring::swap_pairs),
//! [`remove_duplicate_runs`](Ring::remove_duplicate_runs) and the stable
//! merge [`sort`](Ring::sort).

mod algo;
mod arena;
mod base;
mod sort;

pub use arena::NodeId;
pub use base::*;

#[cfg(test)]
pub(crate) use base::verify_all_links;
