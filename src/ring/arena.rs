// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use alloc::vec;
use alloc::vec::Vec;

/// Stable handle to a slot of a [`Ring`](crate::ring::Ring)'s arena.
///
/// Handles are plain `u32` indexes, so they stay valid when the arena grows.
/// A handle addresses its element until that element is removed; afterwards
/// the slot may be handed out again by a later insertion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(u32);

/// Slot 0 of every arena: the sentinel of the circle.
pub(crate) const SENTINEL: NodeId = NodeId(0);

pub(crate) struct Slot<T> {
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
    pub(crate) value: Option<T>,
}

/// Growable slot storage with slot reuse.
///
/// Vacant slots are chained into a free list through their `next` link and
/// are handed out again before the backing `Vec` grows.
/// Slot 0 is the sentinel: allocated on construction, never vacated.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    /// First vacant slot, or [`SENTINEL`] if there is none.
    free: NodeId,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![Slot {
                next: SENTINEL,
                prev: SENTINEL,
                value: None,
            }],
            free: SENTINEL,
        }
    }

    /// Stores `value` in a vacant slot (or a fresh one) and returns its handle.
    ///
    /// The slot's links are self-referential until the caller splices it into
    /// the circle.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        if self.free == SENTINEL {
            let id = NodeId(self.slots.len() as u32);
            self.slots.push(Slot {
                next: id,
                prev: id,
                value: Some(value),
            });
            id
        } else {
            let id = self.free;
            let slot = &mut self.slots[id.0 as usize];
            self.free = slot.next;
            slot.next = id;
            slot.prev = id;
            slot.value = Some(value);
            id
        }
    }

    /// Vacates `id` and returns its payload, or `None` if the slot is already
    /// vacant or the sentinel.
    ///
    /// The caller is expected to have unlinked the slot from the circle first.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<T> {
        if id == SENTINEL {
            return None;
        }

        let slot = &mut self.slots[id.0 as usize];
        let value = slot.value.take()?;
        slot.next = self.free;
        self.free = id;
        Some(value)
    }

    /// Returns `true` if `id` currently addresses an element.
    pub(crate) fn occupied(&self, id: NodeId) -> bool {
        self.value(id).is_some()
    }

    /// Returns the payload of `id`, or `None` for a vacant or out-of-range
    /// slot and the sentinel.
    pub(crate) fn value(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0 as usize).and_then(|slot| slot.value.as_ref())
    }

    /// Returns the payload of `id` mutably, or `None` for a vacant or
    /// out-of-range slot and the sentinel.
    pub(crate) fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots
            .get_mut(id.0 as usize)
            .and_then(|slot| slot.value.as_mut())
    }

    pub(crate) fn slot(&self, id: NodeId) -> &Slot<T> {
        &self.slots[id.0 as usize]
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId) -> &mut Slot<T> {
        &mut self.slots[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_release() {
        let mut arena = Arena::new();

        let a = arena.alloc(1);
        let b = arena.alloc(2);

        assert!(arena.occupied(a));
        assert_eq!(arena.release(a), Some(1));
        assert!(!arena.occupied(a));

        // A vacated slot is handed out again before the arena grows.
        let c = arena.alloc(3);
        assert_eq!(c, a);

        assert_eq!(arena.release(b), Some(2));
        assert_eq!(arena.release(b), None);
    }

    #[test]
    fn test_sentinel_is_never_released() {
        let mut arena = Arena::<u32>::new();

        assert!(!arena.occupied(SENTINEL));
        assert_eq!(arena.release(SENTINEL), None);

        let a = arena.alloc(1);
        assert_ne!(a, SENTINEL);
    }
}
