// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::iter::FusedIterator;

use super::arena::{Arena, NodeId, SENTINEL};

/// A circular doubly linked list whose nodes live in an owning slot arena.
///
/// The fixed sentinel slot closes the circle, so `sentinel.next` is the first
/// element and `sentinel.prev` the last one whenever the ring is non-empty.
/// All edge insertions and removals are O(1) link rewrites.
///
/// See the [module-level documentation](crate::ring) for more details.
pub struct Ring<T> {
    pub(crate) arena: Arena<T>,
}

impl<T> Ring<T> {
    /// Creates a new empty ring: a self-looped sentinel and no elements.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Returns `true` if the ring has no elements.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.next_of(SENTINEL) == SENTINEL
    }

    /// Returns `true` if the ring has exactly one element.
    ///
    /// This is the two-hop check: the first element exists and is also the
    /// last one.
    pub fn is_singular(&self) -> bool {
        let first = self.next_of(SENTINEL);
        first != SENTINEL && first == self.prev_of(SENTINEL)
    }

    /// Inserts `value` directly after the sentinel and returns its handle.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.arena.alloc(value);
        let first = self.next_of(SENTINEL);
        self.link_between(id, SENTINEL, first);
        id
    }

    /// Inserts `value` directly before the sentinel and returns its handle.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = self.arena.alloc(value);
        let last = self.prev_of(SENTINEL);
        self.link_between(id, last, SENTINEL);
        id
    }

    /// Removes the first element and returns its payload, or `None` if the
    /// ring is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(self.next_of(SENTINEL))
    }

    /// Removes the last element and returns its payload, or `None` if the
    /// ring is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove(self.prev_of(SENTINEL))
    }

    /// Unlinks the element addressed by `id` and returns its payload.
    ///
    /// Returns `None` if `id` does not currently address an element
    /// (the sentinel and vacant slots included), leaving the ring untouched.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.arena.occupied(id) {
            return None;
        }

        let prev = self.prev_of(id);
        let next = self.next_of(id);
        self.set_next(prev, next);
        self.set_prev(next, prev);
        self.arena.release(id)
    }

    /// Provides a reference to the payload of `id`, or `None` for a vacant
    /// slot or the sentinel.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.arena.value(id)
    }

    /// Provides a mutable reference to the payload of `id`, or `None` for a
    /// vacant slot or the sentinel.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.value_mut(id)
    }

    /// Provides a reference to the first element, or `None` if the ring is
    /// empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        self.get(self.next_of(SENTINEL))
    }

    /// Provides a mutable reference to the first element, or `None` if the
    /// ring is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.next_of(SENTINEL))
    }

    /// Provides a reference to the last element, or `None` if the ring is
    /// empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back(&self) -> Option<&T> {
        self.get(self.prev_of(SENTINEL))
    }

    /// Provides a mutable reference to the last element, or `None` if the
    /// ring is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.prev_of(SENTINEL))
    }

    /// Returns the handle of the first element, or `None` if the ring is
    /// empty.
    pub fn front_id(&self) -> Option<NodeId> {
        let first = self.next_of(SENTINEL);
        (first != SENTINEL).then(|| first)
    }

    /// Returns the handle of the last element, or `None` if the ring is
    /// empty.
    pub fn back_id(&self) -> Option<NodeId> {
        let last = self.prev_of(SENTINEL);
        (last != SENTINEL).then(|| last)
    }

    /// Returns the handle of the element following `id`, or `None` if `id` is
    /// the last element or does not address an element.
    pub fn next_id(&self, id: NodeId) -> Option<NodeId> {
        if !self.arena.occupied(id) {
            return None;
        }

        let next = self.next_of(id);
        (next != SENTINEL).then(|| next)
    }

    /// Returns the handle of the element preceding `id`, or `None` if `id` is
    /// the first element or does not address an element.
    pub fn prev_id(&self, id: NodeId) -> Option<NodeId> {
        if !self.arena.occupied(id) {
            return None;
        }

        let prev = self.prev_of(id);
        (prev != SENTINEL).then(|| prev)
    }

    /// Counts all elements and returns the length of the ring.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the ring, releasing their payloads and
    /// recycling their slots.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        let mut current = self.next_of(SENTINEL);
        self.set_next(SENTINEL, SENTINEL);
        self.set_prev(SENTINEL, SENTINEL);

        while current != SENTINEL {
            let next = self.next_of(current);
            self.arena.release(current);
            current = next;
        }
    }

    /// Returns an iterator yielding references to each element of the ring.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            ring: self,
            front: self.next_of(SENTINEL),
            back: self.prev_of(SENTINEL),
        }
    }

    /// Returns an iterator yielding mutable references to each element of the
    /// ring.
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let front = self.next_of(SENTINEL);
        let back = self.prev_of(SENTINEL);

        IterMut {
            ring: self,
            front,
            back,
        }
    }

    pub(crate) fn next_of(&self, id: NodeId) -> NodeId {
        self.arena.slot(id).next
    }

    pub(crate) fn prev_of(&self, id: NodeId) -> NodeId {
        self.arena.slot(id).prev
    }

    pub(crate) fn set_next(&mut self, id: NodeId, to: NodeId) {
        self.arena.slot_mut(id).next = to;
    }

    pub(crate) fn set_prev(&mut self, id: NodeId, to: NodeId) {
        self.arena.slot_mut(id).prev = to;
    }

    /// Splices `id` into the circle between `prev` and `next`.
    fn link_between(&mut self, id: NodeId, prev: NodeId, next: NodeId) {
        self.set_next(id, next);
        self.set_prev(id, prev);
        self.set_next(prev, id);
        self.set_prev(next, id);
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the elements of a ring.
///
/// This iterator is returned from the [`Ring::iter`] function.
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    front: NodeId,
    back: NodeId,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == SENTINEL {
            return None;
        }

        let id = self.front;

        if self.front == self.back {
            // We are crossing the other end of the iterator and must not
            // iterate any further.
            self.front = SENTINEL;
            self.back = SENTINEL;
        } else {
            self.front = self.ring.next_of(id);
        }

        self.ring.get(id)
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.back == SENTINEL {
            return None;
        }

        let id = self.back;

        if self.back == self.front {
            // We are crossing the other end of the iterator and must not
            // iterate any further.
            self.front = SENTINEL;
            self.back = SENTINEL;
        } else {
            self.back = self.ring.prev_of(id);
        }

        self.ring.get(id)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Mutable iterator over the elements of a ring.
///
/// This iterator is returned from the [`Ring::iter_mut`] function.
pub struct IterMut<'a, T> {
    ring: &'a mut Ring<T>,
    front: NodeId,
    back: NodeId,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.front == SENTINEL {
            return None;
        }

        let id = self.front;

        if self.front == self.back {
            // We are crossing the other end of the iterator and must not
            // iterate any further.
            self.front = SENTINEL;
            self.back = SENTINEL;
        } else {
            self.front = self.ring.next_of(id);
        }

        // Detach the lifetime from `self`: every slot is visited exactly
        // once, so no two yielded references alias.
        self.ring
            .get_mut(id)
            .map(|value| unsafe { &mut *(value as *mut T) })
    }

    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.back == SENTINEL {
            return None;
        }

        let id = self.back;

        if self.back == self.front {
            // We are crossing the other end of the iterator and must not
            // iterate any further.
            self.front = SENTINEL;
            self.back = SENTINEL;
        } else {
            self.back = self.ring.prev_of(id);
        }

        // Detach the lifetime from `self`: every slot is visited exactly
        // once, so no two yielded references alias.
        self.ring
            .get_mut(id)
            .map(|value| unsafe { &mut *(value as *mut T) })
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// Walks the circle in both directions and asserts that every `prev`/`next`
/// pair is mutually inverse and that both walks visit the same slots in
/// mirrored order.
#[cfg(test)]
pub(crate) fn verify_all_links<T>(ring: &Ring<T>) {
    use alloc::vec::Vec;

    let mut forward = Vec::new();
    let mut current = ring.next_of(SENTINEL);
    let mut previous = SENTINEL;

    while current != SENTINEL {
        assert_eq!(ring.prev_of(current), previous);
        assert!(ring.arena.occupied(current));
        forward.push(current);
        previous = current;
        current = ring.next_of(current);
    }

    assert_eq!(ring.prev_of(SENTINEL), previous);

    let mut backward = Vec::new();
    current = ring.prev_of(SENTINEL);
    previous = SENTINEL;

    while current != SENTINEL {
        assert_eq!(ring.next_of(current), previous);
        backward.push(current);
        previous = current;
        current = ring.prev_of(current);
    }

    assert_eq!(ring.next_of(SENTINEL), previous);

    backward.reverse();
    assert_eq!(forward, backward);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_new_ring_is_empty() {
        let ring = Ring::<i32>::new();

        assert!(ring.is_empty());
        assert!(!ring.is_singular());
        assert_eq!(ring.len(), 0);
        assert!(ring.front().is_none());
        assert!(ring.back().is_none());
        verify_all_links(&ring);
    }

    #[test]
    fn test_push_back() {
        let mut ring = Ring::new();

        for i in 0..10 {
            ring.push_back(i);
            verify_all_links(&ring);
        }

        assert_eq!(ring.len(), 10);

        for (i, element) in (0..10).zip(ring.iter()) {
            assert_eq!(i, *element);
        }
    }

    #[test]
    fn test_push_front() {
        let mut ring = Ring::new();

        for i in 0..10 {
            ring.push_front(i);
            verify_all_links(&ring);
        }

        for (i, element) in (0..10).rev().zip(ring.iter()) {
            assert_eq!(i, *element);
        }
    }

    #[test]
    fn test_pop_front() {
        let mut ring = Ring::new();

        for i in 0..10 {
            ring.push_back(i);
        }

        for i in 0..10 {
            assert_eq!(ring.pop_front(), Some(i));
            verify_all_links(&ring);
        }

        assert!(ring.is_empty());
        assert_eq!(ring.pop_front(), None);
    }

    #[test]
    fn test_pop_back() {
        let mut ring = Ring::new();

        for i in 0..10 {
            ring.push_back(i);
        }

        for i in (0..10).rev() {
            assert_eq!(ring.pop_back(), Some(i));
            verify_all_links(&ring);
        }

        assert!(ring.is_empty());
        assert_eq!(ring.pop_back(), None);
    }

    #[test]
    fn test_is_singular() {
        let mut ring = Ring::new();
        assert!(!ring.is_singular());

        ring.push_back(1);
        assert!(ring.is_singular());

        ring.push_back(2);
        assert!(!ring.is_singular());

        ring.pop_back();
        assert!(ring.is_singular());
    }

    #[test]
    fn test_remove_by_handle() {
        let mut ring = Ring::new();

        let _a = ring.push_back(1);
        let b = ring.push_back(2);
        let _c = ring.push_back(3);

        assert_eq!(ring.remove(b), Some(2));
        verify_all_links(&ring);

        // The handle is vacant now.
        assert_eq!(ring.remove(b), None);
        assert_eq!(ring.get(b), None);

        assert!(ring.iter().eq([1, 3].iter()));
    }

    #[test]
    fn test_front_and_back() {
        let mut ring = Ring::new();

        for i in 0..=3 {
            ring.push_back(i);
        }

        assert_eq!(*ring.front().unwrap(), 0);
        assert_eq!(*ring.front_mut().unwrap(), 0);
        assert_eq!(*ring.back().unwrap(), 3);
        assert_eq!(*ring.back_mut().unwrap(), 3);
    }

    #[test]
    fn test_navigation() {
        let mut ring = Ring::new();

        let a = ring.push_back(1);
        let b = ring.push_back(2);

        assert_eq!(ring.front_id(), Some(a));
        assert_eq!(ring.back_id(), Some(b));
        assert_eq!(ring.next_id(a), Some(b));
        assert_eq!(ring.next_id(b), None);
        assert_eq!(ring.prev_id(b), Some(a));
        assert_eq!(ring.prev_id(a), None);
    }

    #[test]
    fn test_iter_both_ends() {
        let mut ring = Ring::new();

        for i in 0..5 {
            ring.push_back(i);
        }

        let mut iter = ring.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));

        // Both ends have crossed; the iterator stays exhausted.
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_mut() {
        let mut ring = Ring::new();

        for i in 0..5 {
            ring.push_back(i);
        }

        for element in ring.iter_mut() {
            *element *= 10;
        }

        let values: Vec<i32> = ring.iter().copied().collect();
        assert_eq!(values, [0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_clear() {
        let mut ring = Ring::new();

        for i in 0..10 {
            ring.push_back(i);
        }

        ring.clear();

        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
        verify_all_links(&ring);

        // The ring stays usable and recycles its slots.
        let a = ring.push_back(42);
        assert_eq!(ring.get(a), Some(&42));
        assert_eq!(ring.len(), 1);
    }
}
