//! Min-priority queue over `Ord` items.

use crate::error::{Result, SpanrouteError};

use super::{restore, sift_down, sift_up};

fn less<T: Ord>(left: &T, right: &T) -> bool {
    left < right
}

fn untracked<T>(_: &[T], _: usize, _: usize) {}

/// A min-priority queue stored as a 4-ary heap.
///
/// Equal items are extracted in an unspecified order. Storage grows
/// geometrically as items are inserted.
///
/// # Examples
/// ```
/// use spanroute_core::PriorityQueue;
///
/// let mut queue: PriorityQueue<i32> = [5, -2, 7].into_iter().collect();
/// queue.insert(3);
/// assert_eq!(queue.len(), 4);
/// assert_eq!(queue.peek_min(), Ok(&-2));
/// assert_eq!(queue.into_sorted_vec(), vec![-2, 3, 5, 7]);
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    slots: Vec<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of queued items.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns `true` when no items are queued.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Adds `item` to the queue in `O(log n)`.
    pub fn insert(&mut self, item: T) {
        self.slots.push(item);
        let last = self.slots.len() - 1;
        sift_up(&mut self.slots, last, less, untracked);
    }

    /// Returns the smallest item without removing it.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::EmptyContainer`] when the queue is empty.
    pub fn peek_min(&self) -> Result<&T> {
        self.slots.first().ok_or(SpanrouteError::EmptyContainer)
    }

    /// Removes and returns the smallest item.
    ///
    /// The last slot moves into the root, which then percolates down.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::EmptyContainer`] when the queue is empty.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.slots.is_empty() {
            return Err(SpanrouteError::EmptyContainer);
        }
        let min = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            sift_down(&mut self.slots, 0, less, untracked);
        }
        Ok(min)
    }

    /// Replaces the smallest item with `item` and returns the old minimum.
    ///
    /// Cheaper than a `remove_min` followed by `insert` because the heap is
    /// repaired once. On an empty queue `item` is simply inserted.
    pub fn replace_min(&mut self, item: T) -> Option<T> {
        let Some(root) = self.slots.first_mut() else {
            self.insert(item);
            return None;
        };
        let min = std::mem::replace(root, item);
        sift_down(&mut self.slots, 0, less, untracked);
        Some(min)
    }

    /// Removes one item equal to `item`, returning it when present.
    ///
    /// The item is located by a linear scan; heap order is then restored
    /// around the vacated slot in whichever direction the displaced element
    /// needs. Callers that change priorities frequently should prefer
    /// [`super::IndexedPriorityQueue`].
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let slot = self.slots.iter().position(|candidate| candidate == item)?;
        let removed = self.slots.swap_remove(slot);
        if slot < self.slots.len() {
            restore(&mut self.slots, slot, less, untracked);
        }
        Some(removed)
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Consumes the queue, returning its items in ascending order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.slots.len());
        while let Ok(item) = self.remove_min() {
            sorted.push(item);
        }
        sorted
    }

    #[cfg(test)]
    pub(super) fn slots(&self) -> &[T] {
        &self.slots
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}
