//! Keyed min-priority queue with `O(log n)` priority changes.

use std::{cmp::Ordering, collections::HashMap, hash::Hash};

use crate::error::{Result, SpanrouteError};

use super::{restore, sift_up};

#[derive(Clone, Debug)]
struct Slot<K, P> {
    key: K,
    priority: P,
}

fn less<K, P: PartialOrd>(left: &Slot<K, P>, right: &Slot<K, P>) -> bool {
    left.priority < right.priority
}

fn is_ordered<P: PartialOrd>(priority: &P) -> bool {
    priority.partial_cmp(priority) == Some(Ordering::Equal)
}

/// A min-priority queue of unique keys, each carrying a priority.
///
/// The queue shares the 4-ary layout of [`super::PriorityQueue`] and keeps a
/// key-to-slot map current on every swap, so locating a key is `O(1)` and a
/// priority change percolates in `O(log n)`: up when the priority drops,
/// down when it grows.
///
/// Priorities only need `PartialOrd`; values that cannot be ordered against
/// themselves (such as `f64::NAN`) are rejected on entry, which keeps the
/// heap's comparisons total.
///
/// # Examples
/// ```
/// use spanroute_core::IndexedPriorityQueue;
///
/// let mut frontier = IndexedPriorityQueue::new();
/// frontier.insert("a", 4.0)?;
/// frontier.insert("b", 2.0)?;
/// frontier.decrease_priority(&"a", 1.0)?;
/// assert_eq!(frontier.remove_min()?, ("a", 1.0));
/// assert_eq!(frontier.remove_min()?, ("b", 2.0));
/// assert!(frontier.is_empty());
/// # Ok::<(), spanroute_core::SpanrouteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedPriorityQueue<K, P> {
    slots: Vec<Slot<K, P>>,
    positions: HashMap<K, usize>,
}

impl<K, P> Default for IndexedPriorityQueue<K, P> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K, P> IndexedPriorityQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: PartialOrd,
{
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of queued keys.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns `true` when no keys are queued.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Returns `true` when `key` is queued.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the current priority of `key`, if it is queued.
    #[must_use]
    pub fn priority(&self, key: &K) -> Option<&P> {
        let slot = *self.positions.get(key)?;
        self.slots.get(slot).map(|entry| &entry.priority)
    }

    /// Queues `key` with `priority`.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::UnorderedPriority`] when `priority` cannot be
    /// compared with itself and [`SpanrouteError::DuplicateKey`] when `key` is
    /// already queued.
    pub fn insert(&mut self, key: K, priority: P) -> Result<()> {
        if !is_ordered(&priority) {
            return Err(SpanrouteError::UnorderedPriority);
        }
        if self.positions.contains_key(&key) {
            return Err(SpanrouteError::DuplicateKey);
        }
        let slot = self.slots.len();
        self.positions.insert(key.clone(), slot);
        self.slots.push(Slot { key, priority });
        self.sift_up(slot);
        Ok(())
    }

    /// Returns the key with the smallest priority without removing it.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::EmptyContainer`] when the queue is empty.
    pub fn peek_min(&self) -> Result<(&K, &P)> {
        self.slots
            .first()
            .map(|entry| (&entry.key, &entry.priority))
            .ok_or(SpanrouteError::EmptyContainer)
    }

    /// Removes and returns the key with the smallest priority.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::EmptyContainer`] when the queue is empty.
    pub fn remove_min(&mut self) -> Result<(K, P)> {
        if self.slots.is_empty() {
            return Err(SpanrouteError::EmptyContainer);
        }
        let removed = self.take_slot(0);
        Ok((removed.key, removed.priority))
    }

    /// Sets the priority of a queued key, percolating it up when the new
    /// priority is smaller and down when it is larger.
    ///
    /// # Errors
    /// Returns [`SpanrouteError::UnorderedPriority`] when `priority` cannot be
    /// compared with itself and [`SpanrouteError::UnknownKey`] when `key` is
    /// not queued.
    pub fn change_priority(&mut self, key: &K, priority: P) -> Result<()> {
        if !is_ordered(&priority) {
            return Err(SpanrouteError::UnorderedPriority);
        }
        let slot = self.slot_of(key)?;
        self.slots[slot].priority = priority;
        self.restore(slot);
        Ok(())
    }

    /// Lowers the priority of a queued key.
    ///
    /// # Errors
    /// Returns the errors of [`Self::change_priority`], plus
    /// [`SpanrouteError::PriorityIncrease`] when `priority` is larger than the
    /// key's current priority.
    pub fn decrease_priority(&mut self, key: &K, priority: P) -> Result<()> {
        let slot = self.slot_of(key)?;
        if priority > self.slots[slot].priority {
            return Err(SpanrouteError::PriorityIncrease);
        }
        self.change_priority(key, priority)
    }

    /// Removes `key` from the queue, returning its priority when it was
    /// queued.
    pub fn remove(&mut self, key: &K) -> Option<P> {
        let slot = *self.positions.get(key)?;
        Some(self.take_slot(slot).priority)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.positions.clear();
    }

    fn slot_of(&self, key: &K) -> Result<usize> {
        self.positions
            .get(key)
            .copied()
            .ok_or(SpanrouteError::UnknownKey)
    }

    /// Detaches the entry at `slot`, moving the last entry into its place and
    /// repairing the heap around it.
    fn take_slot(&mut self, slot: usize) -> Slot<K, P> {
        let removed = self.slots.swap_remove(slot);
        self.positions.remove(&removed.key);
        if slot < self.slots.len() {
            self.track(slot);
            self.restore(slot);
        }
        removed
    }

    fn track(&mut self, slot: usize) {
        let Self { slots, positions } = self;
        record_slot(positions, slots, slot);
    }

    fn sift_up(&mut self, slot: usize) -> usize {
        let Self { slots, positions } = self;
        sift_up(slots, slot, less, |moved, left, right| {
            record_slot(positions, moved, left);
            record_slot(positions, moved, right);
        })
    }

    fn restore(&mut self, slot: usize) -> usize {
        let Self { slots, positions } = self;
        restore(slots, slot, less, |moved, left, right| {
            record_slot(positions, moved, left);
            record_slot(positions, moved, right);
        })
    }

    #[cfg(test)]
    pub(super) fn assert_consistent(&self) {
        for (slot, entry) in self.slots.iter().enumerate() {
            assert_eq!(self.positions.get(&entry.key), Some(&slot));
            if slot > 0 {
                let parent = &self.slots[super::parent(slot)];
                assert!(!less(entry, parent), "slot {slot} orders before its parent");
            }
        }
        assert_eq!(self.positions.len(), self.slots.len());
    }
}

fn record_slot<K: Eq + Hash, P>(
    positions: &mut HashMap<K, usize>,
    slots: &[Slot<K, P>],
    slot: usize,
) {
    let Some(entry) = slots.get(slot) else {
        return;
    };
    if let Some(position) = positions.get_mut(&entry.key) {
        *position = slot;
    }
}
