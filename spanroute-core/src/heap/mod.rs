//! Four-ary min-heaps backing the graph queries.
//!
//! Both queues store a complete 4-ary tree in a contiguous `Vec`: the parent
//! of slot `i` lives at `(i - 1) / 4` and its children at `4i + 1 ..= 4i + 4`.
//! A wider fan-out than the classic binary heap halves the tree height, which
//! pays off for the insert- and decrease-heavy workload of Dijkstra.
//!
//! - [`PriorityQueue`] orders plain `Ord` items and locates arbitrary items
//!   for removal by a linear scan.
//! - [`IndexedPriorityQueue`] orders `(key, priority)` pairs and keeps a
//!   key-to-slot map current on every swap so priority changes cost
//!   `O(log n)`.

mod indexed;
mod priority_queue;

pub use self::indexed::IndexedPriorityQueue;
pub use self::priority_queue::PriorityQueue;

/// Number of children per heap node.
const FAN_OUT: usize = 4;

const fn parent(slot: usize) -> usize {
    (slot - 1) / FAN_OUT
}

const fn first_child(slot: usize) -> usize {
    slot * FAN_OUT + 1
}

/// Moves the element at `slot` towards the root while it orders before its
/// parent, reporting every swap through `on_swap`. Returns the final slot.
fn sift_up<T, L, S>(slots: &mut [T], mut slot: usize, less: L, mut on_swap: S) -> usize
where
    L: Fn(&T, &T) -> bool,
    S: FnMut(&[T], usize, usize),
{
    while slot > 0 {
        let above = parent(slot);
        if !less(&slots[slot], &slots[above]) {
            break;
        }
        slots.swap(slot, above);
        on_swap(slots, slot, above);
        slot = above;
    }
    slot
}

/// Returns the smallest child of `slot`, if it has any.
fn smallest_child<T, L>(slots: &[T], slot: usize, less: L) -> Option<usize>
where
    L: Fn(&T, &T) -> bool,
{
    let first = first_child(slot);
    if first >= slots.len() {
        return None;
    }
    let end = first.saturating_add(FAN_OUT).min(slots.len());
    let mut best = first;
    for child in first + 1..end {
        if less(&slots[child], &slots[best]) {
            best = child;
        }
    }
    Some(best)
}

/// Moves the element at `slot` towards the leaves while one of its children
/// orders before it, reporting every swap through `on_swap`. Returns the
/// final slot.
fn sift_down<T, L, S>(slots: &mut [T], mut slot: usize, less: L, mut on_swap: S) -> usize
where
    L: Fn(&T, &T) -> bool,
    S: FnMut(&[T], usize, usize),
{
    while let Some(child) = smallest_child(slots, slot, &less) {
        if !less(&slots[child], &slots[slot]) {
            break;
        }
        slots.swap(slot, child);
        on_swap(slots, slot, child);
        slot = child;
    }
    slot
}

/// Restores heap order around a slot whose element was replaced, moving it
/// up when it now beats its parent and down otherwise.
fn restore<T, L, S>(slots: &mut [T], slot: usize, less: L, mut on_swap: S) -> usize
where
    L: Fn(&T, &T) -> bool,
    S: FnMut(&[T], usize, usize),
{
    let settled = sift_up(slots, slot, &less, &mut on_swap);
    if settled != slot {
        return settled;
    }
    sift_down(slots, slot, &less, &mut on_swap)
}
