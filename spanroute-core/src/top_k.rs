//! Bounded top-k selection on top of [`PriorityQueue`].

use crate::heap::PriorityQueue;

/// Returns the `k` largest items in ascending order.
///
/// Runs in `O(n log k)` time and `O(k)` extra space by keeping the current
/// best `k` items in a min-heap and evicting its root whenever a larger item
/// arrives. When `k` is at least the number of items, every item is returned
/// sorted.
///
/// # Examples
/// ```
/// use spanroute_core::top_k_sort;
///
/// let top = top_k_sort(3, [10, 50, 7, 70, -2, 11, 15, 3, -5, 11]);
/// assert_eq!(top, vec![15, 50, 70]);
/// ```
#[must_use]
pub fn top_k_sort<T, I>(k: usize, items: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }
    let mut best = PriorityQueue::with_capacity(k);
    for item in items {
        if best.len() < k {
            best.insert(item);
        } else if best.peek_min().is_ok_and(|floor| item > *floor) {
            best.replace_min(item);
        }
    }
    best.into_sorted_vec()
}
