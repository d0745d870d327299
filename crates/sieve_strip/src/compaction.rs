//! Unordered In-Place Compaction
//!
//! Candidate lists can be long and their order carries no meaning, so
//! removal uses swap-with-tail instead of shifting: one O(n) pass, O(1) per
//! removed element.
//!
//! # Ordering contract
//!
//! Survivors are **not** kept in their original relative order. What is
//! guaranteed:
//!
//! - after [`partition_unordered`] returns `n`, `slice[..n]` holds exactly the
//!   kept elements and `slice[n..]` exactly the rejected ones;
//! - the slice stays a permutation of its input (elements are swapped, never
//!   duplicated or dropped);
//! - `keep` is called exactly once per element, on the element's original
//!   value.

/// Partitions `slice` so that the elements satisfying `keep` come first.
///
/// Returns the number of kept elements.
pub fn partition_unordered<T, F>(slice: &mut [T], mut keep: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    // Live window is `slice[..end]`; `slice[end..]` holds rejected elements.
    let mut end = slice.len();
    let mut i = 0;
    while i < end {
        if keep(&slice[i]) {
            i += 1;
        } else {
            // The element swapped in from the tail is unvisited; re-check `i`.
            end -= 1;
            slice.swap(i, end);
        }
    }
    end
}

/// Removes every element not satisfying `keep`, without preserving order.
///
/// Returns the number of surviving elements (the new length).
pub fn retain_unordered<T, F>(items: &mut Vec<T>, keep: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let kept = partition_unordered(items.as_mut_slice(), keep);
    items.truncate(kept);
    kept
}
