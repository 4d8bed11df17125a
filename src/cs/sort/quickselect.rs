use log::trace;
use rand::Rng;

use crate::cs::sort::median_of_medians::MedianOfMedians;
use crate::cs::sort::partition::PartitionScheme;
use crate::cs::sort::pivot::{PivotSelector, RandomPivot};
use crate::error::{Result, SelectionError};

/// Finds the k-th smallest element (0-indexed) using a pluggable pivot
/// selector and partition scheme.
///
/// This is the single narrowing loop behind both public drivers. Each
/// iteration asks the selector for a pivot value, partitions the active
/// range around it, and keeps whichever region contains `k`:
///
/// - `k` left of the equal region shrinks `hi` to `lt - 1`,
/// - `k` right of it advances `lo` to `gt + 1`,
/// - `k` inside it resolves immediately to the pivot value.
///
/// The loop is iterative rather than recursive on purpose: adversarial pivot
/// choices can force a linear number of narrowing steps, and a recursive
/// formulation would overflow the stack where this runs in O(1) stack space.
///
/// Validation happens before any mutation: an empty slice or `k >= len`
/// fails fast and leaves `arr` untouched. Partition boundaries falling
/// outside `lo..=hi` surface as
/// [`InvariantViolation`](SelectionError::InvariantViolation), which signals
/// a defect in a partitioner rather than a recoverable data condition.
///
/// Reorders `arr` in place; callers needing the original order must pass a
/// copy.
pub fn select_with<T, S>(
    arr: &mut [T],
    k: usize,
    selector: &mut S,
    scheme: PartitionScheme,
) -> Result<T>
where
    T: Ord + Clone,
    S: PivotSelector<T>,
{
    if arr.is_empty() {
        return Err(SelectionError::empty_input(
            "selection requires at least one element",
        ));
    }
    if k >= arr.len() {
        return Err(SelectionError::index_out_of_range(k, arr.len()));
    }

    let mut lo = 0;
    let mut hi = arr.len() - 1;

    loop {
        if lo == hi {
            return Ok(arr[lo].clone());
        }

        let pivot = selector.select_pivot(arr, lo, hi);
        let (lt, gt) = scheme.partition(arr, lo, hi, &pivot)?;
        if lt < lo || gt < lt || hi < gt {
            return Err(SelectionError::invariant_violation(format!(
                "boundaries lt={} gt={} outside range lo={} hi={}",
                lt, gt, lo, hi
            )));
        }
        trace!(
            "range [{}, {}] partitioned into equal region [{}, {}], k={}",
            lo,
            hi,
            lt,
            gt,
            k
        );

        if k < lt {
            hi = lt - 1;
        } else if k > gt {
            lo = gt + 1;
        } else {
            // k falls in the equal region; every slot in it holds the pivot
            return Ok(arr[k].clone());
        }
    }
}

/// Finds the k-th smallest element (0-indexed) with uniform-random pivots.
///
/// Expected linear time over the random pivot choices; the quadratic worst
/// case exists but has vanishing probability. Reorders `arr` in place.
///
/// # Examples
///
/// ```
/// use order_statistics::sort::select_random;
///
/// let mut arr = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
/// assert_eq!(select_random(&mut arr, 0).unwrap(), 1);
/// ```
pub fn select_random<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    select_random_with_rng(arr, k, rand::thread_rng())
}

/// [`select_random`] with an injected randomness source, for reproducible
/// runs and deterministic tests.
pub fn select_random_with_rng<T, R>(arr: &mut [T], k: usize, rng: R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng,
{
    let mut selector = RandomPivot::with_rng(rng);
    select_with(arr, k, &mut selector, PartitionScheme::ThreeWay)
}

/// Finds the k-th smallest element (0-indexed) with median-of-medians
/// pivots.
///
/// Worst-case linear time regardless of input order, at the cost of a larger
/// constant factor and scratch allocation per pivot than [`select_random`].
/// Returns the same value as [`select_random`] for any `(arr, k)`; only the
/// intermediate array states differ. Reorders `arr` in place.
pub fn select_deterministic<T: Ord + Clone>(arr: &mut [T], k: usize) -> Result<T> {
    select_with(arr, k, &mut MedianOfMedians, PartitionScheme::ThreeWay)
}
