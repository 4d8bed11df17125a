use crate::error::{Result, SelectionError};

/// Hoare's two-pointer partition of `arr[lo..=hi]` around the pivot `arr[lo]`.
///
/// Two cursors converge from the ends of the range: `i` starts at `lo + 1`
/// (the pivot is excluded from the scan), `j` starts at `hi`. `i` advances
/// over elements smaller than the pivot, `j` retreats over elements larger
/// than it; while the cursors have not crossed, the pair is swapped and both
/// step inward. The pivot is then swapped into index `j`.
///
/// Returns `j` such that every element of `arr[lo..j]` is `<= arr[j]` and
/// every element of `arr[j + 1..=hi]` is `>= arr[j]`. Elements within each
/// side remain in arbitrary order. A single-element range returns `lo`
/// without scanning.
///
/// Runs in one linear pass with O(1) extra space. Degrades toward quadratic
/// behavior when driven by quickselect over inputs with many duplicates;
/// [`dnf_partition`] is the duplicate-safe alternative.
pub fn hoare_partition<T: Ord + Clone>(arr: &mut [T], lo: usize, hi: usize) -> usize {
    if lo == hi {
        return lo;
    }

    let pivot = arr[lo].clone();
    let mut i = lo + 1;
    let mut j = hi;

    loop {
        while i <= j && arr[i] < pivot {
            i += 1;
        }
        while i <= j && arr[j] > pivot {
            j -= 1;
        }
        if i < j {
            arr.swap(i, j);
            i += 1;
            j -= 1;
        } else {
            break;
        }
    }

    // Swap the pivot into its final position
    arr.swap(lo, j);
    j
}

/// Dutch national flag (three-way) partition of `arr[lo..=hi]` around an
/// externally supplied pivot value.
///
/// One linear pass with three cursors: `lt` is the next free slot of the
/// `< pivot` region, `i` is the scan cursor, `gt` is the next free slot of
/// the `> pivot` region. Smaller elements are swapped down to `lt`, larger
/// elements are swapped up to `gt` (without advancing `i`, since the
/// swapped-in element is unexamined), equal elements are skipped over.
///
/// Returns `(lt, gt)` such that `arr[lo..lt] < pivot`,
/// `arr[lt..=gt] == pivot` and `arr[gt + 1..=hi] > pivot`.
///
/// The pivot is taken by value rather than by index, which is what lets a
/// pivot *selector* drive this partitioner. Callers are expected to pass a
/// value occurring in the range; if the value is absent the scan still
/// terminates, but the reported equal region is meaningless.
///
/// Unlike [`hoare_partition`], this scheme stays linear when the pivot value
/// has many duplicates: the whole run of equal elements is resolved in a
/// single pass.
pub fn dnf_partition<T: Ord>(arr: &mut [T], lo: usize, hi: usize, pivot: &T) -> (usize, usize) {
    let mut lt = lo;
    let mut i = lo;
    let mut gt = hi;

    while i <= gt {
        if arr[i] < *pivot {
            arr.swap(lt, i);
            lt += 1;
            i += 1;
        } else if arr[i] > *pivot {
            arr.swap(i, gt);
            if gt == lo {
                break;
            }
            gt -= 1;
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

/// Partition strategy used by the selection loop.
///
/// Both schemes expose the same shape to the driver: the bounds of a region
/// known to hold pivot-valued elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionScheme {
    /// Hoare's converging two-pointer scan. The equal region it reports is
    /// the single slot the pivot lands in.
    TwoPointer,
    /// Three-way dutch national flag scan. Groups every duplicate of the
    /// pivot value into the equal region; the default for both drivers.
    #[default]
    ThreeWay,
}

impl PartitionScheme {
    /// Partitions `arr[lo..=hi]` around `pivot` and returns the inclusive
    /// bounds of the pivot-valued region.
    ///
    /// The pivot value must occur somewhere in the range; the two-pointer
    /// scheme needs to relocate it to `lo` before scanning, and a value with
    /// no source index is reported as an invariant violation.
    pub fn partition<T: Ord + Clone>(
        self,
        arr: &mut [T],
        lo: usize,
        hi: usize,
        pivot: &T,
    ) -> Result<(usize, usize)> {
        match self {
            PartitionScheme::ThreeWay => Ok(dnf_partition(arr, lo, hi, pivot)),
            PartitionScheme::TwoPointer => {
                let src = (lo..=hi).find(|&p| arr[p] == *pivot).ok_or_else(|| {
                    SelectionError::invariant_violation(format!(
                        "pivot value has no source index in range {}..={}",
                        lo, hi
                    ))
                })?;
                arr.swap(lo, src);
                let j = hoare_partition(arr, lo, hi);
                Ok((j, j))
            }
        }
    }
}
