use crate::cs::sort::quickselect::select_random;
use crate::error::{Result, SelectionError};

/// Returns the median of `arr` without mutating it.
///
/// The rank queried is `(n - 1) / 2`: the true middle for odd lengths and
/// the lower of the two central elements for even lengths (no averaging).
/// Selection runs over an internal copy, so this is the one operation whose
/// callers observe no reordering.
///
/// # Examples
///
/// ```
/// use order_statistics::sort::median;
///
/// assert_eq!(median(&[5, 3, 8, 1, 9]).unwrap(), 5);
/// assert_eq!(median(&[10, 20, 30, 40]).unwrap(), 20);
/// ```
pub fn median<T: Ord + Clone>(arr: &[T]) -> Result<T> {
    if arr.is_empty() {
        return Err(SelectionError::empty_input(
            "median requires at least one element",
        ));
    }
    let mut scratch = arr.to_vec();
    let k = (arr.len() - 1) / 2;
    select_random(&mut scratch, k)
}
