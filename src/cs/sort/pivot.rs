use rand::rngs::ThreadRng;
use rand::Rng;

/// A strategy that produces a pivot value for `arr[lo..=hi]`.
///
/// The value returned must occur somewhere in the range; both provided
/// selectors ([`RandomPivot`] and
/// [`MedianOfMedians`](crate::cs::sort::median_of_medians::MedianOfMedians))
/// guarantee this by reading an element of the range.
pub trait PivotSelector<T> {
    /// Chooses a pivot value from `arr[lo..=hi]`.
    fn select_pivot(&mut self, arr: &[T], lo: usize, hi: usize) -> T;
}

/// Uniform-random pivot selection.
///
/// Draws an index uniformly from `[lo, hi]` and returns the value stored
/// there. The randomness source is a type parameter so tests and callers
/// needing reproducible runs can inject a seeded generator (for example
/// `rand_chacha::ChaCha20Rng`).
pub struct RandomPivot<R: Rng> {
    rng: R,
}

impl RandomPivot<ThreadRng> {
    /// Creates a selector backed by the thread-local generator.
    pub fn new() -> Self {
        RandomPivot {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomPivot<ThreadRng> {
    fn default() -> Self {
        RandomPivot::new()
    }
}

impl<R: Rng> RandomPivot<R> {
    /// Creates a selector backed by the supplied generator.
    pub fn with_rng(rng: R) -> Self {
        RandomPivot { rng }
    }
}

impl<T: Clone, R: Rng> PivotSelector<T> for RandomPivot<R> {
    fn select_pivot(&mut self, arr: &[T], lo: usize, hi: usize) -> T {
        let pivot_index = self.rng.gen_range(lo..=hi);
        arr[pivot_index].clone()
    }
}
