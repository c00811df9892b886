use alloc::vec::Vec;
use rand::Rng;

/// Returns a uniformly random permutation of `items`, leaving `items` untouched.
///
/// Fisher-Yates: walk from the back, swapping each slot with one drawn from the
/// not-yet-fixed prefix (itself included).
pub fn shuffled<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
