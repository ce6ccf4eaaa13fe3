use super::common;

/// Randomized sequential quicksort; also the base case both parallel
/// variants fall back to below their block-size threshold.
pub fn sort(mut data: &mut [u64]) {
    while data.len() >= 2 {
        let pivot = common::random_pivot(data);
        let (lo, hi) = common::partition_hoare(data, pivot);

        let (head, tail) = data.split_at_mut(hi);
        let left = &mut head[..lo];

        if left.len() < tail.len() {
            sort(left);
            data = tail;
        } else {
            sort(tail);
            data = left;
        }
    }
}
