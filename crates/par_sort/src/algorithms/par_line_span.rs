use super::{common, sequential};

/// Line-span parallel quicksort: the partition scan itself is sequential,
/// only the two recursive halves run as a fork-join pair.
pub fn sort(data: &mut [u64], block_size: usize) {
    if data.len() < 2 {
        return;
    }
    if data.len() < block_size {
        sequential::sort(data);
        return;
    }

    let pivot = common::random_pivot(data);
    let (lo, hi) = common::partition_hoare(data, pivot);

    // split_at_mut hands each task a disjoint subslice, which is what makes
    // the concurrent in-place mutation race-free.
    let (head, tail) = data.split_at_mut(hi);
    let left = &mut head[..lo];

    rayon::join(
        || sort(left, block_size),
        || sort(tail, block_size),
    );
}
