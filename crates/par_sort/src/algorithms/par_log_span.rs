use rayon::prelude::*;

use super::{common, sequential};

/// Log-span parallel quicksort: the partition step is parallel too. The
/// subrange is split into three groups (less / equal / greater than the
/// pivot) by concurrent filter passes into transient buffers, scattered back
/// per index, and only the two non-equal groups recurse as a fork-join pair.
pub fn sort(data: &mut [u64], block_size: usize) {
    if data.len() < 2 {
        return;
    }
    if data.len() < block_size {
        sequential::sort(data);
        return;
    }

    let pivot = common::random_pivot(data);

    // The three passes read the subrange while nothing mutates it. The joins
    // returning is the barrier that makes the group sizes final before the
    // scatter starts.
    let (less, (equal, greater)) = {
        let frozen: &[u64] = data;
        rayon::join(
            || filter_group(frozen, |v| v < pivot),
            || {
                rayon::join(
                    || filter_group(frozen, |v| v == pivot),
                    || filter_group(frozen, |v| v > pivot),
                )
            },
        )
    };

    let lo = less.len();
    let hi = lo + equal.len();

    // Each index owns a distinct destination, so the scatter needs no
    // ordering between indices.
    data.par_iter_mut().enumerate().for_each(|(i, slot)| {
        *slot = if i < lo {
            less[i]
        } else if i < hi {
            equal[i - lo]
        } else {
            greater[i - hi]
        };
    });

    // The equal block is already in final position and never recurses, which
    // also guarantees progress when every element matches the pivot.
    let (head, tail) = data.split_at_mut(hi);
    let left = &mut head[..lo];

    rayon::join(
        || sort(left, block_size),
        || sort(tail, block_size),
    );
}

fn filter_group<P>(data: &[u64], keep: P) -> Vec<u64>
where
    P: Fn(u64) -> bool + Sync + Send,
{
    data.par_iter().copied().filter(|&v| keep(v)).collect()
}
