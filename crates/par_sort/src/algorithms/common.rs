use std::ptr;

use rand::Rng;

/// Pivot value drawn uniformly from the subrange. Uses the calling thread's
/// generator, so concurrent partition steps never share RNG state.
#[inline]
pub fn random_pivot(data: &[u64]) -> u64 {
    data[rand::rng().random_range(0..data.len())]
}

/// Converging-cursor Hoare partition around `pivot`, which must occur in
/// `data`. Returns `(lo, hi)` with `data[..lo] <= pivot <= data[hi..]` and
/// `lo <= hi`; both `data[..lo]` and `data[hi..]` are strictly shorter than
/// `data`, so recursing on them always terminates.
#[inline]
pub fn partition_hoare(data: &mut [u64], pivot: u64) -> (usize, usize) {
    debug_assert!(data.len() >= 2);

    let ptr = data.as_mut_ptr();
    let mut i = 0usize;
    let mut j = data.len() - 1;

    // Both scans stay in bounds: the pivot value occurs in the subrange, and
    // across swaps data[..i] stays <= pivot while data[j + 1..] stays >= pivot.
    unsafe {
        loop {
            while *ptr.add(i) < pivot {
                i += 1;
            }

            while *ptr.add(j) > pivot {
                j -= 1;
            }

            if i > j {
                break;
            }

            ptr::swap(ptr.add(i), ptr.add(j));
            i += 1;
            if j == 0 {
                // The right cursor would step past the front of the subrange.
                return (0, i);
            }
            j -= 1;
            if i > j {
                break;
            }
        }
    }

    (j + 1, i)
}
