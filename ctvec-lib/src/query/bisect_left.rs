use crate::prelude::*;

/// First index of an ascending slice whose element is `>= n`, or `xs.len()`
/// when every element is smaller.
///
/// Classic bisection: the candidate range `[lo, hi)` halves at every step
/// based on a comparison at its midpoint.
pub const fn bisect_left_in(n: i32, xs: &[i32]) -> usize {
    let mut lo = 0;
    let mut hi = xs.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if xs[mid] < n {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Smallest index `i` such that `v[i] >= n`, assuming `v` is sorted
/// ascending; `v.len()` when no such index exists.
///
/// Equivalently: the number of elements strictly less than `n`, and the
/// position at which `n` could be inserted while keeping the order.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const _: () = assert!(bisect_left(3, &vector![0, 1, 2, 4, 5]) == 3);
/// const _: () = assert!(bisect_left(9, &vector![0, 1, 2, 4, 5]) == 5);
/// ```
pub const fn bisect_left<const N: usize>(n: i32, v: &Vector<N>) -> usize {
    bisect_left_in(n, v.as_slice())
}
