use crate::prelude::*;

/// Smallest element of a non-empty slice.
///
/// Shared kernel of [`min`] and the selection step of
/// [`sort`](crate::transform::sort::sort).
pub const fn min_in(xs: &[i32]) -> i32 {
    assert!(!xs.is_empty(), "min: the empty vector has no minimum");
    let mut smallest = xs[0];
    let mut i = 1;
    while i < xs.len() {
        if xs[i] < smallest {
            smallest = xs[i];
        }
        i += 1;
    }
    smallest
}

/// Smallest element of a vector.
///
/// The empty vector is outside the domain: evaluating `min` on it aborts
/// compilation.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const SMALLEST: i32 = min(&vector![3, 1, 2]);
/// const _: () = assert!(SMALLEST == 1);
/// ```
///
/// ```compile_fail
/// use ctvec_lib::prelude::*;
///
/// // error[E0080]: min: the empty vector has no minimum
/// const SMALLEST: i32 = min(&vector![]);
/// ```
pub const fn min<const N: usize>(v: &Vector<N>) -> i32 {
    min_in(v.as_slice())
}
