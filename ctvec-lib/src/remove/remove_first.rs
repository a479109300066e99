use crate::prelude::*;

/// True if `target` occurs anywhere in `xs`.
pub const fn contains(target: i32, xs: &[i32]) -> bool {
    let mut i = 0;
    while i < xs.len() {
        if xs[i] == target {
            return true;
        }
        i += 1;
    }
    false
}

/// Copy `xs` into `out`, skipping the leftmost occurrence of `target`.
///
/// Returns the number of elements written. `out` must hold at least
/// `xs.len()` elements when `target` is absent, one fewer otherwise.
pub const fn remove_first_into(target: i32, xs: &[i32], out: &mut [i32]) -> usize {
    let mut src = 0;
    let mut dst = 0;
    let mut skipped = false;
    while src < xs.len() {
        if !skipped && xs[src] == target {
            skipped = true;
        } else {
            out[dst] = xs[src];
            dst += 1;
        }
        src += 1;
    }
    dst
}

/// Remove the first occurrence of `target` from a vector.
///
/// Only the leftmost match is removed; later occurrences survive verbatim.
/// When `target` does not occur the input is returned unchanged, so the
/// annotated output length must be one less than the input length when the
/// target occurs and equal to it otherwise.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const V: Vector<3> = remove_first(1, vector![2, 1, 1, 2]);
/// const _: () = assert!(V.same(&vector![2, 1, 2]));
/// ```
pub const fn remove_first<const N: usize, const M: usize>(target: i32, v: Vector<N>) -> Vector<M> {
    if contains(target, v.as_slice()) {
        assert!(
            M + 1 == N,
            "remove_first: the target occurs, so the result must be one element shorter"
        );
    } else {
        assert!(
            M == N,
            "remove_first: the target does not occur, so the result must keep the input length"
        );
    }
    let mut out = [0; M];
    remove_first_into(target, v.as_slice(), &mut out);
    Vector::new(out)
}
