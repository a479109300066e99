use crate::prelude::*;
use crate::remove::remove_first::contains;

/// Number of distinct elements in `xs`.
pub const fn distinct(xs: &[i32]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < xs.len() {
        let (seen, _) = xs.split_at(i);
        if !contains(xs[i], seen) {
            total += 1;
        }
        i += 1;
    }
    total
}

/// Copy `xs` into `out`, keeping only the first occurrence of each element.
///
/// Returns the number of elements written. `out` must hold at least
/// `distinct(xs)` elements.
pub const fn dedup_into(xs: &[i32], out: &mut [i32]) -> usize {
    let mut src = 0;
    let mut dst = 0;
    while src < xs.len() {
        let (seen, _) = xs.split_at(src);
        if !contains(xs[src], seen) {
            out[dst] = xs[src];
            dst += 1;
        }
        src += 1;
    }
    dst
}

/// Canonical set representation of a literal element sequence.
///
/// Duplicates are dropped, keeping the first occurrence of each element in
/// its original position, so two sequences that differ only in duplicate
/// counts canonicalize to the same vector. The annotated output length must
/// equal the distinct-element count — [`distinct`] computes it.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const A: Vector<3> = set([2, 1, 3, 1, 2, 3]);
/// const B: Vector<3> = set([2, 1, 1, 3]);
/// const _: () = assert!(A.same(&B));
/// ```
pub const fn set<const K: usize, const M: usize>(elements: [i32; K]) -> Vector<M> {
    assert!(
        M == distinct(&elements),
        "set: the result length must be the number of distinct elements"
    );
    let mut out = [0; M];
    dedup_into(&elements, &mut out);
    Vector::new(out)
}

/// Canonical set representation of an existing vector.
///
/// The second construction path to the same canonical form as [`set`]: a
/// vector and a literal sequence with the same elements in the same
/// first-occurrence order compare equal after canonicalization, regardless
/// of duplicate counts.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const FROM_VECTOR: Vector<3> = set_from(vector![2, 2, 1, 3, 3]);
/// const FROM_LITERAL: Vector<3> = set([2, 1, 3, 1, 2, 3]);
/// const _: () = assert!(FROM_VECTOR.same(&FROM_LITERAL));
/// ```
pub const fn set_from<const N: usize, const M: usize>(v: Vector<N>) -> Vector<M> {
    set(v.into_array())
}
