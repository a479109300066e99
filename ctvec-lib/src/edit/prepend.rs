use crate::prelude::*;

/// Prepend an element to a vector.
///
/// The result is one element longer than the input: its head is `x` and the
/// rest is `v` unchanged. Defined for every input, including the empty
/// vector. The output length is taken from the annotated result type and
/// checked during evaluation.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const V: Vector<3> = prepend(1, vector![2, 3]);
/// const _: () = assert!(V.same(&vector![1, 2, 3]));
/// ```
pub const fn prepend<const N: usize, const M: usize>(x: i32, v: Vector<N>) -> Vector<M> {
    assert!(
        M == N + 1,
        "prepend: the result must be exactly one element longer than the input"
    );
    let xs = v.as_slice();
    let mut out = [x; M];
    let mut i = 0;
    while i < N {
        out[i + 1] = xs[i];
        i += 1;
    }
    Vector::new(out)
}
