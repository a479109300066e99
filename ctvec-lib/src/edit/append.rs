use crate::prelude::*;

/// Append an element to a vector.
///
/// The result is one element longer than the input: all of `v`, then `x`.
/// Defined for every input, including the empty vector.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const V: Vector<4> = append(4, vector![1, 2, 3]);
/// const _: () = assert!(V.same(&vector![1, 2, 3, 4]));
/// ```
pub const fn append<const N: usize, const M: usize>(x: i32, v: Vector<N>) -> Vector<M> {
    assert!(
        M == N + 1,
        "append: the result must be exactly one element longer than the input"
    );
    let xs = v.as_slice();
    let mut out = [x; M];
    let mut i = 0;
    while i < N {
        out[i] = xs[i];
        i += 1;
    }
    Vector::new(out)
}
