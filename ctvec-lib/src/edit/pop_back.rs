use crate::prelude::*;

/// Remove the last element of a vector.
///
/// A single-element vector pops to the empty vector. The empty vector is
/// outside the domain: evaluating `pop_back` on it aborts compilation.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const V: Vector<3> = pop_back(vector![1, 2, 3, 4]);
/// const _: () = assert!(V.same(&vector![1, 2, 3]));
/// ```
///
/// ```compile_fail
/// use ctvec_lib::prelude::*;
///
/// // error[E0080]: pop_back: the empty vector has no last element
/// const V: Vector<0> = pop_back(vector![]);
/// ```
pub const fn pop_back<const N: usize, const M: usize>(v: Vector<N>) -> Vector<M> {
    assert!(N > 0, "pop_back: the empty vector has no last element");
    assert!(
        M == N - 1,
        "pop_back: the result must be exactly one element shorter than the input"
    );
    let xs = v.as_slice();
    let mut out = [0; M];
    let mut i = 0;
    while i < M {
        out[i] = xs[i];
        i += 1;
    }
    Vector::new(out)
}
