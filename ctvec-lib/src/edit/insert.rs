use crate::prelude::*;

/// Insert an element so that it occupies `position` in the result.
///
/// Elements at and after `position` shift one place to the right;
/// `position == v.len()` appends. Positions past the end are outside the
/// domain and abort compilation.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const V: Vector<4> = insert(1, 3, vector![4, 5, 6]);
/// const _: () = assert!(V.same(&vector![4, 3, 5, 6]));
/// ```
///
/// ```compile_fail
/// use ctvec_lib::prelude::*;
///
/// // error[E0080]: insert: position is past the end of the vector
/// const V: Vector<4> = insert(7, 3, vector![4, 5, 6]);
/// ```
pub const fn insert<const N: usize, const M: usize>(
    position: usize,
    x: i32,
    v: Vector<N>,
) -> Vector<M> {
    assert!(position <= N, "insert: position is past the end of the vector");
    assert!(
        M == N + 1,
        "insert: the result must be exactly one element longer than the input"
    );
    let xs = v.as_slice();
    let mut out = [x; M];
    let mut i = 0;
    while i < position {
        out[i] = xs[i];
        i += 1;
    }
    while i < N {
        out[i + 1] = xs[i];
        i += 1;
    }
    Vector::new(out)
}
