use crate::vector::Vector;

/// A length-`N` array holding the index sequence `0, 1, .., N - 1`.
///
/// Bridges a compile-time index range into a runtime-inspectable container.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// let arr = make_arr::<3>();
/// assert_eq!(arr, [0, 1, 2]);
/// ```
pub const fn make_arr<const N: usize>() -> [i32; N] {
    let mut out = [0; N];
    let mut i = 0;
    while i < N {
        out[i] = i as i32;
        i += 1;
    }
    out
}

/// The index sequence as a [`Vector`], for feeding it to the vector algebra.
pub const fn index_vector<const N: usize>() -> Vector<N> {
    Vector::new(make_arr())
}
