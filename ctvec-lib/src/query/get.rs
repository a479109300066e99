use crate::prelude::*;

/// Element at a zero-based index.
///
/// Valid for `0 <= index < v.len()`. The bounds check happens during
/// evaluation, and an out-of-range read aborts compilation with the
/// const-eval indexing diagnostic, which names both the offending index and
/// the vector's length — not a generic deduction failure.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const SECOND: i32 = get(1, &vector![0, 1, 2]);
/// const _: () = assert!(SECOND == 1);
/// ```
///
/// ```compile_fail
/// use ctvec_lib::prelude::*;
///
/// // error[E0080]: index out of bounds: the len is 3 but the index is 9
/// const OUT_OF_BOUNDS: i32 = get(9, &vector![0, 1, 2]);
/// ```
pub const fn get<const N: usize>(index: usize, v: &Vector<N>) -> i32 {
    v.as_slice()[index]
}
