use crate::prelude::*;

/// The number of elements in a vector.
///
/// The length is encoded in the type, so this is the constant `N` of the
/// instantiation.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const _: () = assert!(length(&vector![1, 2, 3]) == 3);
/// const _: () = assert!(length(&vector![]) == 0);
/// ```
pub const fn length<const N: usize>(_v: &Vector<N>) -> usize {
    N
}
