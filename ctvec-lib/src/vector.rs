use std::fmt::Display;
use std::fmt::Formatter;

use arbitrary::Arbitrary;
use itertools::Itertools;

/// A fixed-length vector of integers whose length is part of its type.
///
/// The contents are plain values, but every operation on them is a
/// `const fn`; binding a result to a `const` item runs the whole computation
/// during translation. [`vector!`](crate::vector!) builds one from a literal
/// element list.
///
/// Identity is structural: two vectors denote the same entity exactly when
/// they have the same length and the same elements in the same order.
/// [`Vector::same`] is the const-evaluable form of that test; `PartialEq` is
/// additionally implemented across differing lengths for runtime use.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const V: Vector<3> = vector![1, 2, 3];
/// const _: () = assert!(V.same(&Vector::new([1, 2, 3])));
/// const _: () = assert!(!V.same(&vector![1, 2]));
/// ```
#[derive(Debug, Copy, Clone, Arbitrary)]
pub struct Vector<const N: usize>(pub(crate) [i32; N]);

impl<const N: usize> Vector<N> {
    pub const fn new(elements: [i32; N]) -> Self {
        Self(elements)
    }

    /// The number of elements, fixed by the type.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub const fn into_array(self) -> [i32; N] {
        self.0
    }

    /// The first element. Evaluating this on the empty vector aborts
    /// compilation.
    pub const fn head(&self) -> i32 {
        assert!(N > 0, "head: the empty vector has no first element");
        self.0[0]
    }

    /// The last element. Evaluating this on the empty vector aborts
    /// compilation.
    pub const fn last(&self) -> i32 {
        assert!(N > 0, "last: the empty vector has no last element");
        self.0[N - 1]
    }

    /// Structural equality, usable inside const evaluation.
    pub const fn same<const M: usize>(&self, other: &Vector<M>) -> bool {
        if N != M {
            return false;
        }
        let mut i = 0;
        while i < N {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// The type's display name, as reported by the runtime type-information
    /// facility. The exact format is implementation defined.
    pub fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<const N: usize, const M: usize> PartialEq<Vector<M>> for Vector<N> {
    fn eq(&self, other: &Vector<M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for Vector<N> {}

impl<const N: usize> Display for Vector<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// Builds a [`Vector`] from a literal element list: `vector![1, 2, 3]`.
#[macro_export]
macro_rules! vector {
    ($($element:expr),* $(,)?) => {
        $crate::vector::Vector::new([$($element),*])
    };
}
