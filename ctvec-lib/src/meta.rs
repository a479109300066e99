//! Compile-time selection primitives independent of the vector algebra.

use std::marker::PhantomData;

use crate::vector::Vector;

/// Structural equality between two vectors, usable inside const evaluation.
///
/// True exactly when the lengths and element sequences match; always false
/// across differing lengths.
///
/// ```
/// use ctvec_lib::prelude::*;
///
/// const _: () = assert!(is_same(&vector![1, 2], &vector![1, 2]));
/// const _: () = assert!(!is_same(&vector![1, 2], &vector![1, 2, 3]));
/// ```
pub const fn is_same<const N: usize, const M: usize>(a: &Vector<N>, b: &Vector<M>) -> bool {
    a.same(b)
}

/// A type-level boolean condition.
///
/// `Condition<B>` implements [`Satisfied`] exactly when `B` is `true`, so a
/// `where Condition<..>: Satisfied` bound admits an item only under the
/// condition. This is the general mechanism for letting a candidate
/// definition participate in selection only when a predicate over its const
/// arguments holds.
///
/// ```
/// use ctvec_lib::meta::Condition;
/// use ctvec_lib::meta::Satisfied;
///
/// struct Guarded<const B: bool>;
///
/// impl<const B: bool> Guarded<B>
/// where
///     Condition<B>: Satisfied,
/// {
///     fn witness() {}
/// }
///
/// Guarded::<true>::witness();
/// ```
///
/// ```compile_fail
/// use ctvec_lib::meta::Condition;
/// use ctvec_lib::meta::Satisfied;
///
/// struct Guarded<const B: bool>;
///
/// impl<const B: bool> Guarded<B>
/// where
///     Condition<B>: Satisfied,
/// {
///     fn witness() {}
/// }
///
/// // error[E0599]: the bound `Condition<false>: Satisfied` is not satisfied
/// Guarded::<false>::witness();
/// ```
pub struct Condition<const B: bool>;

/// Marker for conditions that hold. See [`Condition`].
pub trait Satisfied {}

impl Satisfied for Condition<true> {}

/// Marker selecting the increment interpretation of [`Step`].
pub struct AddOne;

/// Marker selecting the decrement interpretation of [`Step`].
pub struct SubOne;

/// A compile-time integer whose value is selected by a marker type.
///
/// The two inherent impls are candidate definitions of the same named
/// constant; the marker type argument decides which one exists. This is the
/// tagged-dispatch counterpart of selecting among overloads with a
/// type-argument predicate.
///
/// ```
/// use ctvec_lib::meta::AddOne;
/// use ctvec_lib::meta::Step;
///
/// const _: () = assert!(Step::<3, AddOne>::VALUE == 4);
/// ```
pub struct Step<const I: i32, Op>(PhantomData<Op>);

impl<const I: i32> Step<I, AddOne> {
    pub const VALUE: i32 = I + 1;
}

impl<const I: i32> Step<I, SubOne> {
    pub const VALUE: i32 = I - 1;
}
