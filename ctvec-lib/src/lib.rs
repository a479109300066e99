//! Compile-time exercises over a fixed-length, type-encoded vector of
//! integers.
//!
//! A [`Vector<N>`](vector::Vector) carries its length in its type; every
//! operation on it is a `const fn`, so binding a result to a `const` item
//! evaluates the whole computation during translation. A computation that
//! leaves an operation's domain — reading past the end, taking the minimum
//! of an empty vector — aborts compilation instead of failing at runtime.
//!
//! Results are verified with `const` assertions:
//!
//! ```
//! use ctvec_lib::prelude::*;
//!
//! const SORTED: Vector<6> = sort(vector![4, 1, 2, 5, 6, 3]);
//! const _: () = assert!(SORTED.same(&vector![1, 2, 3, 4, 5, 6]));
//! ```
//!
//! Operations whose output length differs from their input length take the
//! output length from the annotated result type and check it during
//! evaluation:
//!
//! ```
//! use ctvec_lib::prelude::*;
//!
//! const TRIMMED: Vector<3> = remove_all(9, vector![1, 9, 2, 9, 3, 9]);
//! const _: () = assert!(TRIMMED.same(&vector![1, 2, 3]));
//! ```
//!
//! The only operation with a runtime effect is [`io::print`], which writes a
//! vector's elements space-separated to standard output.

pub mod array;
pub mod edit;
pub mod io;
pub mod meta;
pub mod prelude;
pub mod query;
pub mod remove;
pub mod transform;
pub mod vector;

#[cfg(test)]
pub mod test_prelude;
