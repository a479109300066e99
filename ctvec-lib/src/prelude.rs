//! Re-exports the most commonly-needed APIs of the crate.
//!
//! Intended to be wildcard-imported: `use ctvec_lib::prelude::*;`.

pub use crate::array::index_vector;
pub use crate::array::make_arr;
pub use crate::edit::append::append;
pub use crate::edit::insert::insert;
pub use crate::edit::pop_back::pop_back;
pub use crate::edit::prepend::prepend;
pub use crate::io::print;
pub use crate::io::write_to;
pub use crate::meta::is_same;
pub use crate::meta::Condition;
pub use crate::meta::Satisfied;
pub use crate::query::bisect_left::bisect_left;
pub use crate::query::get::get;
pub use crate::query::length::length;
pub use crate::query::min::min;
pub use crate::remove::remove_all::count;
pub use crate::remove::remove_all::remove_all;
pub use crate::remove::remove_first::contains;
pub use crate::remove::remove_first::remove_first;
pub use crate::transform::set::set;
pub use crate::transform::set::set_from;
pub use crate::transform::sort::sort;
pub use crate::transform::uniq::uniq;
pub use crate::vector;
pub use crate::vector::Vector;
