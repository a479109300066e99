//! Removal of elements by value.

pub mod remove_all;
pub mod remove_first;
