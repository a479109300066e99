//! Whole-vector transforms.

pub mod set;
pub mod sort;
pub mod uniq;
