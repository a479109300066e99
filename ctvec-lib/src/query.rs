//! Structural, aggregate, and positional queries.

pub mod bisect_left;
pub mod get;
pub mod length;
pub mod min;
