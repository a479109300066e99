//! Single-element structural edits.

pub mod append;
pub mod insert;
pub mod pop_back;
pub mod prepend;
