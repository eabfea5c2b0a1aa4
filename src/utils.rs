//! Miscellaneous utility types and functions.

pub use escaped::Escaped;

mod escaped;
