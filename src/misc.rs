//! Miscellaneous items shared across the crate.

pub mod log;
