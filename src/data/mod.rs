//! Contract data sets
//!
//! Holds the built-in sample contracts.

pub mod sample;

pub use sample::*;
