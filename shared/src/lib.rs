//! Shared domain logic for the N-Min Finder service
//!
//! This crate contains the pure selection algorithm and input validation
//! used by the backend, kept free of I/O so it can be tested in isolation.

pub mod selection;
pub mod validation;

pub use selection::*;
pub use validation::*;
