//! Business logic services for the N-Min Finder service

pub mod minimum;
pub mod spreadsheet;

pub use minimum::MinimumService;
