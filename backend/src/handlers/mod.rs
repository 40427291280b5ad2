//! HTTP handlers for the N-Min Finder API

pub mod health;
pub mod minimum;

pub use health::health_check;
pub use minimum::find_nth_minimum;
