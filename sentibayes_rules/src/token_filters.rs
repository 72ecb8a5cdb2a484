//! Filters for token sequences.

mod lowercase;
mod stem;

pub use lowercase::LowercaseFilter;
pub use stem::StemFilter;
