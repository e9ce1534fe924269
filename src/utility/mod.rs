//! Utilities
mod utility;

pub use utility::*;
