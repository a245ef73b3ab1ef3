//! Owning pointer types. Currently just [`Unique`], a nullable pointer with sole ownership of a
//! single heap allocation.
#![warn(missing_docs)]

mod error;
mod unique;

pub use error::NullPointer;
pub use unique::Unique;
