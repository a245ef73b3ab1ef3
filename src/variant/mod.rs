//! A type-safe tagged union over a declared set of alternative types.
//!
//! The [`variant!`](crate::variant!) macro declares a genuine enum with one variant per
//! alternative type plus a `Valueless` variant, then implements [`Variant`], [`Alternative`] and
//! [`AlternativeAt`] for it. These traits give the enum the interface of a classic variant type:
//! construction, retrieval and assignment by type, retrieval by declaration index and explicit
//! destruction, all checked at compile time. The enum can still be matched exhaustively like any
//! other.
//!
//! # Examples
//! ```
//! use standard_primitives::variant::{Variant, BadVariantAccess};
//!
//! standard_primitives::variant! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Token {
//!         #[default]
//!         Number(i64),
//!         Word(String),
//!     }
//!     impl Clone;
//! }
//!
//! let mut token = Token::default();
//! assert_eq!(token.index(), Some(0));
//! assert_eq!(token.get::<i64>(), Ok(&0));
//!
//! token.assign(String::from("hello"));
//! assert!(token.holds::<String>());
//! assert_eq!(token.get::<i64>(), Err(BadVariantAccess { requested: 0, live: Some(1) }));
//! assert_eq!(token.get_at::<1>().map(String::as_str), Ok("hello"));
//!
//! token.reset();
//! assert!(token.is_valueless());
//! ```
#![warn(missing_docs)]

mod error;
mod macros;
mod tests;
mod variant;

pub use error::*;
pub use variant::*;
