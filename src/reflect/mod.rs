//! Named, type-checked access to the fields of a struct, registered at compile time.
//!
//! The [`reflect!`](crate::reflect!) macro implements [`Reflect`] for a struct, recording its name
//! and a static table of accessors for the listed fields. An [`Object`] then wraps a mutable
//! reference to an instance and reads or writes those fields by name.
//!
//! Fields are looked up by a linear scan in declaration order, which is plenty for the handful of
//! properties a type usually registers. Field types must be `'static`, since values are checked
//! through [`Any`](std::any::Any).
//!
//! # Examples
//! ```
//! use standard_primitives::reflect::{Object, PropertyError};
//!
//! #[derive(Default)]
//! struct Counter {
//!     count: i32,
//!     label: String,
//! }
//!
//! standard_primitives::reflect!(Counter { count, label });
//!
//! let mut counter = Counter::default();
//! let mut object = Object::new(&mut counter);
//! assert_eq!(object.name(), "Counter");
//!
//! object.set_property("count", 2).unwrap();
//! assert_eq!(object.property::<i32>("count"), Ok(&2));
//! assert!(object.property::<u8>("count").unwrap_err().is_type_mismatch());
//! assert!(object.property::<i32>("total").unwrap_err().is_unknown_property());
//! assert_eq!(counter.count, 2);
//! ```

mod error;
mod macros;
mod object;
mod tests;

pub use error::*;
pub use object::*;
