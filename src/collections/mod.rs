//! Various general-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about the data structures themselves, but also concepts such as
//! pointers, allocations, proxies and iterators.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves me from writing some of the more repetitive functionality.
//! [`BitVector`](bits::BitVector) can't do that, because there is no such thing as a reference
//! to a single bit, so it hands out [`BitRef`](bits::BitRef) proxies instead.

#[cfg(feature = "bits")]
pub mod bits;
#[cfg(feature = "contiguous")]
pub mod contiguous;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
