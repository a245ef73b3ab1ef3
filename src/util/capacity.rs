//! The capacity policy shared by [`Vector`](crate::collections::contiguous::Vector) and
//! [`BitVector`](crate::collections::bits::BitVector).
//!
//! Every capacity change rounds the requested size up to the next power of two, which is what
//! gives `push` its amortized `O(1)` cost. A request for zero slots is the only exception and maps
//! to no allocation at all.

use super::error::CapacityOverflow;
use super::result::ResultExtension;

/// The smallest capacity a [`BitVector`](crate::collections::bits::BitVector) will allocate, one
/// whole byte.
pub const MIN_BIT_CAP: usize = u8::BITS as usize;

/// Returns the number of slots to allocate when `size` slots are required.
///
/// # Panics
/// Panics if the next power of two would overflow a [`usize`].
pub fn storage_for(size: usize) -> usize {
    match size {
        0 => 0,
        size => size.checked_next_power_of_two().ok_or(CapacityOverflow).throw(),
    }
}

/// Returns the number of bits to allocate when `size` bits are required. The result is always a
/// whole number of bytes.
///
/// # Panics
/// Panics if the next power of two would overflow a [`usize`].
pub fn bit_storage_for(size: usize) -> usize {
    match size {
        0 => 0,
        size => storage_for(size).max(MIN_BIT_CAP),
    }
}
