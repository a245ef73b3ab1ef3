//! A bit-packed vector, [`BitVector`], and the types needed to work with individual bits.
//!
//! There is no way to take a reference to a single bit, so mutable access goes through a
//! [`BitRef`] proxy, which remembers the byte that holds the bit and the mask that selects it.
//! [`BitCursor`] provides random-access traversal, while [`Iter`] and [`IterMut`] are the usual
//! borrowed iterators.

mod bit_ref;
mod bit_vector;
mod cursor;
mod iter;
mod position;
mod tests;

pub use bit_ref::*;
pub use bit_vector::*;
pub use cursor::*;
pub use iter::*;
pub(crate) use position::BitPos;
