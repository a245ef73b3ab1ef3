use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::Index;
use std::ptr::NonNull;

use super::{BitCursor, BitPos, BitRef, Iter, IterMut};
use crate::collections::contiguous::Array;
use crate::util::capacity::bit_storage_for;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const BITS: usize = u8::BITS as usize;

/// A variable size collection of `bool`s, packed eight to a byte.
///
/// A BitVector tracks its length in bits, separately from its capacity, which is also measured in
/// bits but is always a whole number of bytes. Capacity follows the same power of two policy as
/// [`Vector`](crate::collections::contiguous::Vector), except that any allocation holds at least
/// one byte.
///
/// Every bit of the allocation is defined: bits beyond the length are always zero. This lets
/// equality, hashing and [`count_ones`](BitVector::count_ones) work directly on whole bytes.
///
/// Individual bits can't be borrowed, so the mutable accessors return a [`BitRef`] proxy in place
/// of a `&mut bool`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of bits in the BitVector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `resize` | `O(n)` |
/// | `count_ones` | `O(n)` |
/// | `swap_with` | `O(1)` |
///
/// \* If the BitVector doesn't have enough capacity for the new bit, `push` will take `O(n)`.
pub struct BitVector {
    pub(crate) arr: Array<u8>,
    pub(crate) len: usize,
}

impl BitVector {
    /// Creates a new BitVector with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let vec = BitVector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> BitVector {
        BitVector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new BitVector holding `len` bits, all `false`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let vec = BitVector::with_len(10);
    /// assert_eq!(vec.len(), 10);
    /// assert_eq!(vec.cap(), 16);
    /// assert_eq!(vec.count_ones(), 0);
    /// ```
    pub fn with_len(len: usize) -> BitVector {
        BitVector::repeat(false, len)
    }

    /// Creates a new BitVector holding `len` copies of `value`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let vec = BitVector::repeat(true, 5);
    /// assert!(vec.iter().all(|bit| bit));
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn repeat(value: bool, len: usize) -> BitVector {
        let mut vec = BitVector {
            arr: Array::repeat_item(0, bit_storage_for(len) / BITS),
            len,
        };
        if value {
            vec.fill_range(0, len);
        }
        vec
    }

    /// Replaces the contents of the BitVector with `len` copies of `value`. The capacity is reused
    /// where possible.
    pub fn assign(&mut self, value: bool, len: usize) {
        self.clear();
        self.resize(len, value);
    }

    /// Returns the length of the BitVector, in bits.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BitVector contains no bits.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the BitVector, in bits. Always a multiple of 8.
    pub const fn cap(&self) -> usize {
        self.arr.size() * BITS
    }

    /// Returns the number of bits set to `true`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let vec: BitVector = [true, false, true, true].into_iter().collect();
    /// assert_eq!(vec.count_ones(), 3);
    /// ```
    pub fn count_ones(&self) -> usize {
        // Bits beyond len are always zero, so whole bytes can be counted.
        self.arr.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Returns the bit at `index`, or [`None`] if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }

        let pos = BitPos::from_index(index);
        Some(self.arr[pos.byte] & pos.mask() != 0)
    }

    /// Returns the bit at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let vec = BitVector::repeat(true, 3);
    /// assert_eq!(vec.at(2), Ok(true));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<bool, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a [`BitRef`] to the bit at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec = BitVector::with_len(4);
    /// vec.at_mut(2).unwrap().set(true);
    /// assert_eq!(vec.get(2), Some(true));
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<BitRef<'_>, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has been checked to be in bounds.
        Ok(unsafe { self.bit_unchecked(index) })
    }

    /// Returns a [`BitRef`] to the bit at `index`, without checking that the index is in bounds.
    ///
    /// # Safety
    /// `index` must be less than the capacity of the BitVector. Writing to a bit at or beyond the
    /// length breaks the invariant that those bits are zero, so callers must only write within
    /// `0..len`.
    pub unsafe fn bit_unchecked(&mut self, index: usize) -> BitRef<'_> {
        let pos = BitPos::from_index(index);
        // SAFETY: The caller guarantees that the byte is within the allocation, which the
        // mutable borrow of self covers for the lifetime of the BitRef.
        unsafe { BitRef::new(self.arr.ptr.add(pos.byte), pos.mask()) }
    }

    /// Returns the first bit, or [`None`] if the BitVector is empty.
    pub fn front(&self) -> Option<bool> {
        self.get(0)
    }

    /// Returns the last bit, or [`None`] if the BitVector is empty.
    pub fn back(&self) -> Option<bool> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Returns a [`BitRef`] to the first bit, or [`None`] if the BitVector is empty.
    pub fn front_mut(&mut self) -> Option<BitRef<'_>> {
        self.at_mut(0).ok()
    }

    /// Returns a [`BitRef`] to the last bit, or [`None`] if the BitVector is empty.
    pub fn back_mut(&mut self) -> Option<BitRef<'_>> {
        let index = self.len.checked_sub(1)?;
        self.at_mut(index).ok()
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.at_mut(index).throw().set(value);
    }

    /// Inverts the bit at `index`, leaving all other bits untouched.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec = BitVector::repeat(true, 5);
    /// vec.flip(3);
    /// assert_eq!(vec.iter().collect::<Vec<_>>(), [true, true, true, false, true]);
    /// ```
    pub fn flip(&mut self, index: usize) {
        self.at_mut(index).throw().flip();
    }

    /// Appends `value` to the end of the BitVector, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec = BitVector::new();
    /// vec.push(true);
    /// assert_eq!(vec.cap(), 8);
    /// for _ in 0..8 {
    ///     vec.push(false);
    /// }
    /// assert_eq!(vec.len(), 9);
    /// assert_eq!(vec.cap(), 16);
    /// ```
    pub fn push(&mut self, value: bool) {
        self.reserve_extra(1);
        let index = self.len;
        self.len += 1;
        if value {
            // SAFETY: index < len <= cap after reserving.
            unsafe { self.bit_unchecked(index).set(true) }
        }
    }

    /// Removes the last bit and returns it, or [`None`] if the BitVector is empty. The capacity is
    /// unchanged.
    pub fn pop(&mut self) -> Option<bool> {
        let index = self.len.checked_sub(1)?;
        // SAFETY: index < len.
        let value = unsafe { self.bit_unchecked(index).replace(false) };
        self.len = index;
        Some(value)
    }

    /// Ensures that the BitVector has capacity for at least `cap` bits. Reallocates to
    /// `max(8, next_power_of_two(cap))` bits if the current capacity is smaller, otherwise does
    /// nothing. Newly allocated bits are zero.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow.
    pub fn reserve(&mut self, cap: usize) {
        if cap <= self.cap() {
            return;
        }

        self.realloc_with_cap(bit_storage_for(cap));
    }

    /// Ensures that the BitVector has capacity for an additional `extra` bits.
    ///
    /// # Panics
    /// Panics if `len + extra` overflows.
    pub fn reserve_extra(&mut self, extra: usize) {
        let cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        self.reserve(cap);
    }

    /// Shrinks the BitVector to the smallest capacity that can hold its length under the usual
    /// policy. An empty BitVector releases its allocation entirely.
    pub fn shrink_to_fit(&mut self) {
        let new_cap = bit_storage_for(self.len);
        if new_cap < self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Resizes the BitVector to `len` bits, filling any new bits with `value`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec = BitVector::with_len(3);
    /// vec.resize(6, true);
    /// assert_eq!(vec.iter().collect::<Vec<_>>(), [false, false, false, true, true, true]);
    /// vec.resize(2, true);
    /// assert_eq!(vec.len(), 2);
    /// ```
    pub fn resize(&mut self, len: usize, value: bool) {
        if len <= self.len {
            self.truncate(len);
            return;
        }

        self.reserve(len);
        let old_len = self.len;
        self.len = len;

        if value {
            self.fill_range(old_len, len);
        }
    }

    /// Shortens the BitVector to `len` bits. Has no effect if `len` is greater than or equal to the
    /// current length. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let pos = BitPos::from_index(len);
        let used_bytes = self.used_bytes();

        // Clear the tail of the partial byte, then every byte after it.
        self.arr[pos.byte] &= pos.mask() - 1;
        self.arr[pos.byte + 1..used_bytes].fill(0);
        self.len = len;
    }

    /// Removes all bits from the BitVector. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the contents of two BitVectors, including their allocations.
    pub fn swap_with(&mut self, other: &mut BitVector) {
        mem::swap(self, other);
    }

    /// Moves all bits out of the BitVector, leaving it empty with no allocation.
    pub fn take(&mut self) -> BitVector {
        mem::take(self)
    }

    /// Returns an iterator over the bits of the BitVector.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns an iterator yielding a [`BitRef`] for each bit of the BitVector.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec = BitVector::with_len(4);
    /// for mut bit in vec.iter_mut().step_by(2) {
    ///     bit.set(true);
    /// }
    /// assert_eq!(vec.iter().collect::<Vec<_>>(), [true, false, true, false]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self)
    }

    /// Creates a [`BitCursor`] positioned at the first bit.
    pub fn cursor_front(&mut self) -> BitCursor<'_> {
        BitCursor::new(self, 0)
    }

    /// Creates a [`BitCursor`] positioned at `index`. An index equal to the length is accepted and
    /// refers to the position after the last bit.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`.
    pub fn cursor_at(&mut self, index: usize) -> Result<BitCursor<'_>, IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        Ok(BitCursor::new(self, index))
    }

    /// The number of bytes holding at least one bit below the length.
    pub(crate) const fn used_bytes(&self) -> usize {
        self.len.div_ceil(BITS)
    }

    pub(crate) fn base_ptr(&mut self) -> NonNull<u8> {
        self.arr.ptr
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        Ok(())
    }

    /// Sets every bit in `start..end` to `true`. Both bounds must be within the capacity.
    fn fill_range(&mut self, start: usize, end: usize) {
        let mut pos = BitPos::from_index(start);
        let end = BitPos::from_index(end);

        // Set single bits until byte aligned, then whole bytes, then the remaining bits.
        while pos < end && pos.offset != 0 {
            self.arr[pos.byte] |= pos.mask();
            pos = pos.inc();
        }
        // Only jump to the last byte if the loop above left an earlier one.
        if pos.byte < end.byte {
            self.arr[pos.byte..end.byte].fill(u8::MAX);
            pos = BitPos { byte: end.byte, offset: 0 };
        }
        while pos < end {
            self.arr[pos.byte] |= pos.mask();
            pos = pos.inc();
        }
    }

    /// Reallocates to exactly `cap` bits, zeroing any new bytes. `cap` must be a multiple of 8 and
    /// at least len.
    fn realloc_with_cap(&mut self, cap: usize) {
        let old_size = self.arr.size();
        let new_size = cap / BITS;
        // Check the layout up front, so that a panic can't leave self without its allocation.
        Array::<u8>::make_layout(new_size);

        let mut arr = mem::take(&mut self.arr).forget_init();
        arr.realloc(new_size);
        for byte in arr.iter_mut().skip(old_size) {
            *byte = MaybeUninit::new(0);
        }

        // SAFETY: Bytes below old_size were already initialized, the rest were just zeroed.
        self.arr = unsafe { arr.assume_init() };
    }
}

impl Index<usize> for BitVector {
    type Output = bool;

    /// Returns a reference to a static `bool` with the same value as the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &Self::Output {
        if self.at(index).throw() { &true } else { &false }
    }
}

impl Extend<bool> for BitVector {
    fn extend<A: IntoIterator<Item = bool>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve_extra(iter.size_hint().0);

        for bit in iter {
            self.push(bit);
        }
    }
}

impl<'a> Extend<&'a bool> for BitVector {
    fn extend<A: IntoIterator<Item = &'a bool>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut vec = BitVector::new();
        vec.extend(iter);
        vec
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut BitVector {
    type Item = BitRef<'a>;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BitVector {
    /// Creates an independent copy with the same capacity.
    fn clone(&self) -> Self {
        BitVector {
            arr: self.arr.clone(),
            len: self.len,
        }
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.arr[..self.used_bytes()] == other.arr[..other.used_bytes()]
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.arr[..self.used_bytes()].hash(state);
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(value: Vec<bool>) -> Self {
        value.into_iter().collect()
    }
}

impl From<&[bool]> for BitVector {
    fn from(value: &[bool]) -> Self {
        value.iter().collect()
    }
}

impl From<&BitVector> for Vec<bool> {
    fn from(value: &BitVector) -> Self {
        value.iter().collect()
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("contents", &self.to_string())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for BitVector {
    /// Formats the BitVector as a string of `0`s and `1`s, first bit first.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = &'a bool>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
