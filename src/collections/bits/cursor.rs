use std::fmt::{self, Debug, Formatter};

use super::{BitPos, BitRef, BitVector};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A type for random-access traversal and mutation of a [`BitVector`]. See
/// [`BitVector::cursor_front`] and [`BitVector::cursor_at`] to create one.
///
/// A BitCursor sits at a position between `0` and `len` inclusive. The position equal to `len`
/// is the end of the BitVector and holds no bit, so reads there return [`None`]. Movement never
/// leaves that range: moving past either end stops at the end reached.
pub struct BitCursor<'a> {
    vec: &'a mut BitVector,
    pos: BitPos,
}

impl<'a> BitCursor<'a> {
    pub(crate) fn new(vec: &'a mut BitVector, index: usize) -> BitCursor<'a> {
        BitCursor {
            vec,
            pos: BitPos::from_index(index),
        }
    }

    /// Returns the index of the cursor. This is equal to the length of the BitVector when the
    /// cursor is at the end.
    pub fn index(&self) -> usize {
        self.pos.index()
    }

    /// Returns true if the cursor is positioned after the last bit.
    pub fn is_end(&self) -> bool {
        self.pos.index() == self.vec.len()
    }

    /// Moves the cursor forward by one bit, stopping at the end.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec: BitVector = [false, true].into_iter().collect();
    /// let mut cursor = vec.cursor_front();
    /// assert_eq!(cursor.move_next().read(), Some(true));
    /// assert_eq!(cursor.move_next().read(), None);
    /// assert_eq!(cursor.move_next().index(), 2);
    /// ```
    pub fn move_next(&mut self) -> &mut Self {
        if !self.is_end() {
            self.pos = self.pos.inc();
        }
        self
    }

    /// Moves the cursor back by one bit, stopping at the first bit.
    pub fn move_prev(&mut self) -> &mut Self {
        if let Some(pos) = self.pos.dec() {
            self.pos = pos;
        }
        self
    }

    /// Moves the cursor by `offset` bits, forward for positive offsets and back for negative ones.
    /// Movement stops at the first bit or the end, whichever is reached.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec = BitVector::with_len(20);
    /// let mut cursor = vec.cursor_front();
    /// assert_eq!(cursor.move_offset(13).index(), 13);
    /// assert_eq!(cursor.move_offset(-6).index(), 7);
    /// assert_eq!(cursor.move_offset(-100).index(), 0);
    /// assert_eq!(cursor.move_offset(100).index(), 20);
    /// ```
    pub fn move_offset(&mut self, offset: isize) -> &mut Self {
        let end = BitPos::from_index(self.vec.len());
        self.pos = match self.pos.seek(offset) {
            Some(pos) => pos.min(end),
            None if offset < 0 => BitPos::from_index(0),
            None => end,
        };
        self
    }

    /// Moves the cursor to `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn move_to(&mut self, index: usize) -> &mut Self {
        self.try_move_to(index).throw()
    }

    /// Moves the cursor to `index`, which may be equal to the length to move to the end.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, leaving the cursor where it was.
    pub fn try_move_to(&mut self, index: usize) -> Result<&mut Self, IndexOutOfBounds> {
        if index > self.vec.len() {
            return Err(IndexOutOfBounds { index, len: self.vec.len() });
        }
        self.pos = BitPos::from_index(index);
        Ok(self)
    }

    /// Reads the bit under the cursor, or [`None`] at the end.
    pub fn read(&self) -> Option<bool> {
        self.vec.get(self.pos.index())
    }

    /// Writes `value` to the bit under the cursor and returns the previous value, or returns
    /// [`None`] without writing at the end.
    pub fn write(&mut self, value: bool) -> Option<bool> {
        Some(self.bit()?.replace(value))
    }

    /// Returns a [`BitRef`] to the bit under the cursor, or [`None`] at the end.
    pub fn bit(&mut self) -> Option<BitRef<'_>> {
        if self.is_end() {
            return None;
        }
        // SAFETY: The cursor isn't at the end, so its position is below the length.
        Some(unsafe { self.vec.bit_unchecked(self.pos.index()) })
    }
}

impl Debug for BitCursor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitCursor")
            .field("index", &self.index())
            .field("bit", &self.read())
            .finish()
    }
}
