const BITS: usize = u8::BITS as usize;

/// The location of a single bit, split into the byte that holds it and its offset within that
/// byte. The order of positions is the order of the bits they refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct BitPos {
    pub byte: usize,
    pub offset: u8,
}

impl BitPos {
    pub const fn from_index(index: usize) -> BitPos {
        BitPos {
            byte: index / BITS,
            offset: (index % BITS) as u8,
        }
    }

    pub const fn index(self) -> usize {
        self.byte * BITS + self.offset as usize
    }

    /// The mask selecting this bit within its byte.
    pub const fn mask(self) -> u8 {
        1 << self.offset
    }

    /// Moves forward by one bit, carrying into the next byte after the last offset.
    pub const fn inc(self) -> BitPos {
        if self.offset == 7 {
            BitPos { byte: self.byte + 1, offset: 0 }
        } else {
            BitPos { byte: self.byte, offset: self.offset + 1 }
        }
    }

    /// Moves back by one bit, borrowing from the previous byte before the first offset. Returns
    /// [`None`] when already at the first bit.
    pub const fn dec(self) -> Option<BitPos> {
        match (self.byte, self.offset) {
            (0, 0) => None,
            (byte, 0) => Some(BitPos { byte: byte - 1, offset: 7 }),
            (byte, offset) => Some(BitPos { byte, offset: offset - 1 }),
        }
    }

    /// Moves by `delta` bits in either direction, carrying or borrowing whole bytes as required.
    /// Returns [`None`] if the result would be before the first bit or can't be represented.
    pub fn seek(self, delta: isize) -> Option<BitPos> {
        let total = (self.offset as isize).checked_add(delta)?;
        let byte = self.byte.checked_add_signed(total.div_euclid(BITS as isize))?;
        let offset = total.rem_euclid(BITS as isize) as u8;
        Some(BitPos { byte, offset })
    }
}
