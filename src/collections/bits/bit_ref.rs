use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// A proxy standing in for a mutable reference to a single bit of a
/// [`BitVector`](super::BitVector).
///
/// A BitRef holds a pointer to the byte containing the bit and the mask that selects it. Reading
/// and writing happen in place, so changes are visible through the vector as soon as they are
/// made. Several BitRefs may refer to bits of the same byte at once, which is why the byte is
/// only ever accessed through its pointer.
pub struct BitRef<'a> {
    pub(crate) byte: NonNull<u8>,
    pub(crate) mask: u8,
    pub(crate) _phantom: PhantomData<&'a mut u8>,
}

impl<'a> BitRef<'a> {
    /// Creates a BitRef for the bits of `byte` selected by `mask`.
    ///
    /// # Safety
    /// `byte` must be valid for reads and writes for the whole lifetime `'a`, and must not be
    /// accessed through a reference while the BitRef exists. `mask` must have exactly one bit set.
    pub(crate) const unsafe fn new(byte: NonNull<u8>, mask: u8) -> BitRef<'a> {
        BitRef {
            byte,
            mask,
            _phantom: PhantomData,
        }
    }

    /// Reads the referenced bit.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec = BitVector::repeat(true, 3);
    /// assert!(vec.at_mut(1).unwrap().get());
    /// ```
    pub fn get(&self) -> bool {
        // SAFETY: The byte is valid for reads for 'a, as guaranteed on construction.
        unsafe { self.byte.read() & self.mask != 0 }
    }

    /// Writes `value` to the referenced bit, leaving all other bits of the byte untouched.
    pub fn set(&mut self, value: bool) {
        // SAFETY: The byte is valid for reads and writes for 'a, as guaranteed on construction.
        unsafe {
            let byte = self.byte.read();
            self.byte.write(if value { byte | self.mask } else { byte & !self.mask });
        }
    }

    /// Writes `value` to the referenced bit, returning the previous value.
    pub fn replace(&mut self, value: bool) -> bool {
        let old = self.get();
        self.set(value);
        old
    }

    /// Inverts the referenced bit.
    pub fn flip(&mut self) {
        // SAFETY: The byte is valid for reads and writes for 'a, as guaranteed on construction.
        unsafe { self.byte.write(self.byte.read() ^ self.mask) }
    }

    /// Exchanges the values of two referenced bits. The bits may share a byte.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::bits::BitVector;
    /// let mut vec: BitVector = [true, false].into_iter().collect();
    /// let mut iter = vec.iter_mut();
    /// let (mut a, mut b) = (iter.next().unwrap(), iter.next().unwrap());
    /// a.swap(&mut b);
    /// assert_eq!(vec.iter().collect::<Vec<_>>(), [false, true]);
    /// ```
    pub fn swap(&mut self, other: &mut BitRef<'_>) {
        let tmp = self.get();
        self.set(other.get());
        other.set(tmp);
    }

    /// Exchanges the value of the referenced bit with a plain `bool`.
    pub fn swap_bool(&mut self, other: &mut bool) {
        let tmp = self.get();
        self.set(mem::replace(other, tmp));
    }
}

impl From<BitRef<'_>> for bool {
    fn from(value: BitRef<'_>) -> Self {
        value.get()
    }
}

impl From<&BitRef<'_>> for bool {
    fn from(value: &BitRef<'_>) -> Self {
        value.get()
    }
}

impl PartialEq for BitRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for BitRef<'_> {}

impl PartialEq<bool> for BitRef<'_> {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl PartialOrd for BitRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitRef<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl Debug for BitRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitRef").field(&self.get()).finish()
    }
}

impl Display for BitRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.get(), f)
    }
}
