use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{BitPos, BitRef, BitVector};

/// An iterator over the bits of a [`BitVector`], yielding each as a `bool`.
///
/// Both ends are tracked as bit positions, so stepping and seeking carry or borrow across byte
/// boundaries without recomputing the byte for every bit.
#[derive(Clone)]
pub struct Iter<'a> {
    vec: &'a BitVector,
    front: BitPos,
    back: BitPos,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(vec: &'a BitVector) -> Iter<'a> {
        Iter {
            vec,
            front: BitPos::from_index(0),
            back: BitPos::from_index(vec.len()),
        }
    }

    fn read(&self, pos: BitPos) -> bool {
        self.vec.arr[pos.byte] & pos.mask() != 0
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let bit = self.read(self.front);
        self.front = self.front.inc();
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.index() - self.front.index();
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match isize::try_from(n).ok().and_then(|n| self.front.seek(n)) {
            Some(pos) if pos < self.back => {
                self.front = pos;
                self.next()
            },
            _ => {
                self.front = self.back;
                None
            },
        }
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back = self.back.dec()?;
        Some(self.read(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An iterator yielding a [`BitRef`] for each bit of a [`BitVector`].
///
/// All yielded BitRefs may be held at once, even those sharing a byte, since each only touches its
/// own bit.
pub struct IterMut<'a> {
    base: NonNull<u8>,
    front: BitPos,
    back: BitPos,
    _phantom: PhantomData<&'a mut BitVector>,
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(vec: &'a mut BitVector) -> IterMut<'a> {
        IterMut {
            base: vec.base_ptr(),
            front: BitPos::from_index(0),
            back: BitPos::from_index(vec.len()),
            _phantom: PhantomData,
        }
    }

    fn bit(&self, pos: BitPos) -> BitRef<'a> {
        // SAFETY: pos is always below the length of the exclusively borrowed vector, so the byte is
        // within its allocation for 'a.
        unsafe { BitRef::new(self.base.add(pos.byte), pos.mask()) }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = BitRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let bit = self.bit(self.front);
        self.front = self.front.inc();
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.index() - self.front.index();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back = self.back.dec()?;
        Some(self.bit(self.back))
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl FusedIterator for IterMut<'_> {}
