use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::{self, NonNull};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, size) = self.into_parts();
        IntoIter {
            // SAFETY: The parts came from a valid Array, which IntoIter now owns.
            buf: unsafe { Array::from_parts(ptr.cast::<MaybeUninit<T>>(), size) },
            start: 0,
            end: size,
            _phantom: PhantomData,
        }
    }
}

/// An owned type for owned iteration over an [`Array`] or
/// [`Vector`](crate::collections::contiguous::Vector).
///
/// Values between `start` and `end` are still initialized, the underlying allocation is released
/// by the held buffer when the iterator is dropped.
pub struct IntoIter<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> IntoIter<T> {
    fn slot(&self, index: usize) -> NonNull<MaybeUninit<T>> {
        // SAFETY: index is always < buf.size, so the offset is within the allocation.
        unsafe { self.buf.ptr.add(index) }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Values between start and end haven't been yielded and are initialized.
            unsafe { ptr::drop_in_place(self.slot(i).as_ptr().cast::<T>()) }
        }
        // buf only holds MaybeUninit values, so dropping it just releases the allocation.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The value at start is initialized and is effectively moved off of the heap
            // by incrementing start.
            let value = unsafe { self.slot(self.start).read().assume_init() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The value at the decremented end is initialized and no longer considered part
            // of the iterator.
            let value = unsafe { self.slot(self.end).read().assume_init() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// Returns the remaining values as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Values between start and end are initialized and contiguous.
        unsafe {
            std::slice::from_raw_parts(self.slot(self.start).as_ptr().cast(), self.end - self.start)
        }
    }
}
