use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::capacity::storage_for;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// The Vector tracks its length (the number of live elements) separately from its capacity (the
/// number of allocated slots). Slots below the length are always initialized and slots above it
/// never are. Every capacity change rounds the requested number of slots up to the next power of
/// two, so that repeated pushes double the capacity.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `resize` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `swap_with` | `O(1)` |
/// | `append` | `O(n+m)` |
/// | `contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
///
/// # Unchecked Access
/// Indexing with `[]` is checked and panics when out of bounds. The unchecked equivalents are the
/// `unsafe` methods [`get_unchecked`](slice::get_unchecked) (available through [`Deref`]),
/// [`front_unchecked`](Vector::front_unchecked) and [`back_unchecked`](Vector::back_unchecked),
/// which perform no bounds checks at all.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with enough capacity to hold `cap` values without reallocating. The
    /// capacity is rounded up to the next power of two.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 8);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(storage_for(cap)),
            len: 0,
        }
    }

    /// Creates a Vector of length `len`, with each value produced by calling `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_with<F: FnMut() -> T>(len: usize, f: F) -> Vector<T> {
        let mut vec = Vector::with_cap(len);
        vec.extend_with(len, f);
        vec
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let vec: Vector<_> = (1_u8..=3).collect();
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Outside of zero, this is always a power of two.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the value at `index`, or an error if `index` is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let vec: Vector<_> = (0_u8..3).collect();
    /// assert_eq!(vec.at(2), Ok(&2));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the value at `index`, or an error if `index` is out of
    /// bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a reference to the first value, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a reference to the last value, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a reference to the first value without checking that the Vector is non-empty.
    ///
    /// # Safety
    /// The Vector must not be empty. Calling this method on an empty Vector is undefined behavior.
    pub unsafe fn front_unchecked(&self) -> &T {
        // SAFETY: The caller guarantees that len > 0, so index 0 is initialized.
        unsafe { self.get_unchecked(0) }
    }

    /// Returns a reference to the last value without checking that the Vector is non-empty.
    ///
    /// # Safety
    /// The Vector must not be empty. Calling this method on an empty Vector is undefined behavior.
    pub unsafe fn back_unchecked(&self) -> &T {
        // SAFETY: The caller guarantees that len > 0, so len - 1 doesn't underflow and is
        // initialized.
        unsafe { self.get_unchecked(self.len - 1) }
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap)
    /// to do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the object.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector, and
            // all values < the old len are initialized. We are making a bitwise copy of the value
            // and then forgetting that the version on the heap exists.
            let value = unsafe { self.arr.ptr.add(self.len).read().assume_init() };
            Some(value)
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary. An
    /// `index` equal to the length appends the value.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// vec.insert(6, 400);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2, 400]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len {
            Err(IndexOutOfBounds { index, len: self.len }).throw()
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the source and destination ranges lie within the
        // allocation. ptr::copy handles the overlap.
        unsafe {
            let slot = self.arr.ptr.add(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), self.len - index);
            slot.write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the value is initialized. After reading it out, the tail is moved
        // down by one to cover the hole and len is decremented so the last slot is forgotten.
        unsafe {
            let slot = self.arr.ptr.add(index);
            let value = slot.read().assume_init();
            ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);
        mem::replace(&mut self[index], new_value)
    }

    /// Ensures that the Vector has capacity for at least `cap` elements. If the current capacity
    /// is smaller, the Vector is reallocated with `cap` rounded up to the next power of two. The
    /// capacity never shrinks.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.reserve(9);
    /// assert_eq!(vec.cap(), 16);
    /// vec.reserve(3);
    /// assert_eq!(vec.cap(), 16);
    /// ```
    pub fn reserve(&mut self, cap: usize) {
        if cap <= self.cap() {
            return;
        }

        self.realloc_with_cap(storage_for(cap));
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if `len + extra` overflows or the memory layout of the Vector would have a size that
    /// exceeds [`isize::MAX`].
    pub fn reserve_extra(&mut self, extra: usize) {
        let cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        self.reserve(cap);
    }

    /// Shrinks the Vector so that its capacity is the smallest power of two that can hold its
    /// length. An empty Vector releases its allocation entirely.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0_u8..5).collect();
    /// vec.reserve(100);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let new_cap = storage_for(self.len);
        if new_cap < self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Shortens the Vector to `len` elements, dropping the rest. Has no effect if `len` is greater
    /// than or equal to the current length. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let old_len = self.len;
        // Set len first, so that a panicking drop can't cause a double drop.
        self.len = len;

        // SAFETY: Values in len..old_len are initialized and are no longer part of the Vector.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.add(len).as_ptr().cast::<T>(),
                old_len - len,
            ));
        }
    }

    /// Drops all values in the Vector. The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0_u8..5).collect();
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the Vector to `len` elements. New elements are produced by calling `f`, removed
    /// elements are dropped. The capacity grows as it would for [`reserve`](Vector::reserve).
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, f: F) {
        if len <= self.len {
            self.truncate(len);
        } else {
            self.reserve(len);
            self.extend_with(len - self.len, f);
        }
    }

    /// Exchanges the contents of two Vectors, including their allocations. No elements are moved.
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Moves all contents out of the Vector, leaving it empty with no allocation.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut source: Vector<_> = (0_u8..3).collect();
    /// let target = source.take();
    /// assert!(source.is_empty());
    /// assert_eq!(source.cap(), 0);
    /// assert_eq!(&*target, &[0, 1, 2]);
    /// ```
    pub fn take(&mut self) -> Vector<T> {
        mem::take(self)
    }

    /// Appends all elements from `other` to self.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn append(&mut self, other: Vector<T>) {
        self.reserve_extra(other.len);

        let mut other = ManuallyDrop::new(other);
        // SAFETY: self is valid for writes from len to len + other.len and other is valid for
        // reads from 0 to other.len. Both are properly aligned and belong to different
        // allocations.
        unsafe {
            ptr::copy_nonoverlapping(
                other.arr.ptr.as_ptr().cast_const(),
                self.arr.ptr.add(self.len).as_ptr(),
                other.len,
            );
        }
        self.len += other.len;

        // The values now belong to self, so other only needs to release its allocation.
        other.len = 0;
        // SAFETY: other is never used again.
        unsafe { ManuallyDrop::drop(&mut other) }
    }

    /// Writes `count` values produced by `f` after the current length, reserving first.
    pub(crate) fn extend_with<F: FnMut() -> T>(&mut self, count: usize, mut f: F) {
        self.reserve_extra(count);
        for _ in 0..count {
            // SAFETY: Enough capacity was reserved for count additional values.
            unsafe { self.push_unchecked(f()) }
        }
    }

    /// Reallocates the internal Array with the provided capacity, which must be at least `len`.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        self.arr.realloc(new_cap);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.reserve_extra(1);
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }
}

impl<T: Default> Vector<T> {
    /// Creates a Vector of length `len` filled with the default value of `T`. The capacity is
    /// `len` rounded up to the next power of two.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_len(5);
    /// assert_eq!(&*vec, &[0, 0, 0, 0, 0]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn with_len(len: usize) -> Vector<T> {
        Vector::repeat_with(len, T::default)
    }

    /// Resizes the Vector to `len` elements, filling any new slots with the default value of `T`.
    pub fn resize_default(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector of length `len` where every element is a clone of `value`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let vec = Vector::repeat("ab", 3);
    /// assert_eq!(&*vec, &["ab", "ab", "ab"]);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn repeat(value: T, len: usize) -> Vector<T> {
        Vector::repeat_with(len, || value.clone())
    }

    /// Resizes the Vector to `len` elements, filling any new slots with clones of `value`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (1_u8..=3).collect();
    /// vec.resize(5, 9);
    /// assert_eq!(&*vec, &[1, 2, 3, 9, 9]);
    /// vec.resize(2, 0);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn resize(&mut self, len: usize, value: T) {
        self.resize_with(len, || value.clone());
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve_extra(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop. Doing so
        // deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self prevents any other access.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    /// Creates an independent copy with the same capacity, cloning every value.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(value: Vector<T>) -> Self {
        let mut value = ManuallyDrop::new(value);
        let len = value.len;
        // SAFETY: value is never used or dropped again, so the Array can be moved out of it.
        let mut arr = unsafe { ptr::read(&value.arr) };

        // Release slots beyond len, leaving only initialized values.
        arr.realloc(len);

        // SAFETY: All len values are initialized.
        unsafe { arr.assume_init() }
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
