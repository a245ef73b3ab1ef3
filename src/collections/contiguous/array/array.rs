use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use tracing::trace;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A fixed size, heap allocated buffer that is sized at runtime. Similar to a
/// [`Box<[T]>`](Box<T>).
///
/// Array is the owner of every allocation made by the contiguous collections in this crate. Its
/// [`Drop`] implementation drops all contained values and releases the allocation, so memory is
/// returned on every exit path, including unwinding.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* The allocator may be able to resize in place, in which case no elements are moved.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Array;
    /// let arr = Array::from_iter_exact([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates an Array of `count` values, each produced by calling `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_with<F: FnMut() -> T>(count: usize, mut f: F) -> Array<T> {
        Array::from_iter_exact((0..count).map(|_| f()))
    }

    /// Creates an Array from an [`ExactSizeIterator`], allocating once.
    ///
    /// If the iterator yields fewer items than it reported, the Array is shrunk to the number of
    /// items actually produced. Any surplus items are ignored.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Array;
    /// let arr = Array::from_iter_exact([1, 2, 3]);
    /// assert_eq!(&*arr, [1, 2, 3]);
    /// ```
    pub fn from_iter_exact<I>(iter: I) -> Array<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let mut arr = Self::new_uninit(iter.len());
        let mut written = 0;

        for item in iter.take(arr.size) {
            // SAFETY: written < size, which has been guarded against exceeding isize::MAX bytes, so
            // the offset is within the allocated range of the Array.
            unsafe { arr.ptr.add(written).write(MaybeUninit::new(item)) }
            written += 1;
        }

        arr.realloc(written);
        // SAFETY: All values below written are initialized and written is now the size.
        unsafe { arr.assume_init() }
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// After calling this function, the caller is responsible for the allocated data. The parts
    /// can be used to reconstruct an Array with [`Array::from_parts`].
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// Nothing is checked during construction. For the produced value to be valid:
    /// - `ptr` needs to be allocated in the global allocator with the layout of `[T; size]`, or be
    ///   dangling if that layout has size zero.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    /// - `size * size_of::<T>()` needs to be less than or equal to [`isize::MAX`].
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, the counterpart to [`Array::assume_init`].
    /// Values are no longer dropped when the resulting Array is dropped.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: T and MaybeUninit<T> have the same layout, and initialized values are valid
        // MaybeUninit values.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// A helper function to create a [`Layout`] for `size` elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The caller guarantees that all values are initialized, and the layouts match.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocate the Array to have size equal to `new_size`. Values below the smaller of the two
    /// sizes are moved into the new allocation, new locations are uninitialized. Nothing is
    /// dropped, values beyond `new_size` are the responsibility of the caller.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::from_iter_exact([1_u8, 2, 3]).forget_init();
    /// arr.realloc(4);
    /// arr[3] = MaybeUninit::new(4);
    ///
    /// // SAFETY: All values in arr are now initialized.
    /// let arr = unsafe { arr.assume_init() };
    /// assert_eq!(&*arr, &[1, 2, 3, 4]);
    /// ```
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            (old, new) if old == new => return,
            _ if size_of::<T>() == 0 => {
                // Zero sized types never own an allocation, only the size changes.
                self.ptr
            },
            (0, _) => {
                let layout = Self::make_layout(new_size);
                Self::make_ptr(layout)
            },
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with the layout for the current
                // size, which is non-zero.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.size)) }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.size);
                // Checks that the new layout is valid before resizing.
                let new_layout = Self::make_layout(new_size);

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        trace!(
            old_size = self.size,
            new_size,
            elem_size = size_of::<T>(),
            "reallocated array"
        );

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new `Array<T>` with `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::collections::contiguous::Array;
    /// let arr = Array::repeat_item(5, 3);
    /// assert_eq!(&*arr, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Array<T> {
        Array::repeat_with(count, || item.clone())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: The pointer is nonnull, properly aligned and points to size initialized values.
        // The slice is never used again after being dropped.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self prevents any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_iter_exact(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
