use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use tracing::trace;

use super::NullPointer;
use crate::util::result::ResultExtension;

/// A pointer with sole ownership of a heap allocated `T`, or null.
///
/// The pointee is allocated on construction and dropped, along with its allocation, when the
/// Unique is dropped, [`reset`](Unique::reset) or [`clear`](Unique::clear)ed. Ownership moves
/// with the Unique itself, and [`take`](Unique::take) transfers it out of a place while leaving a
/// null pointer behind.
///
/// Zero sized types are never allocated, although they are still dropped as normal.
///
/// # Null Access
/// The checked accessors [`get`](Unique::get) and [`try_get`](Unique::try_get) report a null
/// pointer through their return value. Dereferencing through [`Deref`] is more ergonomic but
/// panics with [`NullPointer`] instead.
pub struct Unique<T> {
    ptr: Option<NonNull<T>>,
    _phantom: PhantomData<T>,
}

impl<T> Unique<T> {
    /// Allocates space for `value` and moves it there.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::pointer::Unique;
    /// let ptr = Unique::new(99);
    /// assert_eq!(*ptr, 99);
    /// ```
    pub fn new(value: T) -> Unique<T> {
        let ptr = Self::allocate();
        // SAFETY: ptr is valid for writes and properly aligned for T, as it was just allocated
        // with T's layout.
        unsafe { ptr.write(value) };

        Unique {
            ptr: Some(ptr),
            _phantom: PhantomData,
        }
    }

    /// Creates a null Unique, which owns nothing.
    pub const fn null() -> Unique<T> {
        Unique {
            ptr: None,
            _phantom: PhantomData,
        }
    }

    /// Takes ownership of the value held by a [`Box`], reusing its allocation.
    pub fn from_box(value: Box<T>) -> Unique<T> {
        Unique {
            // SAFETY: Box::into_raw never returns null.
            ptr: Some(unsafe { NonNull::new_unchecked(Box::into_raw(value)) }),
            _phantom: PhantomData,
        }
    }

    /// Converts the Unique into a [`Box`], reusing its allocation, or returns [`None`] if null.
    pub fn into_box(self) -> Option<Box<T>> {
        let ptr = mem::ManuallyDrop::new(self).ptr?;
        // SAFETY: The allocation was made by the global allocator with Layout::new::<T>(), which
        // is exactly what Box expects, and ownership is transferred since self is never dropped.
        Some(unsafe { Box::from_raw(ptr.as_ptr()) })
    }

    /// Returns true if the Unique doesn't own a value.
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Returns a reference to the owned value, or [`None`] if null.
    pub fn get(&self) -> Option<&T> {
        // SAFETY: A non-null pointer always refers to an initialized value owned by self.
        self.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Returns a mutable reference to the owned value, or [`None`] if null.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As with get, and the mutable borrow of self guarantees exclusive access.
        self.ptr.map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Returns a reference to the owned value.
    ///
    /// # Errors
    /// Returns [`NullPointer`] if the Unique is null.
    pub fn try_get(&self) -> Result<&T, NullPointer> {
        self.get().ok_or(NullPointer)
    }

    /// Returns a mutable reference to the owned value.
    ///
    /// # Errors
    /// Returns [`NullPointer`] if the Unique is null.
    pub fn try_get_mut(&mut self) -> Result<&mut T, NullPointer> {
        self.get_mut().ok_or(NullPointer)
    }

    /// Drops the owned value, if any, then takes ownership of `value`.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::pointer::Unique;
    /// let mut ptr = Unique::new(String::from("old"));
    /// ptr.reset(String::from("new"));
    /// assert_eq!(ptr.as_str(), "new");
    /// ```
    pub fn reset(&mut self, value: T) {
        self.clear();
        *self = Unique::new(value);
    }

    /// Drops the owned value, if any, leaving the Unique null.
    pub fn clear(&mut self) {
        drop(self.take());
    }

    /// Moves the owned value out of its allocation, which is released, leaving the Unique null.
    /// Returns [`None`] if it was already null.
    pub fn release(&mut self) -> Option<T> {
        let ptr = self.ptr.take()?;
        // SAFETY: The value is initialized and is never read again, as ptr has been removed from
        // self.
        let value = unsafe { ptr.read() };
        // SAFETY: ptr was allocated by allocate and its value has been moved out.
        unsafe { Self::deallocate(ptr) };
        Some(value)
    }

    /// Transfers ownership to a new Unique, leaving this one null.
    ///
    /// # Examples
    /// ```
    /// # use standard_primitives::pointer::Unique;
    /// let mut source = Unique::new(1);
    /// let target = source.take();
    /// assert!(source.is_null());
    /// assert_eq!(target.get(), Some(&1));
    /// ```
    pub fn take(&mut self) -> Unique<T> {
        mem::take(self)
    }

    /// Stores `value` in place of the owned value, which is returned. If the Unique was null, a
    /// new allocation is made and [`None`] is returned.
    pub fn replace(&mut self, value: T) -> Option<T> {
        match self.get_mut() {
            Some(current) => Some(mem::replace(current, value)),
            None => {
                *self = Unique::new(value);
                None
            },
        }
    }

    fn allocate() -> NonNull<T> {
        let layout = Layout::new::<T>();
        if layout.size() == 0 {
            return NonNull::dangling();
        }

        trace!(size = layout.size(), align = layout.align(), "allocated unique pointee");

        // SAFETY: The layout has a non-zero size.
        let raw_ptr = unsafe { alloc::alloc(layout) }.cast::<T>();
        NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }

    /// Releases the allocation behind ptr, without dropping its value.
    ///
    /// # Safety
    /// ptr must have come from [`allocate`](Unique::allocate) or a [`Box`] and must not be used
    /// again.
    unsafe fn deallocate(ptr: NonNull<T>) {
        let layout = Layout::new::<T>();
        if layout.size() != 0 {
            // SAFETY: The caller guarantees that ptr was allocated in the global allocator with
            // this layout.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Drop for Unique<T> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            // SAFETY: ptr refers to an initialized value owned solely by self, which is dropped
            // once before the allocation is released.
            unsafe {
                ptr.drop_in_place();
                Self::deallocate(ptr);
            }
        }
    }
}

impl<T> Default for Unique<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Deref for Unique<T> {
    type Target = T;

    /// # Panics
    /// Panics with [`NullPointer`] if the Unique is null.
    fn deref(&self) -> &Self::Target {
        self.try_get().throw()
    }
}

impl<T> DerefMut for Unique<T> {
    /// # Panics
    /// Panics with [`NullPointer`] if the Unique is null.
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.try_get_mut().throw()
    }
}

impl<T> From<T> for Unique<T> {
    fn from(value: T) -> Self {
        Unique::new(value)
    }
}

impl<T> From<Box<T>> for Unique<T> {
    fn from(value: Box<T>) -> Self {
        Unique::from_box(value)
    }
}

// SAFETY: Unique owns its pointee exclusively, so sending it sends the T.
unsafe impl<T: Send> Send for Unique<T> {}
// SAFETY: Shared access to a Unique only allows shared access to its T.
unsafe impl<T: Sync> Sync for Unique<T> {}

impl<T: Clone> Clone for Unique<T> {
    /// Creates a new allocation holding a clone of the value. Cloning a null Unique creates
    /// another null Unique.
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Unique::new(value.clone()),
            None => Unique::null(),
        }
    }
}

impl<T: PartialEq> PartialEq for Unique<T> {
    /// Compares the pointees, rather than the addresses. Two null pointers are equal.
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for Unique<T> {}

impl<T: Debug> Debug for Unique<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Unique").field(value).finish(),
            None => f.write_str("Unique(null)"),
        }
    }
}
