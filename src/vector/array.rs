use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops;
use core::ptr;
use core::ptr::NonNull;
use core::slice;
use core::slice::SliceIndex;

use super::inner::Inner;
use crate::types::Allocator;
use crate::types::AltAllocator;
use crate::types::ErrorReason;
use crate::types::Global;
use crate::types::VecErr;
use crate::types::VecResult;

/// A growable, contiguous array of `T` whose storage comes from an `Allocator`.
///
/// Elements `0..len()` are live, slots `len()..capacity()` are allocated but hold
/// nothing. Storage is only acquired once something needs room, and the capacity
/// then grows through powers of two (0, 1, 2, 4, 8, ...). It never shrinks on its
/// own: `clear`, `pop_back`, `erase` and friends keep the storage.
///
/// Every operation that may allocate is fallible. On error the vector is left
/// exactly as it was before the call.
pub struct Vector<T, A: AltAllocator = Global> {
    inner: Inner<T, A>,
    len:   usize,
    _ph:   PhantomData<T>,
}

// Safety: a `Vector` owns its values and storage exclusively, just like `Vec`.
unsafe impl<T: Send, A: AltAllocator + Send> Send for Vector<T, A> {}
unsafe impl<T: Sync, A: AltAllocator + Sync> Sync for Vector<T, A> {}

impl<T> Vector<T, Global> {
    /// Creates an empty vector. Nothing is allocated.
    pub const fn new() -> Self {
        return Self::new_in(Allocator::new());
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> VecResult<Self> {
        return Self::with_capacity_in(Allocator::new(), capacity);
    }

    /// Creates a vector holding `count` default values.
    pub fn with_len(count: usize) -> VecResult<Self>
    where
        T: Default,
    {
        return Self::with_len_in(Allocator::new(), count);
    }

    /// Creates a vector holding `count` clones of `value`.
    pub fn from_elem(count: usize, value: T) -> VecResult<Self>
    where
        T: Clone,
    {
        return Self::from_elem_in(Allocator::new(), count, value);
    }

    /// Creates a vector holding clones of every element of `src`, in order.
    pub fn from_slice(src: &[T]) -> VecResult<Self>
    where
        T: Clone,
    {
        return Self::from_slice_in(Allocator::new(), src);
    }

    /// Creates a vector by moving the elements of `arr` into it.
    pub fn from_array<const N: usize>(arr: [T; N]) -> VecResult<Self> {
        return Self::try_from_iter_in(Allocator::new(), arr);
    }

    /// Creates a vector from the items of `iter`, in order.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> VecResult<Self> {
        return Self::try_from_iter_in(Allocator::new(), iter);
    }
}

impl<T, A: AltAllocator> Vector<T, A> {
    /// Creates an empty vector using `alloc`. Nothing is allocated.
    pub const fn new_in(alloc: Allocator<T, A>) -> Self {
        return Self {
            inner: Inner::new_in(alloc),
            len:   0,
            _ph:   PhantomData,
        };
    }

    /// Creates an empty vector using `alloc` with room for exactly `capacity` elements.
    pub fn with_capacity_in(alloc: Allocator<T, A>, capacity: usize) -> VecResult<Self> {
        let mut vec = Self::new_in(alloc);
        vec.reserve(capacity)?;
        return Ok(vec);
    }

    /// Creates a vector using `alloc` holding `count` default values.
    pub fn with_len_in(alloc: Allocator<T, A>, count: usize) -> VecResult<Self>
    where
        T: Default,
    {
        let mut vec = Self::new_in(alloc);
        vec.resize_default(count)?;
        return Ok(vec);
    }

    /// Creates a vector using `alloc` holding `count` clones of `value`.
    pub fn from_elem_in(alloc: Allocator<T, A>, count: usize, value: T) -> VecResult<Self>
    where
        T: Clone,
    {
        let mut vec = Self::new_in(alloc);
        vec.resize(count, value)?;
        return Ok(vec);
    }

    /// Creates a vector using `alloc` holding clones of every element of `src`, in order.
    pub fn from_slice_in(alloc: Allocator<T, A>, src: &[T]) -> VecResult<Self>
    where
        T: Clone,
    {
        let mut vec = Self::new_in(alloc);
        vec.insert_slice(0, src)?;
        return Ok(vec);
    }

    /// Creates a vector using `alloc` from the items of `iter`, in order.
    pub fn try_from_iter_in<I: IntoIterator<Item = T>>(alloc: Allocator<T, A>, iter: I) -> VecResult<Self> {
        let iter = iter.into_iter();
        let mut vec = Self::new_in(alloc);
        let (lower, _) = iter.size_hint();
        // Exact size sources grow once here, e.g. five items land in capacity 8.
        vec.inner.grow_for(0, lower)?;
        for item in iter {
            vec.push_back(item)?;
        }
        return Ok(vec);
    }

    /// Makes an independent copy with its own storage and cloned elements.
    pub fn try_clone(&self) -> VecResult<Self>
    where
        T: Clone,
        A: Clone,
    {
        return Self::from_slice_in(self.allocator().clone(), self.as_slice());
    }

    /// Moves everything out into a new vector, leaving this one empty and without
    /// storage. The allocator is cloned so this one stays usable.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let drained = Self::new_in(self.allocator().clone());
        return mem::replace(self, drained);
    }

    /// Exchanges contents, storage and allocator with `other` without allocating.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    #[inline]
    pub const fn allocator(&self) -> &Allocator<T, A> {
        return self.inner.allocator();
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.inner.capacity();
    }

    #[inline]
    pub const fn max_size(&self) -> usize {
        return self.allocator().max_size();
    }

    /// Makes sure at least `capacity` elements fit.
    ///
    /// Unlike the automatic growth this allocates exactly `capacity` slots. If
    /// the vector already holds that many it does nothing, it never shrinks.
    pub fn reserve(&mut self, capacity: usize) -> VecResult<()> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        return self.inner.reallocate(self.len, capacity);
    }

    /// Grows, if needed, so `additional` more elements fit.
    pub(super) fn grow_by(&mut self, additional: usize) -> VecResult<()> {
        let Some(required) = self.len.checked_add(additional) else {
            return Err(VecErr::new(ErrorReason::CapacityOverflow));
        };
        return self.inner.grow_for(self.len, required);
    }

    /// Slot `index` of the storage, live or not.
    #[inline]
    pub(super) fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(index <= self.capacity());
        return unsafe { self.inner.ptr().add(index) };
    }

    #[inline]
    pub(super) fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    pub fn push_back(&mut self, value: T) -> VecResult<()> {
        self.emplace_back(move || value)?;
        return Ok(());
    }

    /// Appends the value returned by `make` and returns a reference to it.
    ///
    /// Room is made before `make` runs, so if that fails `make` is never called.
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> VecResult<&mut T> {
        if self.len == self.capacity() {
            self.grow_by(1)?;
        }
        let slot = self.slot(self.len);
        unsafe { self.allocator().construct(slot, make()) };
        self.len += 1;
        return Ok(unsafe { &mut *slot.as_ptr() });
    }

    /// Removes the last element and hands it back, or `None` if there is none.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        return Some(unsafe { ptr::read(self.slot(self.len).as_ptr()) });
    }

    /// Destroys every element past the first `len`. Does nothing when the
    /// vector is not longer than that.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let count = self.len - len;
        // Shorten first so a panicking destructor can't cause a second drop.
        self.len = len;
        unsafe { self.allocator().destroy_n(self.slot(len), count) };
    }

    /// Destroys every element. The storage is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Checked access, fails with `ErrorReason::OutOfRange` past the end.
    pub fn at(&self, index: usize) -> VecResult<&T> {
        let Some(item) = self.as_slice().get(index) else {
            return Err(VecErr::new(ErrorReason::OutOfRange));
        };
        return Ok(item);
    }

    pub fn at_mut(&mut self, index: usize) -> VecResult<&mut T> {
        let Some(item) = self.as_mut_slice().get_mut(index) else {
            return Err(VecErr::new(ErrorReason::OutOfRange));
        };
        return Ok(item);
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        return self.as_slice().first();
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        return self.as_mut_slice().first_mut();
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        return self.as_slice().last();
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        return self.as_mut_slice().last_mut();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.inner.ptr().as_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.ptr().as_ptr();
    }
}

impl<T, A: AltAllocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // `inner` releases the storage once its values are gone.
        self.clear();
    }
}

impl<T, A: AltAllocator + Default> Default for Vector<T, A> {
    fn default() -> Self {
        return Self::new_in(Allocator::default());
    }
}

impl<T, A: AltAllocator> ops::Deref for Vector<T, A> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T, A: AltAllocator> ops::DerefMut for Vector<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

impl<T, I: SliceIndex<[T]>, A: AltAllocator> ops::Index<I> for Vector<T, A> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        return &self.as_slice()[index];
    }
}

impl<T, I: SliceIndex<[T]>, A: AltAllocator> ops::IndexMut<I> for Vector<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        return &mut self.as_mut_slice()[index];
    }
}

impl<'a, T, A: AltAllocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<'a, T, A: AltAllocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter_mut();
    }
}

impl<T, const N: usize> TryFrom<[T; N]> for Vector<T, Global> {
    type Error = VecErr;

    fn try_from(arr: [T; N]) -> VecResult<Self> {
        return Self::from_array(arr);
    }
}

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: PartialEq<U>,
    A: AltAllocator,
    B: AltAllocator,
{
    fn eq(&self, other: &Vector<U, B>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq, A: AltAllocator> Eq for Vector<T, A> {}

impl<T: PartialEq<U>, U, A: AltAllocator> PartialEq<[U]> for Vector<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        return self.as_slice() == other;
    }
}

impl<T: PartialEq<U>, U, A: AltAllocator> PartialEq<&[U]> for Vector<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        return self.as_slice() == *other;
    }
}

impl<T: PartialEq<U>, U, A: AltAllocator, const N: usize> PartialEq<[U; N]> for Vector<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: fmt::Debug, A: AltAllocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
